use tracing::{info, warn};

use crate::classify::ChangeDecision;
use crate::mail::Mailer;
use crate::models::Apartment;

/// Sender and recipient addresses for notification e-mails.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender: String,
    pub recipient: String,
}

/// Turns a change decision and the affected records into an e-mail
/// and hands it to the mail transport.
pub struct Notifier<M: Mailer> {
    mail: MailConfig,
    source_name: String,
    listing_url: String,
    mailer: M,
}

impl<M: Mailer> Notifier<M> {
    pub fn new(mail: MailConfig, source_name: String, listing_url: String, mailer: M) -> Self {
        Self {
            mail,
            source_name,
            listing_url,
            mailer,
        }
    }

    /// Sends a notification when `decision` is reportable.
    ///
    /// Returns true iff a change was reported. A transport failure is
    /// logged but still counts as reported: losing one notification
    /// is less harmful than losing the data run, so the caller goes
    /// on to persist the freshly scraped list either way.
    pub async fn notify(&self, decision: ChangeDecision, diff: &[Apartment]) -> bool {
        match decision {
            ChangeDecision::NoPriorHistory => {
                info!("No previous stats to compare with");
                return false;
            }
            ChangeDecision::Unchanged => {
                info!("No changes since last time");
                return false;
            }
            _ => {}
        }

        let subject = format!("[{}] {}", self.source_name, decision.label());
        let body = format!(
            "Please check the web page {} or local statistics files\n\n\
             The changes correspond to the following apartment(s):\n\n{}",
            self.listing_url,
            render_table(diff),
        );

        match self
            .mailer
            .send(&self.mail.sender, &self.mail.recipient, &subject, &body)
            .await
        {
            Ok(message_id) => info!("Notification e-mail sent (message id: {message_id})"),
            Err(err) => warn!("Unable to send notification e-mail: {err:#}"),
        }

        true
    }
}

const TABLE_HEADERS: [&str; 6] = ["Apartment", "Size", "Rooms", "Floor", "Status", "Link"];

/// Renders apartment records as a fixed-width plain-text table.
pub fn render_table(apartments: &[Apartment]) -> String {
    let rows: Vec<[String; 6]> = apartments
        .iter()
        .map(|apartment| {
            [
                apartment.name.clone(),
                apartment.size.to_string(),
                apartment.rooms.to_string(),
                apartment.floor.to_string(),
                apartment.status.as_str().to_string(),
                apartment.link.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&TABLE_HEADERS.map(str::to_string), &widths));
    lines.push(render_row(&widths.map(|width| "-".repeat(width)), &widths));
    for row in &rows {
        lines.push(render_row(row, &widths));
    }

    lines.join("\n")
}

fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        line.push_str(&format!("{cell:<width$}  "));
    }
    line.trim_end().to_string()
}
