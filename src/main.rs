mod classify;
mod config;
mod diff;
mod mail;
mod models;
mod notify;
mod scrapers;
mod stats;
mod storage;

use anyhow::Context;
use chrono::Local;
use tracing::{info, Level};

use crate::config::Config;
use crate::mail::{BrevoMailer, Mailer};
use crate::notify::Notifier;
use crate::scrapers::{ApartmentSource, BrowserScraper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env()?;

    let scraper = BrowserScraper::new(config.listing_url.clone())?;
    let mailer = BrevoMailer::new(config.brevo_api_key.clone())?;
    let notifier = Notifier::new(
        config.mail.clone(),
        scraper.source_name().to_string(),
        scraper.listing_url().to_string(),
        mailer,
    );

    run_cycle(&config, &scraper, &notifier).await
}

/// One complete fetch–diff–aggregate–classify–notify cycle.
///
/// Fetch and persistence-write failures abort the run; a missing or
/// unreadable prior state is treated as empty and the run continues.
async fn run_cycle<S, M>(config: &Config, source: &S, notifier: &Notifier<M>) -> anyhow::Result<()>
where
    S: ApartmentSource,
    M: Mailer,
{
    let current = source
        .fetch()
        .await
        .context("Failed to fetch the apartment listing")?;

    let previous = storage::read_apartments(&config.apartments_file);
    let changed = diff::diff(&previous, &current);
    if !changed.is_empty() {
        info!("{} apartment record(s) changed since the last run", changed.len());
    }

    let snapshot = stats::aggregate(&current, Local::now().date_naive());
    info!(
        "Total: {}, Free: {}, Sold: {}",
        snapshot.total, snapshot.free, snapshot.sold
    );
    storage::append_snapshot(&config.stats_file, &snapshot)
        .context("Failed to append the statistics snapshot")?;

    let history = storage::read_history(&config.stats_file);
    let decision = classify::classify(&history);

    let reported = notifier.notify(decision, &changed).await;

    // The persisted list only moves forward when a change was
    // reported (or on the very first run), so an unnoticed scrape
    // glitch cannot silently replace the baseline.
    if reported || !config.apartments_file.exists() {
        storage::write_apartments(&config.apartments_file, &current)
            .context("Failed to write the apartment list")?;
    }

    Ok(())
}
