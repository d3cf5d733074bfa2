use anyhow::{anyhow, bail, Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::models::{Apartment, Status};

/// Extracts apartment records from the listing page HTML.
///
/// Offers are `tr.active` rows with cells for name, size, rooms,
/// floor and status. Rows that fail to parse are skipped with a
/// warning so one malformed listing cannot abort the whole scrape.
pub fn parse_apartments(html: &str) -> Vec<Apartment> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr.active").unwrap();

    let mut apartments = Vec::new();
    for row in document.select(&row_selector) {
        match parse_row(row) {
            Ok(apartment) => apartments.push(apartment),
            Err(err) => warn!("Skipping unparsable listing row: {err:#}"),
        }
    }
    apartments
}

fn parse_row(row: ElementRef<'_>) -> Result<Apartment> {
    let cell_selector = Selector::parse("td").unwrap();
    let cells: Vec<String> = row
        .select(&cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    if cells.len() < 5 {
        bail!("expected 5 cells, found {}", cells.len());
    }

    let link_selector = Selector::parse("a").unwrap();
    let link = row
        .select(&link_selector)
        .find_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string);

    Ok(Apartment {
        name: cells[0].clone(),
        size: parse_size(&cells[1])?,
        rooms: parse_rooms(&cells[2])?,
        floor: parse_floor(&cells[3])?,
        status: parse_status(&cells[4]),
        link,
    })
}

/// Size cells read like "67,3 m²"; the leading token is the number,
/// with a comma as the decimal separator.
fn parse_size(text: &str) -> Result<f64> {
    let token = first_token(text).ok_or_else(|| anyhow!("empty size cell"))?;
    token
        .replace(',', ".")
        .parse()
        .with_context(|| format!("bad size {text:?}"))
}

fn parse_rooms(text: &str) -> Result<u32> {
    let token = first_token(text).ok_or_else(|| anyhow!("empty rooms cell"))?;
    token
        .parse()
        .with_context(|| format!("bad room count {text:?}"))
}

/// The listing marks the ground floor with the word "parter" instead
/// of a number; other floors read "piętro N".
fn parse_floor(text: &str) -> Result<u32> {
    if text.trim() == "parter" {
        return Ok(0);
    }
    let token = text
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow!("bad floor cell {text:?}"))?;
    token.parse().with_context(|| format!("bad floor {text:?}"))
}

fn parse_status(text: &str) -> Status {
    if text.trim() == "wolne" {
        Status::Free
    } else {
        Status::Sold
    }
}

fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}
