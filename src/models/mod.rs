use serde::{Deserialize, Serialize};

/// Sale status of a listed apartment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Free,
    Sold,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Free => "free",
            Status::Sold => "sold",
        }
    }
}

/// One apartment row scraped from the listing page.
///
/// Records carry no identity beyond their fields: two apartments are
/// the same record iff every field matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    #[serde(rename = "Apartment")]
    pub name: String,
    /// Size in square meters
    #[serde(rename = "Size")]
    pub size: f64,
    #[serde(rename = "Rooms")]
    pub rooms: u32,
    /// Ground floor is 0
    #[serde(rename = "Floor")]
    pub floor: u32,
    #[serde(rename = "Status")]
    pub status: Status,
    /// Detail page URL, absent when the listing row has no anchor
    #[serde(rename = "Link")]
    pub link: Option<String>,
}

/// One point-in-time aggregate of the listing: how many apartments
/// were on the page and how they split between free and sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(rename = "Date")]
    pub date: chrono::NaiveDate,
    #[serde(rename = "Flats total")]
    pub total: u32,
    #[serde(rename = "Flats free")]
    pub free: u32,
    #[serde(rename = "Flats sold")]
    pub sold: u32,
}
