use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::notify::MailConfig;

const DEFAULT_LISTING_URL: &str =
    "https://www.forestclub.com.pl/wyszukaj/?flat-type=Mieszkanie&area=&room=&floor=#flats-list";

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mail: MailConfig,
    pub brevo_api_key: String,
    pub listing_url: String,
    pub apartments_file: PathBuf,
    pub stats_file: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables, reading a
    /// `.env` file first when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let sender = require("FROM_EMAIL")?;
        let recipient = require("TO_EMAIL")?;
        let brevo_api_key = require("BREVO_API_KEY")?;

        let listing_url = std::env::var("LISTING_URL")
            .unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string());
        let apartments_file = std::env::var("APARTMENTS_FILE")
            .unwrap_or_else(|_| "apartments.csv".to_string())
            .into();
        let stats_file = std::env::var("STATS_FILE")
            .unwrap_or_else(|_| "stats.csv".to_string())
            .into();

        Ok(Self {
            mail: MailConfig { sender, recipient },
            brevo_api_key,
            listing_url,
            apartments_file,
            stats_file,
        })
    }
}

fn require(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Missing required environment variable {key}"))
}
