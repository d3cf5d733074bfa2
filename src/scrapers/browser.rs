use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, info};

use crate::models::Apartment;
use crate::scrapers::parse::parse_apartments;
use crate::scrapers::traits::ApartmentSource;

/// Browser-based scraper for the ForestClub listing page.
///
/// The page hides most offers behind a "load more" button, so a plain
/// HTTP fetch only sees the first screenful; a headless Chrome session
/// clicks the button until every offer is on the page.
pub struct BrowserScraper {
    browser: Browser,
    listing_url: String,
}

impl BrowserScraper {
    pub fn new(listing_url: String) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self {
            browser,
            listing_url,
        })
    }

    fn load_full_listing(&self) -> Result<String> {
        let tab = self.browser.new_tab()?;

        tab.navigate_to(&self.listing_url)?;
        tab.wait_until_navigated()?;

        // Keep clicking "load more" until the button is gone.
        loop {
            let clicked = tab.evaluate(
                r#"
                (() => {
                    const button = document.querySelector('button.btn.load_more_offer');
                    if (button && button.offsetParent !== null) {
                        button.click();
                        return true;
                    }
                    return false;
                })()
                "#,
                false,
            )?;

            let more = clicked.value.as_ref().and_then(|v| v.as_bool()).unwrap_or(false);
            if !more {
                break;
            }
            thread::sleep(Duration::from_millis(500));
        }

        let html_result = tab.evaluate("document.documentElement.outerHTML", false)?;
        let html = html_result
            .value
            .as_ref()
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();

        if html.is_empty() {
            bail!("Listing page returned no HTML");
        }

        debug!("Captured {} bytes of listing HTML", html.len());
        Ok(html)
    }
}

#[async_trait]
impl ApartmentSource for BrowserScraper {
    async fn fetch(&self) -> Result<Vec<Apartment>> {
        info!("Opening the apartment listing page...");

        let html = self.load_full_listing()?;
        let apartments = parse_apartments(&html);

        info!("Found {} apartments on the listing page", apartments.len());
        Ok(apartments)
    }

    fn source_name(&self) -> &'static str {
        "ForestClub"
    }

    fn listing_url(&self) -> &str {
        &self.listing_url
    }
}
