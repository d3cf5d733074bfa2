use crate::models::Apartment;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for apartment listing sources
/// This allows pointing the watcher at another developer's page later
#[async_trait]
pub trait ApartmentSource: Send + Sync {
    /// Fetch the full current apartment list from the source
    async fn fetch(&self) -> Result<Vec<Apartment>>;

    /// Name of the source, used in notification subjects
    fn source_name(&self) -> &'static str;

    /// Listing page URL, used in notification bodies
    fn listing_url(&self) -> &str;
}
