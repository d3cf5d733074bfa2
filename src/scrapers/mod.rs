pub mod browser;
pub mod parse;
pub mod traits;

pub use browser::BrowserScraper;
pub use traits::ApartmentSource;
