pub mod rate_scraper;

pub use rate_scraper::*;
