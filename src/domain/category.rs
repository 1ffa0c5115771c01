use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One usable row scraped from the rate reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub item_category: String,
    pub gst_percent: u32,
}

/// A category row plus the keyword set accumulated for it across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub item_category: String,
    pub gst_percent: u32,
    pub keywords: Vec<String>,
}

/// The persisted snapshot. Replaced wholesale on every run; there is no
/// history beyond the keywords each surviving item carries forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub last_updated: DateTime<Utc>,
    pub items: Vec<EnrichedItem>,
}

impl Dataset {
    pub fn new(items: Vec<EnrichedItem>) -> Self {
        Dataset {
            last_updated: Utc::now(),
            items,
        }
    }
}

/// Categories match across runs regardless of casing. The stored string
/// keeps the casing of the latest fetch.
pub fn category_key(category: &str) -> String {
    category.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::category_key;

    #[test]
    fn category_key_ignores_casing() {
        assert_eq!(category_key("Milk and Cream"), category_key("MILK AND CREAM"));
        assert_eq!(category_key("Tea"), "tea");
    }
}
