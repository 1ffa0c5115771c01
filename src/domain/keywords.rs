use lazy_static::lazy_static;
use regex::Regex;

struct KeywordBucket {
    name: &'static str,
    pattern: Regex,
    keywords: &'static [&'static str],
}

lazy_static! {
    /// Topic buckets tested in order against the category name; the first
    /// matching bucket wins. Dairy terms live in beverages, so "Milk and
    /// Cream" tags as a beverage even though food is tested first.
    static ref KEYWORD_BUCKETS: Vec<KeywordBucket> = vec![
        KeywordBucket {
            name: "food",
            pattern: Regex::new(
                r"(?i)bread|cereal|flour|rice|wheat|grain|spice|fruit|vegetable|meat|fish|egg|honey|biscuit|chocolate|snack|sugar|salt|oil|butter|ghee|cheese|paneer",
            )
            .unwrap(),
            keywords: &["food", "grocery", "edible", "meal", "cooking", "kitchen", "snack"],
        },
        KeywordBucket {
            name: "beverages",
            pattern: Regex::new(r"(?i)milk|cream|tea|coffee|juice|water|drink|beverage|syrup|soda")
                .unwrap(),
            keywords: &["drink", "beverage", "liquid", "refreshment", "dairy", "bottle"],
        },
        KeywordBucket {
            name: "electronics",
            pattern: Regex::new(
                r"(?i)phone|mobile|computer|laptop|television|electronic|battery|camera|appliance|charger",
            )
            .unwrap(),
            keywords: &["electronics", "gadget", "device", "appliance", "tech", "digital"],
        },
        KeywordBucket {
            name: "clothing",
            pattern: Regex::new(r"(?i)apparel|clothing|garment|textile|fabric|footwear|shoe|hosiery")
                .unwrap(),
            keywords: &["clothes", "apparel", "fashion", "wear", "garment", "outfit"],
        },
        KeywordBucket {
            name: "jewelry",
            pattern: Regex::new(r"(?i)jewel|gold|silver|diamond|gem|precious|ornament").unwrap(),
            keywords: &["jewellery", "ornament", "accessory", "luxury", "precious"],
        },
    ];

    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Keyword list of the first bucket whose pattern matches the category
/// name, or an empty list when no bucket applies.
pub fn map_category_to_ai_keywords(category: &str) -> &'static [&'static str] {
    KEYWORD_BUCKETS
        .iter()
        .find(|bucket| bucket.pattern.is_match(category))
        .map(|bucket| bucket.keywords)
        .unwrap_or(&[])
}

pub fn matching_bucket_name(category: &str) -> Option<&'static str> {
    KEYWORD_BUCKETS
        .iter()
        .find(|bucket| bucket.pattern.is_match(category))
        .map(|bucket| bucket.name)
}

/// Lower-case the category name, strip everything that is neither a word
/// character nor whitespace, then split into tokens.
pub fn extract_base_keywords(category: &str) -> Vec<String> {
    let lowered = category.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");

    stripped
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}
