use std::collections::HashMap;

use itertools::Itertools;

use crate::domain::{
    category::{category_key, CategoryRow, EnrichedItem},
    keywords::{extract_base_keywords, map_category_to_ai_keywords},
};

/// Merge freshly fetched rate rows with the keywords accumulated in the
/// previous snapshot. The fetched rows drive the output: a category that
/// disappeared from the rate page is dropped along with its keywords.
pub fn enrich_rows(rows: Vec<CategoryRow>, previous: Vec<EnrichedItem>) -> Vec<EnrichedItem> {
    let mut carried_keywords: HashMap<String, Vec<String>> = HashMap::new();
    for item in previous {
        carried_keywords.insert(category_key(&item.item_category), item.keywords);
    }

    rows.into_iter()
        .map(|row| {
            let carried = carried_keywords
                .get(&category_key(&row.item_category))
                .cloned()
                .unwrap_or_default();

            EnrichedItem {
                keywords: build_keyword_set(&row.item_category, carried),
                item_category: row.item_category,
                gst_percent: row.gst_percent,
            }
        })
        .collect()
}

fn build_keyword_set(category: &str, carried: Vec<String>) -> Vec<String> {
    carried
        .into_iter()
        .map(|keyword| keyword.to_lowercase())
        .chain(extract_base_keywords(category))
        .chain(
            map_category_to_ai_keywords(category)
                .iter()
                .map(|keyword| keyword.to_string()),
        )
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, percent: u32) -> CategoryRow {
        CategoryRow {
            item_category: category.to_string(),
            gst_percent: percent,
        }
    }

    #[test]
    fn fresh_category_gets_name_tokens_and_bucket_keywords() {
        let items = enrich_rows(vec![row("Milk and Cream", 5)], vec![]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_category, "Milk and Cream");
        assert_eq!(items[0].gst_percent, 5);
        assert_eq!(
            items[0].keywords,
            vec![
                "milk",
                "and",
                "cream",
                "drink",
                "beverage",
                "liquid",
                "refreshment",
                "dairy",
                "bottle"
            ]
        );
    }

    #[test]
    fn carried_keywords_come_first_and_survive_re_runs() {
        let previous = vec![EnrichedItem {
            item_category: "Tea".to_string(),
            gst_percent: 5,
            keywords: vec!["chai".to_string(), "tea".to_string()],
        }];

        let items = enrich_rows(vec![row("Tea", 5)], previous);

        assert_eq!(
            items[0].keywords,
            vec!["chai", "tea", "drink", "beverage", "liquid", "refreshment", "dairy", "bottle"]
        );
    }

    #[test]
    fn category_match_ignores_casing_and_keywords_dedupe() {
        let previous = vec![EnrichedItem {
            item_category: "TEA".to_string(),
            gst_percent: 5,
            keywords: vec!["Tea".to_string(), "herbal".to_string()],
        }];

        let items = enrich_rows(vec![row("Tea", 12)], previous);

        let tea_count = items[0]
            .keywords
            .iter()
            .filter(|keyword| keyword.as_str() == "tea")
            .count();
        assert_eq!(tea_count, 1);
        assert!(items[0].keywords.contains(&"herbal".to_string()));
        assert_eq!(items[0].gst_percent, 12);
    }

    #[test]
    fn enriching_twice_adds_nothing_new() {
        let first = enrich_rows(vec![row("Mobile Phones", 18)], vec![]);
        let second = enrich_rows(vec![row("Mobile Phones", 18)], first.clone());

        assert_eq!(first, second);
    }

    #[test]
    fn categories_missing_from_fetch_are_dropped() {
        let previous = vec![
            EnrichedItem {
                item_category: "Tea".to_string(),
                gst_percent: 5,
                keywords: vec!["tea".to_string()],
            },
            EnrichedItem {
                item_category: "Cement".to_string(),
                gst_percent: 28,
                keywords: vec!["cement".to_string()],
            },
        ];

        let items = enrich_rows(vec![row("Tea", 5)], previous);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_category, "Tea");
    }

    #[test]
    fn fetch_order_is_preserved() {
        let rows = vec![row("Gold Jewellery", 3), row("Cement", 28), row("Tea", 5)];

        let categories: Vec<String> = enrich_rows(rows, vec![])
            .into_iter()
            .map(|item| item.item_category)
            .collect();

        assert_eq!(categories, vec!["Gold Jewellery", "Cement", "Tea"]);
    }

    #[test]
    fn unmatched_category_keeps_only_its_own_tokens() {
        let items = enrich_rows(vec![row("Cement", 28)], vec![]);

        assert_eq!(items[0].keywords, vec!["cement"]);
    }
}
