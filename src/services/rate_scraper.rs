use std::time::Duration;

use anyhow::Context;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::CategoryRow;

lazy_static! {
    static ref FIRST_INT: Regex = Regex::new(r"\d+").unwrap();
}

/// Download the GST rate page and extract every (category, rate) row it
/// lists. Network and HTTP failures bubble up; rows that don't look like
/// rate entries are silently dropped.
pub async fn fetch_rate_table(rates_url: &str) -> anyhow::Result<Vec<CategoryRow>> {
    let url = Url::parse(rates_url).context("Invalid GST rate page url")?;

    let client = reqwest::Client::builder()
        .read_timeout(Duration::from_secs(30))
        .build()
        .context("Couldn't build http client")?;

    log::info!("Fetching GST rate page: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .context("No response from GST rate page")?
        .error_for_status()
        .context("GST rate page returned an error status")?;

    let html_content = response
        .text()
        .await
        .context("Couldn't read GST rate page body")?;

    let rows = extract_category_rows(&html_content);
    log::info!("Found {} rate rows across all tables", rows.len());

    Ok(rows)
}

pub fn extract_category_rows(html_content: &str) -> Vec<CategoryRow> {
    let document = Html::parse_document(html_content);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut rows = Vec::new();

    for table in document.select(&table_selector) {
        for row in table.select(&row_selector) {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().split_whitespace().join(" "))
                .collect();

            // Header rows use th cells and come out empty here
            if cells.len() < 2 || cells[0].is_empty() {
                continue;
            }
            let Some(gst_percent) = first_integer(&cells[1]) else {
                continue;
            };

            rows.push(CategoryRow {
                item_category: cells[0].clone(),
                gst_percent,
            });
        }
    }

    rows
}

fn first_integer(text: &str) -> Option<u32> {
    FIRST_INT
        .find(text)
        .and_then(|matched| matched.as_str().parse::<u32>().ok())
}
