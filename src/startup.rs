use std::{collections::HashSet, path::Path};

use crate::{
    configuration::Settings,
    dal::{load_previous_items, store_dataset},
    domain::{category_key, enrich_rows, Dataset},
    services::fetch_rate_table,
};

pub struct RunSummary {
    pub categories: usize,
    pub carried_over: usize,
    pub dataset_path: String,
}

/// One full refresh: fetch the rate page, merge the rows with the stored
/// keyword snapshot and write the result back.
pub async fn run(settings: Settings) -> anyhow::Result<RunSummary> {
    let rows = fetch_rate_table(&settings.source.rates_url).await?;

    let dataset_path = Path::new(&settings.dataset.path);
    let previous = load_previous_items(dataset_path)?;

    let previous_keys: HashSet<String> = previous
        .iter()
        .map(|item| category_key(&item.item_category))
        .collect();
    let carried_over = rows
        .iter()
        .filter(|row| previous_keys.contains(&category_key(&row.item_category)))
        .count();

    let dataset = Dataset::new(enrich_rows(rows, previous));
    store_dataset(dataset_path, &dataset)?;

    log::info!(
        "Stored {} categories in {}",
        dataset.items.len(),
        dataset_path.display()
    );

    Ok(RunSummary {
        categories: dataset.items.len(),
        carried_over,
        dataset_path: settings.dataset.path,
    })
}
