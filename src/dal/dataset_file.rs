use std::{
    fs,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use crate::domain::{Dataset, EnrichedItem};

/// Read the keyword items of the previous snapshot. A dataset that was
/// never written yet comes back empty; a file that exists but doesn't
/// parse is an error, so a bad run can't silently wipe the keywords.
pub fn load_previous_items(path: &Path) -> anyhow::Result<Vec<EnrichedItem>> {
    if !path.exists() {
        log::info!("No dataset at {}, starting empty", path.display());
        return Ok(vec![]);
    }

    let file = File::open(path)
        .with_context(|| format!("Couldn't open dataset file {}", path.display()))?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed dataset file {}", path.display()))?;

    log::info!(
        "Loaded {} categories from snapshot of {}",
        dataset.items.len(),
        dataset.last_updated
    );

    Ok(dataset.items)
}

/// Write the snapshot next to its final path, then rename it into place,
/// so a crash mid-write leaves the previous snapshot intact.
pub fn store_dataset(path: &Path, dataset: &Dataset) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Couldn't create dataset dir {}", parent.display()))?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    let file = File::create(&tmp_path)
        .with_context(|| format!("Couldn't create dataset file {}", tmp_path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset).context("Couldn't serialize dataset")?;
    writer
        .flush()
        .with_context(|| format!("Couldn't flush dataset file {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Couldn't move dataset into {}", path.display()))?;

    Ok(())
}
