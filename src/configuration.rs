use serde::Deserialize;

// The reference page and snapshot location are fixed for normal runs; the
// optional configuration file and APP__ environment variables exist for
// pointing a run at a mirror or a scratch dataset.
const GST_RATES_URL: &str = "https://cleartax.in/s/gst-rates";
const DATASET_PATH: &str = "data/gst_keyword_dataset.json";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    pub dataset: DatasetSettings,
}

#[derive(Deserialize, Clone)]
pub struct SourceSettings {
    pub rates_url: String,
}

#[derive(Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("source.rates_url", GST_RATES_URL)?
        .set_default("dataset.path", DATASET_PATH)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
