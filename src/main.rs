use env_logger::Env;
use holocron::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    match run(configuration).await {
        Ok(summary) => log::info!(
            "Dataset refresh complete: {} categories stored in {} ({} carried forward)",
            summary.categories,
            summary.dataset_path,
            summary.carried_over
        ),
        Err(error) => {
            log::error!("Dataset refresh failed: {:#}", error);
            std::process::exit(1);
        }
    }
}
