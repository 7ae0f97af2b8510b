use std::{env, sync::Arc};

use chrono::Local;
use dashboard::{store::RecordStore, Dashboard, MockStore, RECENT_LIMIT};
use dotenv::dotenv;
use eyre::Context;
use log::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // .env must load before the logger so RUST_LOG from it applies, but
    // the logger must exist before the failure is reported.
    let dotenv_result = dotenv();
    pretty_env_logger::init();
    color_eyre::install()?;
    if let Err(err) = dotenv_result {
        info!("Failed to load .env file: {}", err);
    }

    let store: Arc<dyn RecordStore> = match env::var("MONGO_URL") {
        Ok(mongo_url) => {
            info!("connecting to mongo");
            Arc::new(
                storage::Storage::new(&mongo_url)
                    .await
                    .context("Failed to create storage")?,
            )
        }
        Err(_) => {
            info!("MONGO_URL not set, serving seeded mock data");
            Arc::new(MockStore::seeded())
        }
    };

    let dashboard = Dashboard::new(store);
    let now = Local::now();

    let stats = dashboard.stats(now).await;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    let payments = dashboard.recent_payments(RECENT_LIMIT).await;
    println!("{}", serde_json::to_string_pretty(&payments)?);

    let members = dashboard.recent_members(RECENT_LIMIT).await;
    println!("{}", serde_json::to_string_pretty(&members)?);

    Ok(())
}
