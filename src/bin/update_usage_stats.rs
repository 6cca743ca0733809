use std::{env, error::Error, path::Path};

use bronze::{
    api::usage_stats::UsageStatsClient, config::IngestionConfig, db::usage_dump_archive::UsageDumpArchive,
    storage::blob_store::AzureBlobStore,
};
use clap::Parser;
use jiff::{civil::Date, Zoned};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Environment name, e.g., test, prod
    #[arg(short, long, default_value = "prod")]
    env: String,

    /// Date to ingest, YYYY-MM-DD.  Defaults to yesterday.
    #[arg(short, long)]
    date: Option<Date>,
}

/// Run this job every day, shortly after midnight.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let _ = dotenvy::from_path(Path::new(&format!(".env/{}.env", args.env)));

    let config = IngestionConfig::from_env()?;
    let api_key = env::var("USAGE_API_KEY")
        .map_err(|_| "environment variable USAGE_API_KEY is not set")?;

    let source = UsageStatsClient::new(config.base_url.clone())?;
    let store =
        AzureBlobStore::from_connection_string(&config.connection_string, &config.container_name)?;
    let archive = UsageDumpArchive::new(config.container_name.clone(), source, store);

    match archive.ingest(&api_key, args.date, &Zoned::now()).await {
        Ok(msg) => info!("{}", msg),
        Err(e) => {
            error!("usage ingestion failed: {}", e);
            return Err(Box::new(e));
        }
    }

    Ok(())
}
