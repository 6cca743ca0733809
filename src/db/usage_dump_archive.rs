// Daily dump of the product usage stats into the bronze container.
// One JSON document per day, named usage_dump_{date}.json.

use jiff::civil::Date;
use jiff::Zoned;
use log::info;

use crate::api::usage_stats::StatsSource;
use crate::error::IngestionError;
use crate::storage::blob_store::BlobStore;

pub struct UsageDumpArchive<S, B> {
    pub container_name: String,
    source: S,
    store: B,
}

/// Return the blob name for the day.  Does not check if the blob exists.
pub fn blob_name(date: Date) -> String {
    format!("usage_dump_{}.json", date)
}

/// The date to ingest: the supplied one, or yesterday relative to `now`.
pub fn resolve_target_date(
    target_date: Option<Date>,
    now: &Zoned,
) -> Result<Date, IngestionError> {
    match target_date {
        Some(date) => Ok(date),
        None => now
            .date()
            .yesterday()
            .map_err(|e| IngestionError::Config(format!("no yesterday for {}: {}", now.date(), e))),
    }
}

impl<S: StatsSource, B: BlobStore> UsageDumpArchive<S, B> {
    pub fn new(container_name: String, source: S, store: B) -> UsageDumpArchive<S, B> {
        UsageDumpArchive {
            container_name,
            source,
            store,
        }
    }

    /// Fetch the usage stats for one day and land them in the container,
    /// overwriting any earlier dump for that day.
    ///
    /// The payload is decoded and re-encoded, so whitespace and key order
    /// may change but values never do.  Nothing is uploaded if the fetch
    /// fails.
    pub async fn ingest(
        &self,
        api_key: &str,
        target_date: Option<Date>,
        now: &Zoned,
    ) -> Result<String, IngestionError> {
        let date = resolve_target_date(target_date, now)?;
        info!("fetching usage stats for {} ...", date);
        let payload = self.source.fetch_daily(date, api_key).await?;
        let body = serde_json::to_string(&payload)?;

        let blob_name = blob_name(date);
        let n = body.len();
        self.store.put(&blob_name, body.into_bytes()).await?;
        info!(
            "uploaded {} bytes to {}/{}",
            n, self.container_name, blob_name
        );

        Ok(format!(
            "Success: data landed in {}/{}",
            self.container_name, blob_name
        ))
    }
}
