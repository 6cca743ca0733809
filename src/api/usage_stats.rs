use std::time::Duration;

use async_trait::async_trait;
use jiff::civil::Date;
use serde_json::Value;

use crate::error::IngestionError;

/// Anything that can produce the usage-stats document for one day.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_daily(&self, date: Date, api_key: &str) -> Result<Value, IngestionError>;
}

/// Client for the product usage API.
///
/// One GET per day, `date` and `api_key` as query parameters.  The payload
/// is kept opaque; the only processing is the JSON decode.
pub struct UsageStatsClient {
    base_url: String,
    client: reqwest::Client,
}

impl UsageStatsClient {
    pub fn new(base_url: String) -> Result<UsageStatsClient, IngestionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(UsageStatsClient { base_url, client })
    }
}

#[async_trait]
impl StatsSource for UsageStatsClient {
    async fn fetch_daily(&self, date: Date, api_key: &str) -> Result<Value, IngestionError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("date", date.to_string().as_str()), ("api_key", api_key)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use jiff::civil::date;

    use super::*;

    /// Needs USAGE_API_URL and USAGE_API_KEY in the environment.
    #[ignore]
    #[tokio::test]
    async fn fetch_one_day() -> Result<(), IngestionError> {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
        let client = UsageStatsClient::new(env::var("USAGE_API_URL").unwrap())?;
        let api_key = env::var("USAGE_API_KEY").unwrap();
        let payload = client.fetch_daily(date(2023, 10, 27), &api_key).await?;
        assert!(payload.is_object());
        Ok(())
    }
}
