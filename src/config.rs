use std::env;

use crate::error::IngestionError;

pub const DEFAULT_CONTAINER_NAME: &str = "bronze-usage-data";

/// Process configuration for the ingestion job.
///
/// All values come from the environment (populated by the orchestrator, or
/// by a `.env/{env}.env` file loaded in the bin).  The API key is a secret
/// and is read separately at the call site, never held here.
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    /// Upstream stats endpoint, e.g. `https://api.productusage.com/v1/stats`.
    pub base_url: String,
    /// Connection string of the storage account holding the bronze container.
    pub connection_string: String,
    pub container_name: String,
}

impl IngestionConfig {
    pub fn from_env() -> Result<IngestionConfig, IngestionError> {
        Ok(IngestionConfig {
            base_url: require_var("USAGE_API_URL")?,
            connection_string: require_var("AZURE_STORAGE_CONNECTION_STRING")?,
            container_name: env::var("USAGE_CONTAINER_NAME")
                .unwrap_or_else(|_| DEFAULT_CONTAINER_NAME.to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String, IngestionError> {
    env::var(name)
        .map_err(|_| IngestionError::Config(format!("environment variable {} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_named_in_the_error() {
        env::remove_var("USAGE_API_URL");
        let err = IngestionConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("USAGE_API_URL"));
    }
}
