use async_trait::async_trait;
use azure_storage::ConnectionString;
use azure_storage_blobs::prelude::*;

use crate::error::IngestionError;

/// Write-side of the bronze container.  One operation: land a blob,
/// replacing whatever is already at that name.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, blob_name: &str, body: Vec<u8>) -> Result<(), IngestionError>;
}

/// Blob store backed by an Azure storage account.
pub struct AzureBlobStore {
    container: ContainerClient,
}

impl AzureBlobStore {
    /// Build a client for one container from the account connection string.
    pub fn from_connection_string(
        connection_string: &str,
        container_name: &str,
    ) -> Result<AzureBlobStore, IngestionError> {
        let parsed = ConnectionString::new(connection_string)
            .map_err(|e| IngestionError::Config(format!("bad connection string: {}", e)))?;
        let account = parsed.account_name.ok_or_else(|| {
            IngestionError::Config("connection string has no AccountName".to_string())
        })?;
        let credentials = parsed
            .storage_credentials()
            .map_err(|e| IngestionError::Config(format!("bad connection string: {}", e)))?;
        let service = BlobServiceClient::new(account, credentials);
        Ok(AzureBlobStore {
            container: service.container_client(container_name),
        })
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn put(&self, blob_name: &str, body: Vec<u8>) -> Result<(), IngestionError> {
        // A put-block-blob write replaces any existing blob at this name.
        self.container
            .blob_client(blob_name)
            .put_block_blob(body)
            .content_type("application/json")
            .await
            .map_err(|e| IngestionError::Storage(Box::new(e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_malformed_connection_string() {
        let res = AzureBlobStore::from_connection_string("not-a-connection-string", "bronze");
        assert!(matches!(res, Err(IngestionError::Config(_))));
    }

    #[test]
    fn rejects_a_connection_string_without_an_account() {
        let res = AzureBlobStore::from_connection_string(
            "DefaultEndpointsProtocol=https;AccountKey=bm90LWEta2V5;EndpointSuffix=core.windows.net",
            "bronze",
        );
        assert!(res.is_err());
    }
}
