use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::source::CatalogSource;
use crate::error::TransportError;

/// Seam between catalog loading and the network/filesystem.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Raw bytes of the export. Decoding is left to the parser so that a
    /// malformed file is not mistaken for a transient failure.
    async fn fetch_bytes(
        &self,
        source: &CatalogSource,
    ) -> Result<Vec<u8>, TransportError>;
}

/// Reads files with `tokio::fs` and URLs with `reqwest`.
#[derive(Debug, Clone)]
pub struct DefaultTransport {
    client: Client,
}

impl DefaultTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("streamscope/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogTransport for DefaultTransport {
    async fn fetch_bytes(
        &self,
        source: &CatalogSource,
    ) -> Result<Vec<u8>, TransportError> {
        match source {
            CatalogSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| {
                    TransportError::File {
                        path: path.clone(),
                        source,
                    }
                })
            }
            CatalogSource::Url(url) => {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(TransportError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}
