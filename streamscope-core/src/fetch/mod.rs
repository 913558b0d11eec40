//! Catalog loading from files or URLs.
//!
//! Only transport failures are retried. Once bytes arrive, a parse failure is
//! returned immediately: refetching the same malformed export cannot help.

pub mod retry;
pub mod source;
pub mod transport;

use streamscope_model::Platform;
use tracing::info;

use crate::{error::FetchError, ingest};

pub use retry::{RetryPolicy, fetch_with_retry};
pub use source::CatalogSource;
pub use transport::{CatalogTransport, DefaultTransport};

/// Fetch with retry, then parse.
pub async fn load_catalog<T>(
    transport: &T,
    platform: Platform,
    source: &CatalogSource,
    policy: &RetryPolicy,
) -> Result<ingest::Catalog, FetchError>
where
    T: CatalogTransport + ?Sized,
{
    let bytes = fetch_with_retry(transport, source, policy).await?;
    let catalog = ingest::parse_catalog(platform, &bytes)?;
    info!(
        %platform,
        %source,
        titles = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, TransportError};
    use crate::fetch::transport::MockCatalogTransport;
    use std::path::PathBuf;

    fn source() -> CatalogSource {
        CatalogSource::File(PathBuf::from("hulu_titles.csv"))
    }

    #[tokio::test(start_paused = true)]
    async fn parse_failure_is_not_retried() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(1)
            .returning(|_| Ok(b"show_id,title\ns1,\xff\n".to_vec()));

        let err = load_catalog(
            &transport,
            Platform::Hulu,
            &source(),
            &RetryPolicy::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, FetchError::Parse(CatalogError::Csv(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_body_reports_missing_header() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let err = load_catalog(
            &transport,
            Platform::Hulu,
            &source(),
            &RetryPolicy::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, FetchError::Parse(CatalogError::MissingHeader)));
    }

    #[tokio::test(start_paused = true)]
    async fn transport_retry_then_parse() {
        let mut calls = 0;
        let mut transport = MockCatalogTransport::new();
        transport.expect_fetch_bytes().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(TransportError::Other("timed out".into()))
            } else {
                Ok(b"show_id,type,title\nh1,Movie,Alpha\n".to_vec())
            }
        });

        let catalog = load_catalog(
            &transport,
            Platform::Hulu,
            &source(),
            &RetryPolicy::default(),
        )
        .await
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.platform, Platform::Hulu);
    }
}
