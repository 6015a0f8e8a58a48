//! Data loader — the single point of entry for the upstream resumes endpoint.
//!
//! One best-effort fetch per process start: success populates the collection,
//! failure logs and leaves it empty. No retry, no cancellation.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Source of the full resume collection. Implement this to swap the upstream
/// backend without touching startup wiring.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ResumeRecord>, LoaderError>;
}

/// Fetches the collection from the configured resumes endpoint as a single
/// JSON array of records.
pub struct HttpResumeSource {
    client: Client,
    endpoint: String,
}

impl HttpResumeSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl ResumeSource for HttpResumeSource {
    async fn fetch_all(&self) -> Result<Vec<ResumeRecord>, LoaderError> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(LoaderError::Status(response.status()));
        }
        Ok(response.json::<Vec<ResumeRecord>>().await?)
    }
}

/// Best-effort initial load. A fetch failure is logged and yields an empty
/// collection — the service still starts and serves empty views.
pub async fn load_initial_collection(source: &dyn ResumeSource) -> Vec<ResumeRecord> {
    match source.fetch_all().await {
        Ok(records) => {
            info!("Loaded {} resumes from upstream", records.len());
            records
        }
        Err(e) => {
            error!("Error fetching resumes: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        result: Result<Vec<ResumeRecord>, ()>,
    }

    #[async_trait]
    impl ResumeSource for StubSource {
        async fn fetch_all(&self) -> Result<Vec<ResumeRecord>, LoaderError> {
            match &self.result {
                Ok(records) => Ok(records.clone()),
                Err(()) => Err(LoaderError::Status(reqwest::StatusCode::BAD_GATEWAY)),
            }
        }
    }

    fn record(name: &str) -> ResumeRecord {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[tokio::test]
    async fn test_successful_fetch_populates_collection() {
        let source = StubSource {
            result: Ok(vec![record("Ann Lee"), record("Bo Chen")]),
        };
        let collection = load_initial_collection(&source).await;
        assert_eq!(collection.len(), 2);
        assert_eq!(collection[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_collection_empty() {
        let source = StubSource { result: Err(()) };
        let collection = load_initial_collection(&source).await;
        assert!(collection.is_empty());
    }
}
