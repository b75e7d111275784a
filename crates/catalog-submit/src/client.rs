//! Blocking client for the store-products bulk upsert endpoint.

use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{error, info};

use catalog_model::ProductBatch;

use crate::error::{Result, SubmitError};

/// Store-products bulk upsert endpoint.
pub const DEFAULT_API_URL: &str = "https://api.instabuy.com.br/store/products";

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "INSTABUY_API_KEY";

/// HTTP request timeout. Batches of 1000 products are a few hundred
/// kilobytes; a minute is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for submitting product batches.
pub struct CatalogClient {
    client: Client,
    api_url: String,
    api_key: String,
}

/// Result of submitting one batch.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Sequence number of the batch this outcome belongs to.
    pub sequence: usize,
    /// Number of products in the batch.
    pub products: usize,
    pub status: SubmitStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The API acknowledged the batch (HTTP 200).
    Accepted,
    /// The API answered with a non-success status.
    Rejected { status: u16, body: String },
    /// The request never completed (connection, timeout, ...).
    Failed { reason: String },
}

impl SubmitStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitStatus::Accepted)
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Accepted => write!(f, "accepted"),
            SubmitStatus::Rejected { status, .. } => write!(f, "rejected ({status})"),
            SubmitStatus::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

impl CatalogClient {
    /// Creates a client for the given key and endpoint.
    pub fn new(api_key: String, api_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SubmitError::ClientSetup)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Creates a client using an explicit key, falling back to the
    /// [`API_KEY_ENV`] environment variable.
    pub fn with_key_or_env(api_key: Option<String>, api_url: Option<String>) -> Result<Self> {
        let key = match api_key {
            Some(key) => key,
            None => env::var(API_KEY_ENV).map_err(|_| SubmitError::MissingApiKey(API_KEY_ENV))?,
        };
        Self::new(key, api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()))
    }

    /// Submits every batch in order, one `PUT` each.
    ///
    /// A rejected or failed batch never aborts the remaining ones; the
    /// caller gets one outcome per batch. Submitting an empty batch list
    /// is an error: it means the pipeline was wired up wrong.
    pub fn submit_all(&self, batches: &[ProductBatch]) -> Result<Vec<SubmitOutcome>> {
        if batches.is_empty() {
            return Err(SubmitError::NoBatches);
        }
        Ok(batches.iter().map(|batch| self.submit_batch(batch)).collect())
    }

    /// Submits a single batch and reports its outcome.
    pub fn submit_batch(&self, batch: &ProductBatch) -> SubmitOutcome {
        let status = match self
            .client
            .put(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&batch.payload)
            .send()
        {
            Ok(response) if response.status().is_success() => {
                info!(sequence = batch.sequence, products = batch.len(), "batch accepted");
                SubmitStatus::Accepted
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().unwrap_or_default();
                error!(sequence = batch.sequence, status, "batch rejected: {body}");
                SubmitStatus::Rejected { status, body }
            }
            Err(err) => {
                error!(sequence = batch.sequence, "batch submission failed: {err}");
                SubmitStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        SubmitOutcome {
            sequence: batch.sequence,
            products: batch.len(),
            status,
        }
    }
}
