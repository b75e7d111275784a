//! Bulk-upsert submission of product batches to the catalog API.
//!
//! One `PUT` per batch, no retries and no rate limiting: a failed batch is
//! reported and the run moves on to the next one.

mod client;
mod error;

pub use client::{API_KEY_ENV, CatalogClient, DEFAULT_API_URL, SubmitOutcome, SubmitStatus};
pub use error::{Result, SubmitError};
