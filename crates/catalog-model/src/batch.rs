//! Submission batch types.

use serde::{Deserialize, Serialize};

use crate::product::CanonicalProduct;

/// The JSON body submitted per batch: `{"products": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPayload {
    pub products: Vec<CanonicalProduct>,
}

/// One submission unit: a payload plus its 1-based position in the run.
///
/// Batches partition the full record set contiguously in source order;
/// the sequence number doubles as the batch file name suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBatch {
    /// 1-based sequence number within the run.
    pub sequence: usize,
    pub payload: BatchPayload,
}

impl ProductBatch {
    /// Number of products in this batch.
    pub fn len(&self) -> usize {
        self.payload.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.products.is_empty()
    }
}
