//! Fixed-size partitioning of the canonical record set.

use catalog_model::{BatchPayload, CanonicalProduct, ProductBatch};

/// Products per submission batch.
pub const BATCH_SIZE: usize = 1000;

/// Partitions the record set into [`BATCH_SIZE`]-product batches.
pub fn build_batches(products: Vec<CanonicalProduct>) -> Vec<ProductBatch> {
    batches_of(products, BATCH_SIZE)
}

/// Partitions `products` into contiguous groups of at most `size`,
/// preserving order, with 1-based sequence numbers. The last batch may be
/// short; an empty input yields no batches.
pub fn batches_of(products: Vec<CanonicalProduct>, size: usize) -> Vec<ProductBatch> {
    assert!(size > 0, "batch size must be positive");
    let mut batches = Vec::with_capacity(products.len().div_ceil(size));
    let mut current = Vec::new();
    for product in products {
        current.push(product);
        if current.len() == size {
            batches.push(ProductBatch {
                sequence: batches.len() + 1,
                payload: BatchPayload {
                    products: std::mem::take(&mut current),
                },
            });
        }
    }
    if !current.is_empty() {
        batches.push(ProductBatch {
            sequence: batches.len() + 1,
            payload: BatchPayload { products: current },
        });
    }
    batches
}
