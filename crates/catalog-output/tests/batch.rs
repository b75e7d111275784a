//! Batch partitioning behavior.

use catalog_model::{CanonicalProduct, UnitType};
use catalog_output::{BATCH_SIZE, batches_of, build_batches};
use proptest::prelude::*;

fn product(index: usize) -> CanonicalProduct {
    CanonicalProduct {
        internal_code: Some(index.to_string()),
        name: format!("Produto {index}"),
        unit_type: UnitType::Uni,
        price: None,
        visible: true,
        stock: None,
        barcodes: Vec::new(),
        promo_price: None,
        weight: None,
        length: None,
        width: None,
        height: None,
        promo_end_at: None,
        promo_start_at: None,
    }
}

fn products(count: usize) -> Vec<CanonicalProduct> {
    (0..count).map(product).collect()
}

#[test]
fn splits_2500_records_into_1000_1000_500() {
    let batches = build_batches(products(2500));
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 1000);
    assert_eq!(batches[1].len(), 1000);
    assert_eq!(batches[2].len(), 500);
    let sequences: Vec<usize> = batches.iter().map(|batch| batch.sequence).collect();
    assert_eq!(sequences, [1, 2, 3]);
}

#[test]
fn preserves_source_order_across_batch_boundaries() {
    let batches = build_batches(products(BATCH_SIZE + 2));
    assert_eq!(
        batches[0].payload.products[BATCH_SIZE - 1].name,
        format!("Produto {}", BATCH_SIZE - 1)
    );
    assert_eq!(
        batches[1].payload.products[0].name,
        format!("Produto {BATCH_SIZE}")
    );
}

#[test]
fn exact_multiple_has_no_trailing_empty_batch() {
    let batches = batches_of(products(20), 10);
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|batch| batch.len() == 10));
}

#[test]
fn empty_input_yields_no_batches() {
    assert!(build_batches(Vec::new()).is_empty());
}

proptest! {
    /// Batching is a lossless, order-preserving partition: concatenating
    /// the batches reproduces the input, every batch except the last is
    /// full, and sequence numbers count up from 1.
    #[test]
    fn partition_is_lossless_and_ordered(count in 0usize..400, size in 1usize..50) {
        let input = products(count);
        let batches = batches_of(input.clone(), size);

        let rebuilt: Vec<_> = batches
            .iter()
            .flat_map(|batch| batch.payload.products.iter().cloned())
            .collect();
        prop_assert_eq!(&rebuilt, &input);

        for (index, batch) in batches.iter().enumerate() {
            prop_assert_eq!(batch.sequence, index + 1);
            if index + 1 < batches.len() {
                prop_assert_eq!(batch.len(), size);
            } else {
                prop_assert!(batch.len() <= size && !batch.is_empty());
            }
        }
    }
}
