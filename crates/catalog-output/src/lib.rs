//! Batching and batch-file output.
//!
//! Partitions the ordered record set into fixed-size submission units and
//! writes each one as a JSON file for audit and replay.

mod batch;
mod writer;

pub use batch::{BATCH_SIZE, batches_of, build_batches};
pub use writer::write_batches;
