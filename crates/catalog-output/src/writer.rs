//! Batch files on disk.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use catalog_model::ProductBatch;

/// Writes each batch as `batch_<sequence>.json` under `output_dir`,
/// creating the directory if needed. Files are pretty-printed UTF-8 so a
/// human can diff what was (or would be) submitted.
///
/// Returns the written paths in batch order.
pub fn write_batches(batches: &[ProductBatch], output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create batch directory {}", output_dir.display()))?;

    let mut paths = Vec::with_capacity(batches.len());
    for batch in batches {
        let path = output_dir.join(format!("batch_{}.json", batch.sequence));
        let file = File::create(&path)
            .with_context(|| format!("create batch file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &batch.payload)
            .with_context(|| format!("write batch file {}", path.display()))?;
        paths.push(path);
    }
    info!(
        batches = batches.len(),
        dir = %output_dir.display(),
        "wrote batch files"
    );
    Ok(paths)
}
