use std::path::PathBuf;

use catalog_submit::SubmitStatus;

/// Outcome of a full sync run, for the end-of-run summary.
#[derive(Debug)]
pub struct SyncResult {
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    /// Rows read from the export.
    pub rows: usize,
    pub batches: Vec<BatchSummary>,
    pub dry_run: bool,
    /// Whether submission was attempted at all.
    pub submitted: bool,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct BatchSummary {
    pub sequence: usize,
    pub products: usize,
    /// Batch file on disk, when not a dry run.
    pub file: Option<PathBuf>,
    /// Submission outcome, when submission ran.
    pub status: Option<SubmitStatus>,
}
