use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// No API key in the configuration or the environment.
    #[error("missing API key: pass --api-key or set {0}")]
    MissingApiKey(&'static str),

    /// Submission was requested with nothing to submit.
    #[error("no batches to submit")]
    NoBatches,

    /// The HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
