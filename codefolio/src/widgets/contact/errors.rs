use thiserror::Error;

/// Errors raised while submitting the contact form.
#[derive(Debug, Error)]
pub(crate) enum ContactError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the submission with status {status}: {error}")]
    Rejected { status: u16, error: String },
}
