use thiserror::Error;

/// Failure taxonomy for the analysis pipeline. The API layer maps each
/// variant to a response status; validation and fetch failures are the
/// client's fault, the rest are server-side.
#[derive(Error, Debug)]
pub enum LieLensError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Could not fetch URL content: failed to fetch {url}: {cause}")]
    Fetch { url: String, cause: String },

    #[error("AI response format error: {0}")]
    ResponseFormat(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
