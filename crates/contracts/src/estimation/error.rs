use thiserror::Error;

/// Failure modes of one estimation submit.
#[derive(Error, Debug)]
pub enum EstimationError {
    /// A required field is missing; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The model answered without any usable text.
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The response envelope or the embedded report did not parse as JSON.
    #[error("Failed to parse model response: {0}")]
    Parse(String),

    /// The request never completed: transport failure or non-success status.
    #[error("Request failed: {0}")]
    Network(String),
}

impl EstimationError {
    /// Text shown in the error banner. Validation messages pass through;
    /// every other failure collapses into one retry instruction, the
    /// underlying cause goes to the log only.
    pub fn user_message(&self) -> String {
        match self {
            EstimationError::Validation(message) => message.clone(),
            _ => "Terjadi kesalahan saat membuat estimasi. Silakan coba lagi.".to_string(),
        }
    }
}
