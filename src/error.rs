use std::time::Duration;

use thiserror::Error;

/// Message shown when a text submission cannot be analyzed
pub const CLASSIFICATION_FAILURE_MESSAGE: &str =
    "Failed to analyze ingredients. Please try again.";

/// Message shown when a photo submission cannot be processed
pub const IMAGE_PROCESSING_FAILURE_MESSAGE: &str =
    "Failed to process image. Please try again with a clearer image.";

/// Errors that can occur while checking ingredients
#[derive(Error, Debug)]
pub enum CheckError {
    /// Ingredients could not be classified
    #[error("Classification failed: {0}")]
    ClassificationFailure(String),

    /// Photo could not be turned into classified ingredients
    #[error("Image processing failed: {0}")]
    ImageProcessingFailure(String),

    /// Remote service could not be reached or answered with an error status
    #[error("Network error: {0}")]
    Network(String),

    /// Remote service answered with a body we cannot use
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text recognition failed or returned nothing
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// An operation did not finish in time
    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        operation: &'static str,
        elapsed: Duration,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to read an input file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl CheckError {
    /// The single message a user sees for this failure.
    ///
    /// Image failures collapse to the image message, everything else to the
    /// analysis message.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckError::ImageProcessingFailure(_) | CheckError::Ocr(_) => {
                IMAGE_PROCESSING_FAILURE_MESSAGE
            }
            _ => CLASSIFICATION_FAILURE_MESSAGE,
        }
    }
}
