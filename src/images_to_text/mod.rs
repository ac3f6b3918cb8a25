mod ocr;

pub use ocr::GoogleVisionRecognizer;

use crate::error::CheckError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::PathBuf;

/// Language used for ingredient labels unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Represents the source of an image for OCR processing
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(PathBuf),
    /// Raw image bytes, e.g. from an upload
    Bytes(Vec<u8>),
    /// Image as base64-encoded data
    Base64(String),
}

impl ImageSource {
    /// Short label for logs
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) => format!("{} bytes", bytes.len()),
            ImageSource::Base64(_) => "base64-image".to_string(),
        }
    }

    /// Base64 payload for the image, reading the file if needed
    pub async fn to_base64(&self) -> Result<String, CheckError> {
        match self {
            ImageSource::Path(path) => {
                let image_data = tokio::fs::read(path).await?;
                Ok(STANDARD.encode(&image_data))
            }
            ImageSource::Bytes(bytes) => Ok(STANDARD.encode(bytes)),
            ImageSource::Base64(data) => Ok(data.clone()),
        }
    }
}

/// Text read from an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText {
    pub text: String,
}

/// Anything that can read text out of an image
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Get the recognizer name (e.g., "google_vision")
    fn recognizer_name(&self) -> &str;

    /// Recognize text in `image`, hinting the given language code
    async fn recognize(
        &self,
        image: &ImageSource,
        language: &str,
    ) -> Result<RecognizedText, CheckError>;
}
