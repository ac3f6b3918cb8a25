use crate::config::OcrConfig;
use crate::error::CheckError;
use crate::images_to_text::{ImageSource, RecognizedText, TextRecognizer};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const VISION_BASE_URL: &str = "https://vision.googleapis.com";

/// Text recognition through the Google Cloud Vision API
pub struct GoogleVisionRecognizer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleVisionRecognizer {
    /// Create a recognizer from configuration
    ///
    /// # Errors
    /// Returns an error if no API key is configured and GOOGLE_API_KEY is not set
    pub fn new(config: &OcrConfig) -> Result<Self, CheckError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                CheckError::BuilderError(
                    "GOOGLE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| VISION_BASE_URL.to_string());

        Ok(Self::with_base_url(api_key, base_url))
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        GoogleVisionRecognizer {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Calls the Vision API to perform OCR on base64-encoded image data
    async fn call_google_vision(
        &self,
        base64_image: &str,
        language: &str,
    ) -> Result<String, CheckError> {
        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);

        let request_body = json!({
            "requests": [{
                "image": {
                    "content": base64_image
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }],
                "imageContext": {
                    "languageHints": [vision_language_hint(language)]
                }
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self
            .client
            .post(&url)
            .header("Accept-Encoding", "identity")
            .json(&request_body)
            .send()
            .await?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(CheckError::Ocr(format!(
                "Google Vision API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("Google Vision API response: {:?}", response_body);

        let text = response_body["responses"][0]["fullTextAnnotation"]["text"]
            .as_str()
            .ok_or_else(|| CheckError::Ocr("No text found in image".to_string()))?
            .to_string();

        if text.trim().is_empty() {
            return Err(CheckError::Ocr("No text detected in image".to_string()));
        }

        debug!("Extracted text from image: {} characters", text.len());

        Ok(text)
    }
}

/// Vision expects BCP-47 codes, labels are configured with Tesseract-style ones
fn vision_language_hint(language: &str) -> &str {
    match language {
        "eng" => "en",
        "deu" => "de",
        "fra" => "fr",
        "ita" => "it",
        "spa" => "es",
        "nld" => "nl",
        other => other,
    }
}

#[async_trait]
impl TextRecognizer for GoogleVisionRecognizer {
    fn recognizer_name(&self) -> &str {
        "google_vision"
    }

    async fn recognize(
        &self,
        image: &ImageSource,
        language: &str,
    ) -> Result<RecognizedText, CheckError> {
        debug!("Recognizing text in {}", image.describe());
        let base64_image = image.to_base64().await?;
        let text = self.call_google_vision(&base64_image, language).await?;
        Ok(RecognizedText { text })
    }
}
