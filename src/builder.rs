use std::path::PathBuf;
use std::time::Duration;

use crate::classifiers::{Classifier, MockClassifier};
use crate::images_to_text::{ImageSource, TextRecognizer};
use crate::session::AnalysisSession;
use crate::{CheckError, IngredientResult};

/// Represents the input source for an ingredient check
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Comma- or newline-separated ingredient names
    Text(String),
    /// Photo of an ingredients label (will be OCR'd)
    Image(ImageSource),
}

/// Builder for configuring and executing one-off ingredient checks
#[derive(Default)]
pub struct CheckerBuilder {
    source: Option<InputSource>,
    classifier: Option<Box<dyn Classifier>>,
    recognizer: Option<Box<dyn TextRecognizer>>,
    language: Option<String>,
    timeout: Option<Duration>,
}

impl CheckerBuilder {
    /// Set the input source to plain text
    ///
    /// # Example
    /// ```
    /// use additive_check::ComplianceChecker;
    ///
    /// let builder = ComplianceChecker::builder()
    ///     .text("Water, Sugar, Yellow 5");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to an image file
    ///
    /// Requires a text recognizer, see [`CheckerBuilder::recognizer`].
    pub fn image(mut self, image_path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::Image(ImageSource::Path(image_path.into())));
        self
    }

    /// Set the input source to an already loaded image
    pub fn image_source(mut self, image: ImageSource) -> Self {
        self.source = Some(InputSource::Image(image));
        self
    }

    /// Use a specific classifier instead of the default mock
    pub fn classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the recognizer used for image input
    pub fn recognizer(mut self, recognizer: Box<dyn TextRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Set the OCR language code (defaults to "eng")
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set a timeout for each classification and OCR call
    ///
    /// # Example
    /// ```
    /// use additive_check::ComplianceChecker;
    /// use std::time::Duration;
    ///
    /// let builder = ComplianceChecker::builder()
    ///     .text("E122")
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the check
    ///
    /// # Errors
    /// Returns `CheckError` if:
    /// - No input source was specified
    /// - Text input is empty
    /// - Image input was given without a recognizer
    /// - Recognition or classification fails
    ///
    /// # Example
    /// ```no_run
    /// # use additive_check::ComplianceChecker;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let results = ComplianceChecker::builder()
    ///     .text("Yellow 5, Salt")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<IngredientResult>, CheckError> {
        let source = self.source.ok_or_else(|| {
            CheckError::BuilderError(
                "No input source specified. Use .text() or .image()".to_string(),
            )
        })?;

        let classifier = self
            .classifier
            .unwrap_or_else(|| Box::new(MockClassifier::default()));
        let mut session = AnalysisSession::new(classifier).with_timeout(self.timeout);
        if let Some(language) = self.language {
            session = session.with_language(language);
        }

        match source {
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(CheckError::BuilderError(
                        "Ingredient text cannot be empty".to_string(),
                    ));
                }
                session.set_input(text);
                session.submit_text().await?;
            }
            InputSource::Image(image) => {
                let recognizer = self.recognizer.ok_or_else(|| {
                    CheckError::BuilderError(
                        "Image input requires a text recognizer. Use .recognizer()".to_string(),
                    )
                })?;
                session = session.with_recognizer(recognizer);
                session.submit_image(&image).await?;
            }
        }

        Ok(session.results().to_vec())
    }
}

/// Main entry point for the builder API
pub struct ComplianceChecker;

impl ComplianceChecker {
    /// Creates a new builder for checking ingredients
    ///
    /// # Example
    /// ```
    /// use additive_check::ComplianceChecker;
    ///
    /// let builder = ComplianceChecker::builder();
    /// ```
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::default()
    }
}
