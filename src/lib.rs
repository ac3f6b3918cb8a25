//! Check food ingredient lists against EU additive rules.
//!
//! Text (typed or read from a label photo) is split into ingredient tokens
//! and each token is classified as compliant, non-compliant or unknown.

pub mod builder;
pub mod classifiers;
pub mod config;
pub mod error;
pub mod images_to_text;
pub mod model;
pub mod normalize;
pub mod render;
pub mod session;

pub use builder::{CheckerBuilder, ComplianceChecker, InputSource};
pub use classifiers::{Classifier, ClassifierFactory, MockClassifier, RemoteClassifier};
pub use config::CheckerConfig;
pub use error::CheckError;
pub use images_to_text::{GoogleVisionRecognizer, ImageSource, RecognizedText, TextRecognizer};
pub use model::{ComplianceStatus, IngredientResult};
pub use normalize::{split_recognized_text, split_submitted_text};
pub use session::{AnalysisSession, SessionState};

/// Classify comma- or newline-separated ingredient text with the mock classifier.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let results = additive_check::check_text("Water, Yellow 5").await?;
/// assert_eq!(results.len(), 2);
/// # Ok(())
/// # }
/// ```
pub async fn check_text(text: &str) -> Result<Vec<IngredientResult>, CheckError> {
    ComplianceChecker::builder().text(text).build().await
}

/// Classify ingredient text using the classifier named in configuration.
pub async fn check_text_with_config(
    text: &str,
    config: &CheckerConfig,
) -> Result<Vec<IngredientResult>, CheckError> {
    let classifier = ClassifierFactory::create(&config.classifier)?;
    let mut builder = ComplianceChecker::builder().text(text).classifier(classifier);
    if let Some(timeout) = config.call_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().await
}
