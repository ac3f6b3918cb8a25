//! State behind the ingredient form.
//!
//! An [`AnalysisSession`] owns the input text, the last results, the loading
//! flag and the error banner. Submissions take `&mut self`, so only one can
//! be in flight at a time. Every state change is published on a watch
//! channel; a view holding a [`AnalysisSession::subscribe`] receiver sees
//! the loading flag while a submission is awaiting its result.

use std::future::Future;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::watch;

use crate::classifiers::{Classifier, ClassifierFactory};
use crate::config::CheckerConfig;
use crate::error::{
    CheckError, CLASSIFICATION_FAILURE_MESSAGE, IMAGE_PROCESSING_FAILURE_MESSAGE,
};
use crate::images_to_text::{
    GoogleVisionRecognizer, ImageSource, TextRecognizer, DEFAULT_LANGUAGE,
};
use crate::model::IngredientResult;
use crate::normalize::{split_recognized_text, split_submitted_text};

/// Everything the form displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Raw text in the ingredients field
    pub input: String,
    /// Results of the last successful submission, in input order
    pub results: Vec<IngredientResult>,
    pub is_loading: bool,
    /// Error banner, if the last submission failed
    pub error: Option<String>,
}

impl SessionState {
    fn begin_submission(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.results.clear();
    }
}

pub struct AnalysisSession {
    state: SessionState,
    classifier: Box<dyn Classifier>,
    recognizer: Option<Box<dyn TextRecognizer>>,
    language: String,
    timeout: Option<Duration>,
    updates: watch::Sender<SessionState>,
}

/// Await `call`, failing with a timeout error once `limit` passes
async fn within<T, F>(
    limit: Option<Duration>,
    operation: &'static str,
    call: F,
) -> Result<T, CheckError>
where
    F: Future<Output = Result<T, CheckError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| CheckError::Timeout {
                operation,
                elapsed: limit,
            })?,
        None => call.await,
    }
}

impl AnalysisSession {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        let (updates, _) = watch::channel(SessionState::default());
        AnalysisSession {
            state: SessionState::default(),
            classifier,
            recognizer: None,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
            updates,
        }
    }

    /// Build a session from configuration.
    ///
    /// Photo submissions are only available when a Vision API key is
    /// configured; without one the session still accepts text.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        let classifier = ClassifierFactory::create(&config.classifier)?;
        let mut session = Self::new(classifier)
            .with_language(config.ocr.language.clone())
            .with_timeout(config.call_timeout());

        match GoogleVisionRecognizer::new(&config.ocr) {
            Ok(recognizer) => session = session.with_recognizer(Box::new(recognizer)),
            Err(e) => warn!("Photo submissions disabled: {}", e),
        }

        Ok(session)
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn TextRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Receiver that is updated on every state change, including the start
    /// and end of each submission
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.updates.subscribe()
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn results(&self) -> &[IngredientResult] {
        &self.state.results
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
        self.publish();
    }

    /// Analyze the text currently in the input field.
    ///
    /// Does nothing when the field is empty. On failure the results stay
    /// empty, the error banner is set and the underlying error is returned.
    pub async fn submit_text(&mut self) -> Result<(), CheckError> {
        if self.state.input.is_empty() {
            debug!("Ignoring submission of empty input");
            return Ok(());
        }

        self.state.begin_submission();
        self.publish();
        let tokens = split_submitted_text(&self.state.input);
        let outcome = self.classify(&tokens).await;
        self.finish(outcome, CLASSIFICATION_FAILURE_MESSAGE)
    }

    /// Recognize the text on a label photo, put it in the input field and
    /// analyze it.
    pub async fn submit_image(&mut self, image: &ImageSource) -> Result<(), CheckError> {
        self.state.begin_submission();
        self.publish();
        info!("Processing image {}", image.describe());

        let recognized = self.recognize(image).await;
        let outcome = match recognized {
            Ok(text) => {
                let tokens = split_recognized_text(&text);
                self.state.input = text;
                self.publish();
                self.classify(&tokens).await
            }
            Err(e) => Err(e),
        };

        self.finish(outcome, IMAGE_PROCESSING_FAILURE_MESSAGE)
    }

    async fn recognize(&self, image: &ImageSource) -> Result<String, CheckError> {
        let recognizer = self.recognizer.as_ref().ok_or_else(|| {
            CheckError::ImageProcessingFailure("No text recognizer configured".to_string())
        })?;

        let recognized = within(
            self.timeout,
            "text recognition",
            recognizer.recognize(image, &self.language),
        )
        .await?;
        Ok(recognized.text)
    }

    async fn classify(&self, tokens: &[String]) -> Result<Vec<IngredientResult>, CheckError> {
        if tokens.is_empty() {
            debug!("No ingredients after splitting, skipping classification");
            return Ok(Vec::new());
        }

        info!(
            "Classifying {} ingredients with {}",
            tokens.len(),
            self.classifier.classifier_name()
        );
        within(
            self.timeout,
            "classification",
            self.classifier.classify(tokens),
        )
        .await
    }

    fn finish(
        &mut self,
        outcome: Result<Vec<IngredientResult>, CheckError>,
        failure_message: &str,
    ) -> Result<(), CheckError> {
        self.state.is_loading = false;

        let result = match outcome {
            Ok(results) => {
                self.state.results = results;
                Ok(())
            }
            Err(e) => {
                error!("Submission failed: {}", e);
                self.state.results.clear();
                self.state.error = Some(failure_message.to_string());
                Err(e)
            }
        };

        self.publish();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::MockClassifier;

    #[tokio::test]
    async fn test_whitespace_only_input_skips_classifier() {
        let mut session = AnalysisSession::new(Box::new(MockClassifier::with_delay(
            Duration::from_secs(3600),
        )));
        session.set_input(" ,\n ");

        // Would hang for an hour if the classifier were called
        session.submit_text().await.unwrap();

        assert!(session.results().is_empty());
        assert!(session.error().is_none());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_image_without_recognizer() {
        let mut session = AnalysisSession::new(Box::new(MockClassifier::default()));
        let result = session.submit_image(&ImageSource::Bytes(vec![1, 2, 3])).await;

        assert!(result.is_err());
        assert_eq!(session.error(), Some(IMAGE_PROCESSING_FAILURE_MESSAGE));
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_submission() {
        let mut session = AnalysisSession::new(Box::new(MockClassifier::default()))
            .with_timeout(Some(Duration::from_millis(100)));
        session.set_input("Salt");

        let result = session.submit_text().await;

        assert!(matches!(result, Err(CheckError::Timeout { .. })));
        assert_eq!(session.error(), Some(CLASSIFICATION_FAILURE_MESSAGE));
        assert!(session.results().is_empty());
    }
}
