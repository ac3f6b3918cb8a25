use crate::classifiers::rules::{classify_token, Rule, DEFAULT_RULES};
use crate::classifiers::Classifier;
use crate::config::ClassifierConfig;
use crate::error::CheckError;
use crate::model::IngredientResult;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// In-process classifier backed by a fixed rule table.
///
/// Sleeps before answering to stand in for a network round trip. Never fails.
pub struct MockClassifier {
    rules: &'static [Rule],
    delay: Duration,
}

impl MockClassifier {
    /// Create a mock classifier from configuration
    pub fn new(config: &ClassifierConfig) -> Self {
        Self::with_delay(Duration::from_millis(config.delay_ms))
    }

    pub fn with_delay(delay: Duration) -> Self {
        MockClassifier {
            rules: DEFAULT_RULES,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    fn classifier_name(&self) -> &str {
        "mock"
    }

    async fn classify(&self, tokens: &[String]) -> Result<Vec<IngredientResult>, CheckError> {
        debug!("Analyzing ingredients: {:?}", tokens);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        Ok(tokens
            .iter()
            .map(|token| classify_token(self.rules, token))
            .collect())
    }
}
