use crate::classifiers::{Classifier, MockClassifier, RemoteClassifier};
use crate::config::ClassifierConfig;
use crate::error::CheckError;
use log::info;

pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Create a classifier instance from configuration
    pub fn create(config: &ClassifierConfig) -> Result<Box<dyn Classifier>, CheckError> {
        let classifier: Box<dyn Classifier> = match config.kind.as_str() {
            "mock" => Box::new(MockClassifier::new(config)),
            "remote" => Box::new(RemoteClassifier::new(config)?),
            other => {
                return Err(CheckError::BuilderError(format!(
                    "Unknown classifier: {}",
                    other
                )))
            }
        };

        info!("Using '{}' classifier", classifier.classifier_name());
        Ok(classifier)
    }

    /// List all available classifier kinds
    pub fn available_classifiers() -> Vec<&'static str> {
        vec!["mock", "remote"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mock_classifier() {
        let config = ClassifierConfig::default();
        let classifier = ClassifierFactory::create(&config).unwrap();
        assert_eq!(classifier.classifier_name(), "mock");
    }

    #[test]
    fn test_create_remote_classifier() {
        let config = ClassifierConfig {
            kind: "remote".to_string(),
            base_url: Some("http://localhost:8080".to_string()),
            ..Default::default()
        };
        let classifier = ClassifierFactory::create(&config).unwrap();
        assert_eq!(classifier.classifier_name(), "remote");
    }

    #[test]
    fn test_create_unknown_classifier() {
        let config = ClassifierConfig {
            kind: "llm".to_string(),
            ..Default::default()
        };
        let result = ClassifierFactory::create(&config);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown classifier"));
        }
    }

    #[test]
    fn test_available_classifiers() {
        let kinds = ClassifierFactory::available_classifiers();
        assert!(kinds.contains(&"mock"));
        assert!(kinds.contains(&"remote"));
    }
}
