use additive_check::config::{CheckerConfig, ClassifierConfig};
use additive_check::{
    check_text, check_text_with_config, CheckError, ComplianceChecker, ComplianceStatus,
    ImageSource, MockClassifier, RecognizedText, TextRecognizer,
};
use async_trait::async_trait;
use std::time::Duration;

struct LabelReader(&'static str);

#[async_trait]
impl TextRecognizer for LabelReader {
    fn recognizer_name(&self) -> &str {
        "label"
    }

    async fn recognize(
        &self,
        _image: &ImageSource,
        _language: &str,
    ) -> Result<RecognizedText, CheckError> {
        Ok(RecognizedText {
            text: self.0.to_string(),
        })
    }
}

fn instant() -> Box<MockClassifier> {
    Box::new(MockClassifier::with_delay(Duration::ZERO))
}

#[tokio::test]
async fn test_builder_text() {
    let results = ComplianceChecker::builder()
        .text("A, B\nC")
        .classifier(instant())
        .build()
        .await
        .unwrap();

    let ingredients: Vec<&str> = results.iter().map(|r| r.ingredient.as_str()).collect();
    assert_eq!(ingredients, vec!["A", "B", "C"]);
    assert!(results
        .iter()
        .all(|r| r.status == ComplianceStatus::Unknown));
}

#[tokio::test]
async fn test_builder_image() {
    let results = ComplianceChecker::builder()
        .image_source(ImageSource::Bytes(vec![1, 2, 3]))
        .recognizer(Box::new(LabelReader("Sugar, Yellow 5")))
        .classifier(instant())
        .build()
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].normalized, "E102 (Tartrazine)");
}

#[tokio::test]
async fn test_builder_no_source() {
    let result = ComplianceChecker::builder().build().await;

    match result {
        Err(CheckError::BuilderError(message)) => {
            assert!(message.contains("No input source"))
        }
        other => panic!("Expected builder error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_builder_empty_text() {
    let result = ComplianceChecker::builder().text("   ").build().await;
    assert!(matches!(result, Err(CheckError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_image_needs_recognizer() {
    let result = ComplianceChecker::builder()
        .image("/tmp/label.jpg")
        .build()
        .await;

    match result {
        Err(CheckError::BuilderError(message)) => assert!(message.contains("recognizer")),
        other => panic!("Expected builder error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_check_text_uses_mock_defaults() {
    let results = check_text("azorubine E122").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, ComplianceStatus::NonCompliant);
    assert_eq!(results[0].max_level, "50 mg/l");
}

#[tokio::test(start_paused = true)]
async fn test_check_text_with_config_timeout() {
    let config = CheckerConfig {
        classifier: ClassifierConfig {
            delay_ms: 10_000,
            ..Default::default()
        },
        timeout: Some(1),
        ..Default::default()
    };

    let result = check_text_with_config("Salt", &config).await;
    assert!(matches!(result, Err(CheckError::Timeout { .. })));
}
