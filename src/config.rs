use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main checker configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CheckerConfig {
    /// Which classifier answers compliance questions
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Text recognition settings for photo submissions
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Per-call timeout in seconds for classification and OCR (none when unset)
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// Configuration for the ingredient classifier
#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Classifier kind: "mock" or "remote"
    #[serde(default = "default_classifier_kind")]
    pub kind: String,
    /// Simulated latency of the mock classifier in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Base URL of the analysis service (remote classifier only)
    pub base_url: Option<String>,
    /// Bearer token for the analysis service (remote classifier only)
    pub api_key: Option<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: default_classifier_kind(),
            delay_ms: default_delay_ms(),
            base_url: None,
            api_key: None,
        }
    }
}

/// Configuration for text recognition
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Recognition language code
    #[serde(default = "default_language")]
    pub language: String,
    /// API key for the Vision endpoint (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL override for the Vision endpoint
    pub base_url: Option<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions
fn default_classifier_kind() -> String {
    "mock".to_string()
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_language() -> String {
    "eng".to_string()
}

impl CheckerConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Timeout applied to each classification and OCR call
    pub fn call_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with ADDITIVE_CHECK__ prefix
/// 2. The given file, or additive-check.toml in the current directory
/// 3. Default values
///
/// Environment variable format: ADDITIVE_CHECK__CLASSIFIER__KIND
pub fn load_config(path: Option<&Path>) -> Result<CheckerConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("additive-check").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("ADDITIVE_CHECK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        assert_eq!(default_classifier_kind(), "mock");
        assert_eq!(default_delay_ms(), 1000);
        assert_eq!(default_language(), "eng");
    }

    #[test]
    fn test_checker_config_default() {
        let config = CheckerConfig::default();
        assert_eq!(config.classifier.kind, "mock");
        assert_eq!(config.classifier.delay_ms, 1000);
        assert_eq!(config.ocr.language, "eng");
        assert!(config.call_timeout().is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "additive-check-config-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "timeout = 5\n\n[classifier]\nkind = \"remote\"\nbase_url = \"http://localhost:8080\"\napi_key = \"secret\"\n\n[ocr]\nlanguage = \"deu\""
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.classifier.kind, "remote");
        assert_eq!(
            config.classifier.base_url.as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(config.classifier.api_key.as_deref(), Some("secret"));
        // Unset fields keep their defaults
        assert_eq!(config.classifier.delay_ms, 1000);
        assert_eq!(config.ocr.language, "deu");
        assert_eq!(config.call_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/additive-check.toml");
        assert!(load_config(Some(path)).is_err());
    }
}
