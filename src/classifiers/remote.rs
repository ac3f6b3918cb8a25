use crate::classifiers::Classifier;
use crate::config::ClassifierConfig;
use crate::error::CheckError;
use crate::model::{ComplianceStatus, IngredientResult, NOT_APPLICABLE};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Classifier that delegates to an analysis service over HTTP
pub struct RemoteClassifier {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    results: Vec<RemoteResult>,
}

#[derive(Debug, Deserialize)]
struct RemoteResult {
    ingredient: Option<String>,
    status: Option<String>,
    normalized_ingredient: Option<String>,
    max_level: Option<String>,
    reason: Option<String>,
    regulation_reference: Option<String>,
    summary: Option<String>,
    details: Option<String>,
    error: Option<String>,
}

impl RemoteClassifier {
    /// Create a remote classifier from configuration
    pub fn new(config: &ClassifierConfig) -> Result<Self, CheckError> {
        let base_url = config.base_url.clone().ok_or_else(|| {
            CheckError::BuilderError("Remote classifier requires classifier.base_url".to_string())
        })?;

        let classifier = Self::with_base_url(base_url);
        Ok(match &config.api_key {
            Some(key) => classifier.with_api_key(key.clone()),
            None => classifier,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RemoteClassifier {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    /// Send the key as a bearer token with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

fn map_status(status: &str) -> ComplianceStatus {
    match status {
        "Compliant" => ComplianceStatus::Compliant,
        "Non-compliant" | "Forbidden" | "Conditionally allowed" => ComplianceStatus::NonCompliant,
        _ => ComplianceStatus::Unknown,
    }
}

fn or_not_applicable(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

impl RemoteResult {
    fn into_result(self, token: &str) -> IngredientResult {
        if let Some(error) = self.error {
            warn!("Analysis service could not evaluate '{}': {}", token, error);
            return IngredientResult {
                explanation: error,
                ..IngredientResult::unknown(token)
            };
        }

        let status = self
            .status
            .as_deref()
            .map(map_status)
            .unwrap_or(ComplianceStatus::Unknown);

        // Prefer the generated summary, then the raw reason
        let explanation = match (self.summary, self.details, self.reason) {
            (Some(summary), Some(details), _) if !details.is_empty() => {
                format!("{} {}", summary, details)
            }
            (Some(summary), _, _) => summary,
            (None, _, Some(reason)) => reason,
            (None, _, None) => IngredientResult::unknown(token).explanation,
        };

        IngredientResult {
            ingredient: token.to_string(),
            normalized: self
                .normalized_ingredient
                .or(self.ingredient)
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| token.to_string()),
            status,
            max_level: or_not_applicable(self.max_level),
            regulation: or_not_applicable(self.regulation_reference),
            explanation,
        }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    fn classifier_name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, tokens: &[String]) -> Result<Vec<IngredientResult>, CheckError> {
        let url = format!("{}/analyze", self.base_url);
        debug!("Sending {} ingredients to {}", tokens.len(), url);

        let mut request = self
            .client
            .post(&url)
            .json(&json!({ "text_block": tokens.join(", ") }));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CheckError::Network(e.to_string()))?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CheckError::Network(format!(
                "Analysis service error ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CheckError::Network(e.to_string()))?;
        let parsed: AnalyzeResponse = serde_json::from_str(&body)
            .map_err(|e| CheckError::Validation(format!("Unexpected response body: {}", e)))?;

        if parsed.results.len() != tokens.len() {
            return Err(CheckError::Validation(format!(
                "Expected {} results, got {}",
                tokens.len(),
                parsed.results.len()
            )));
        }

        Ok(parsed
            .results
            .into_iter()
            .zip(tokens)
            .map(|(result, token)| result.into_result(token))
            .collect())
    }
}
