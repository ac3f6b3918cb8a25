use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for fields that do not apply to a result
pub const NOT_APPLICABLE: &str = "N/A";

/// Compliance verdict for a single ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    #[serde(rename = "Compliant")]
    Compliant,
    #[serde(rename = "Non-compliant")]
    NonCompliant,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-compliant",
            ComplianceStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one ingredient token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientResult {
    /// The token as the user entered it
    pub ingredient: String,
    /// Canonical display name
    pub normalized: String,
    pub status: ComplianceStatus,
    /// Maximum permitted level, or "N/A"
    pub max_level: String,
    /// Regulation citation, or "N/A"
    pub regulation: String,
    pub explanation: String,
}

impl IngredientResult {
    /// Result for a token nothing is known about
    pub fn unknown(ingredient: &str) -> Self {
        IngredientResult {
            ingredient: ingredient.to_string(),
            normalized: ingredient.to_string(),
            status: ComplianceStatus::Unknown,
            max_level: NOT_APPLICABLE.to_string(),
            regulation: NOT_APPLICABLE.to_string(),
            explanation: "Could not determine the compliance status for this ingredient."
                .to_string(),
        }
    }
}
