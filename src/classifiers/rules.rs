use crate::model::{ComplianceStatus, IngredientResult};

/// Fixed part of a result produced when a rule matches
#[derive(Debug, Clone, Copy)]
pub struct ResultTemplate {
    pub normalized: &'static str,
    pub status: ComplianceStatus,
    pub max_level: &'static str,
    pub regulation: &'static str,
    pub explanation: &'static str,
}

/// A lookup entry: any pattern found in a token selects the template
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lowercase substrings
    pub patterns: &'static [&'static str],
    pub template: ResultTemplate,
}

/// Rules known to the mock classifier, checked in order
pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        patterns: &["e102", "yellow 5"],
        template: ResultTemplate {
            normalized: "E102 (Tartrazine)",
            status: ComplianceStatus::Compliant,
            max_level: "20 mg/l",
            regulation: "Commission Regulation (EU) No 1129/2011",
            explanation: "This additive is compliant as per the provided concentration.",
        },
    },
    Rule {
        patterns: &["e122", "azorubine"],
        template: ResultTemplate {
            normalized: "E122 (Azorubine)",
            status: ComplianceStatus::NonCompliant,
            max_level: "50 mg/l",
            regulation: "Regulation (EC) No 1333/2008",
            explanation: "The requested concentration exceeds the maximum permitted level.",
        },
    },
];

impl Rule {
    /// Case-insensitive substring match
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.patterns.iter().any(|pattern| token.contains(pattern))
    }

    pub fn apply(&self, token: &str) -> IngredientResult {
        let template = &self.template;
        IngredientResult {
            ingredient: token.to_string(),
            normalized: template.normalized.to_string(),
            status: template.status,
            max_level: template.max_level.to_string(),
            regulation: template.regulation.to_string(),
            explanation: template.explanation.to_string(),
        }
    }
}

/// Classify one token against a rule table
pub fn classify_token(rules: &[Rule], token: &str) -> IngredientResult {
    rules
        .iter()
        .find(|rule| rule.matches(token))
        .map(|rule| rule.apply(token))
        .unwrap_or_else(|| IngredientResult::unknown(token))
}
