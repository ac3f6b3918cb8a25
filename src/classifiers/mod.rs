mod factory;
mod mock;
mod remote;
mod rules;

pub use factory::ClassifierFactory;
pub use mock::MockClassifier;
pub use remote::RemoteClassifier;
pub use rules::{ResultTemplate, Rule, DEFAULT_RULES};

use crate::error::CheckError;
use crate::model::IngredientResult;
use async_trait::async_trait;

/// Unified trait for anything that can judge ingredient compliance
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Get the classifier name (e.g., "mock", "remote")
    fn classifier_name(&self) -> &str;

    /// Classify tokens, returning one result per token in the same order
    async fn classify(&self, tokens: &[String]) -> Result<Vec<IngredientResult>, CheckError>;
}
