use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Batches at or above this size get the detailed template.
pub const DETAILED_PROMPT_THRESHOLD: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromptVariant {
    Simple,
    Detailed,
}

impl PromptVariant {
    pub fn for_count(count: usize) -> Self {
        if count >= DETAILED_PROMPT_THRESHOLD {
            PromptVariant::Detailed
        } else {
            PromptVariant::Simple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVariant::Simple => "simple",
            PromptVariant::Detailed => "detailed",
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_count_threshold() {
        assert_eq!(PromptVariant::for_count(3), PromptVariant::Simple);
        assert_eq!(PromptVariant::for_count(19), PromptVariant::Simple);
        assert_eq!(PromptVariant::for_count(20), PromptVariant::Detailed);
        assert_eq!(PromptVariant::for_count(100), PromptVariant::Detailed);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PromptVariant::Detailed).unwrap(),
            "\"detailed\""
        );
        assert_eq!(PromptVariant::Simple.to_string(), "simple");
    }
}
