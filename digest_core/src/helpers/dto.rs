use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::prompt::dto::PromptVariant;

/// `comments` stays untyped so a missing or malformed field can be answered
/// with a 400 instead of a deserialization rejection.
#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct SummarizeRequest {
    #[schema(value_type = Vec<String>)]
    pub comments: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub comments_processed: usize,
    pub original_count: usize,
    pub analysis_type: PromptVariant,
    pub timestamp: String,
    pub request_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct SummarizeResponse {
    pub summary: String,
    pub metadata: SummaryMetadata,
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: String,
}
