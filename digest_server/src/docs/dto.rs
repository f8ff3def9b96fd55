use digest_core::{
    helpers::dto::{HealthResponse, SummarizeRequest, SummarizeResponse, SummaryMetadata},
    prompt::dto::PromptVariant,
};
use utoipa::OpenApi;

use crate::{error::ErrorServer, health, summarize};

#[derive(OpenApi)]
#[openapi(
    paths(summarize::handler::summarize, health::handler::health),
    components(
        schemas(
            SummarizeRequest,
            SummarizeResponse,
            SummaryMetadata,
            PromptVariant,
            HealthResponse,
            ErrorServer
        ),
        responses(ErrorServer)
    )
)]
pub struct ApiDoc;
