use std::sync::Arc;

use axum::extract::{Json, State, rejection::JsonRejection};
use digest_core::{
    ai::handler::ModelError,
    comments::{
        dto::NormalizeOptions,
        handler::{MAX_ACCEPTED_COMMENTS, MIN_CLEANED_COMMENTS, normalize_comments},
    },
    formatter::handler::format_summary,
    helpers::{
        dto::{SummarizeRequest, SummarizeResponse, SummaryMetadata},
        utils::{iso_timestamp, new_request_id},
    },
    prompt::{dto::PromptVariant, handler::build_prompt},
};
use serde_json::Value;

use crate::{error::ErrorServer, state::ServerState};

/// Checks the raw `comments` field before any normalization runs.
pub fn validate_comments(comments: Option<&Value>) -> Result<&Vec<Value>, ErrorServer> {
    let comments = match comments {
        None | Some(Value::Null) => {
            return Err(ErrorServer::bad_request("Missing required field: comments"));
        }
        Some(value) => value
            .as_array()
            .ok_or(ErrorServer::bad_request("comments must be an array of strings"))?,
    };

    if comments.is_empty() {
        return Err(ErrorServer::bad_request("comments must not be empty"));
    }

    if comments.len() > MAX_ACCEPTED_COMMENTS {
        return Err(ErrorServer::bad_request(format!(
            "Too many comments: {} received, maximum is {}",
            comments.len(),
            MAX_ACCEPTED_COMMENTS
        )));
    }

    Ok(comments)
}

fn model_error_response(err: ModelError, request_id: &str) -> ErrorServer {
    match err {
        ModelError::InvalidResponse(reason) => {
            log::error!("[{}] Invalid model response: {}", request_id, reason);
            ErrorServer::bad_gateway("Invalid response from AI service")
        }
        other => {
            log::error!("[{}] Model call failed: {}", request_id, other);
            ErrorServer::internal("Failed to generate summary")
        }
    }
}

#[utoipa::path(
    post,
    path = "/summarize",
    description = "Summarize a batch of comments",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Success", body = SummarizeResponse),
        (status = 400, description = "Bad Request", body = ErrorServer),
        (status = 500, description = "Internal Server Error", body = ErrorServer),
        (status = 502, description = "Bad Gateway", body = ErrorServer),
    )
)]
pub async fn summarize(
    State(server_state): State<Arc<ServerState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ErrorServer> {
    let request_id = new_request_id();

    let Json(request) = payload.map_err(|e| {
        log::warn!("[{}] Rejected body: {}", request_id, e.body_text());
        ErrorServer::bad_request("Request body must be a JSON object")
    })?;

    let comments = validate_comments(request.comments.as_ref()).inspect_err(|e| {
        log::warn!("[{}] Rejected request: {}", request_id, e);
    })?;

    let original_count = comments.len();

    let normalized = normalize_comments(
        comments.iter().filter_map(Value::as_str),
        &NormalizeOptions::default(),
    );

    if normalized.len() < MIN_CLEANED_COMMENTS {
        log::warn!(
            "[{}] Only {} of {} comments survived normalization",
            request_id,
            normalized.len(),
            original_count
        );
        return Err(ErrorServer::bad_request(format!(
            "Not enough valid comments to analyze: {} usable, at least {} required",
            normalized.len(),
            MIN_CLEANED_COMMENTS
        )));
    }

    let variant = PromptVariant::for_count(normalized.len());
    let prompt = build_prompt(normalized.as_slice(), variant);

    log::info!(
        "[{}] Summarizing {} of {} comments with the {} prompt",
        request_id,
        normalized.len(),
        original_count,
        variant
    );

    let raw_summary = server_state
        .model()
        .generate(&prompt, &request_id)
        .await
        .map_err(|e| model_error_response(e, &request_id))?;

    let summary = format_summary(&raw_summary);

    Ok(Json(SummarizeResponse {
        summary,
        metadata: SummaryMetadata {
            comments_processed: normalized.len(),
            original_count,
            analysis_type: variant,
            timestamp: iso_timestamp(),
            request_id,
        },
    }))
}
