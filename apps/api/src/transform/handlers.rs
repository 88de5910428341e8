//! Axum route handler for the Transform API.

use std::time::Duration;

use anyhow::anyhow;
use axum::{body::Bytes, extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;
use crate::transform::generator::ensure_five;
use crate::transform::models::{TransformRequest, TransformResponse};
use crate::transform::prompts::{build_user_prompt, resolve_brand_voice, TRANSFORM_SYSTEM};

/// Wall-clock ceiling for the provider call. Expiry is reported like any other
/// provider failure.
pub const TRANSFORM_DEADLINE: Duration = Duration::from_secs(30);

pub const MISSING_TEXT_MESSAGE: &str = "Missing text input";

/// POST /api/transform
///
/// Validates the text, asks the generator for five variations under the
/// deadline and returns them in provider order. One attempt, all-or-nothing.
///
/// The body is decoded as JSON whatever its `Content-Type`.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_transform(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransformResponse>, AppError> {
    let request: TransformRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(anyhow!("Unreadable transform body: {e}")))?;

    let text = request
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_TEXT_MESSAGE.to_string()))?;
    let brand_voice = resolve_brand_voice(request.brand_voice.as_deref());

    info!("Generating variations (voice: {brand_voice}, {} chars)", text.len());
    let prompt = build_user_prompt(text, brand_voice);

    let variations = tokio::time::timeout(
        TRANSFORM_DEADLINE,
        state.generator.generate(TRANSFORM_SYSTEM, &prompt),
    )
    .await
    .map_err(|_| LlmError::Timeout(TRANSFORM_DEADLINE))??;

    let variations = ensure_five(variations)?;
    info!("Generated {} variations", variations.len());

    Ok(Json(TransformResponse { variations }))
}
