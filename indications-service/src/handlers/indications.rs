//! Indications drafting handler.
//!
//! The single business endpoint of the service: takes the original and final
//! versions of a legal text, relays the drafting prompt to the configured
//! provider, and returns the generated "Propuesta de Indicaciones".

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::prompt;
use crate::startup::AppState;

/// Request carrying the two versions of the legal text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIndicationsRequest {
    pub original_text: String,
    pub final_text: String,
}

/// Response carrying the drafted indications.
#[derive(Debug, Serialize)]
pub struct GenerateIndicationsResponse {
    pub text: String,
}

/// Draft a "Propuesta de Indicaciones" for the two submitted texts.
///
/// The body is parsed by hand rather than through the `Json` extractor: a
/// malformed payload must surface through the same 500 path as every other
/// runtime failure, carrying the parse error's message.
pub async fn generate_indications(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateIndicationsResponse>, AppError> {
    let payload: GenerateIndicationsRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    tracing::info!(
        original_len = payload.original_text.len(),
        final_len = payload.final_text.len(),
        "Drafting indications"
    );

    let prompt = prompt::build_prompt(&payload.original_text, &payload.final_text);

    let text = state.text_provider.generate(&prompt).await?;

    tracing::info!(reply_len = text.len(), "Indications drafted");

    Ok(Json(GenerateIndicationsResponse { text }))
}
