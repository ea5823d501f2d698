use crate::config::ProfileConfig;
use crate::dtos::GenerateParams;
use crate::error::AppError;
use crate::services::document::{self, DOCX_CONTENT_TYPE};
use crate::services::providers::GenerationParams as CompletionParams;
use crate::startup::AppState;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

/// Generate a company-profile document for a bid and stream it back as a
/// DOCX attachment.
pub async fn generate_document(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Response, AppError> {
    let bid = params
        .bid
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!(
                "Please provide bid number as ?bid=GEM/2025/B/XXXX"
            ))
        })?
        .to_string();

    let prompt = build_prompt(&state.config.profile, &bid);

    let completion_params = CompletionParams {
        max_tokens: Some(state.config.completion.max_tokens),
        ..Default::default()
    };

    let started = std::time::Instant::now();
    let completion = state
        .text_provider
        .generate(&prompt, &completion_params)
        .await
        .map_err(|e| {
            metrics::counter!("docgen_generation_failures_total").increment(1);
            tracing::error!(bid = %bid, error = %e, "Completion request failed");
            AppError::GenerationError(anyhow::Error::new(e))
        })?;
    metrics::histogram!("docgen_generation_duration_seconds")
        .record(started.elapsed().as_secs_f64());

    tracing::info!(
        bid = %bid,
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "Company profile text generated"
    );

    let buffer = document::render_company_profile(&completion.text)?;
    let filename = document::profile_filename(&bid);

    let file = state.spool.spool(&filename, &buffer).await?;

    metrics::counter!("docgen_documents_generated_total").increment(1);
    tracing::info!(
        bid = %bid,
        filename = %filename,
        size = buffer.len(),
        "Document download started"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}

fn build_prompt(profile: &ProfileConfig, bid: &str) -> String {
    format!(
        "Generate a professional company profile for \"{}\" providing \"{}\" services, for GeM bid number {}.",
        profile.company_name, profile.service_description, bid
    )
}
