//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::models::{AnalysisRequest, ResumeAnalysis, ScoreBand};
use crate::analysis::report::render_report;
use crate::analysis::validation::validate_analysis;
use crate::errors::AppError;
use crate::ingest::extract_text;
use crate::state::AppState;

const REPORT_FILENAME: &str = "resume_analysis_report.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    /// Character count of the extracted resume text, surfaced so clients can
    /// show what the extractor actually recovered.
    pub resume_chars: usize,
    pub score_band: ScoreBand,
    pub analysis: ResumeAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Multipart upload: a `resume` PDF part and a `job_description` text part.
/// The provider credential comes from the `x-api-key` header, falling back to
/// the configured key. Pipeline: extract text, reject empty documents, build
/// the request, run one analysis round trip.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let credentials = request_credentials(&headers, &state)?;

    let mut resume_bytes: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read resume part: {e}")))?;
                resume_bytes = Some(bytes.to_vec());
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read job_description part: {e}"))
                })?;
                job_description = Some(text);
            }
            // Unknown parts are ignored so UI shells can attach extras.
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("missing 'resume' file part".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("missing 'job_description' part".to_string()))?;

    let resume_text = extract_text(&resume_bytes)?;
    if resume_text.is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let analysis_id = Uuid::new_v4();
    let resume_chars = resume_text.len();
    tracing::info!(%analysis_id, resume_chars, "resume text extracted");

    let request = AnalysisRequest::new(resume_text, job_description)?;
    let analysis = state.analyzer.analyze(&request, &credentials).await?;

    tracing::info!(
        %analysis_id,
        match_percentage = analysis.match_percentage,
        missing_keywords = analysis.missing_keywords.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        resume_chars,
        score_band: ScoreBand::for_score(analysis.match_percentage),
        analysis,
    }))
}

/// POST /api/v1/analysis/report
///
/// Serializes an analysis into the downloadable plain-text report. The body
/// is re-validated because it crosses the trust boundary from the client.
pub async fn handle_report(
    Json(payload): Json<ResumeAnalysis>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = validate_analysis(payload).map_err(|e| match e {
        AppError::Analysis(msg) => AppError::Validation(msg),
        other => other,
    })?;

    let report = render_report(&analysis);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        report,
    ))
}

/// Resolves the provider credential for one request: the `x-api-key` header
/// wins, the configured fallback key is second, and with neither the request
/// is unauthorized. The credential is never logged.
fn request_credentials(headers: &HeaderMap, state: &AppState) -> Result<String, AppError> {
    if let Some(key) = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .filter(|k| !k.is_empty())
    {
        return Ok(key.to_string());
    }
    state
        .config
        .gemini_api_key
        .clone()
        .ok_or(AppError::Unauthorized)
}
