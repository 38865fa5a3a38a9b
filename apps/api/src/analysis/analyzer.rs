//! Analysis Requester — one prompt, one schema-constrained completion, one
//! validated result or a typed failure. No partial outcome is observable.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::models::{AnalysisRequest, ResumeAnalysis};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::validation::validate_analysis;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_FRAGMENT;
use crate::llm_client::LlmClient;

/// The analysis backend trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn Analyzer>`. Tests substitute
/// deterministic stubs through the same seam.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Runs one analysis round trip. `credentials` is the caller-supplied
    /// provider API key; it is forwarded per call and never stored or logged.
    async fn analyze(
        &self,
        request: &AnalysisRequest,
        credentials: &str,
    ) -> Result<ResumeAnalysis, AppError>;
}

/// Production analyzer backed by the Gemini client.
pub struct LlmAnalyzer {
    llm: LlmClient,
    /// Budget for the whole model round trip. Expiry is a `Cancelled`
    /// outcome, distinct from an analysis failure.
    timeout: Duration,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient, timeout: Duration) -> Self {
        Self { llm, timeout }
    }
}

#[async_trait]
impl Analyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
        credentials: &str,
    ) -> Result<ResumeAnalysis, AppError> {
        let prompt = build_analysis_prompt(request.job_description(), request.resume_text());
        let system = format!("{ANALYSIS_SYSTEM}\n\n{JSON_ONLY_FRAGMENT}");
        let schema = ResumeAnalysis::response_schema();

        debug!(
            resume_chars = request.resume_text().len(),
            jd_chars = request.job_description().len(),
            "dispatching analysis request"
        );

        let call = self
            .llm
            .call_json::<ResumeAnalysis>(credentials, &prompt, &system, &schema);

        let raw = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| AppError::Cancelled(self.timeout.as_secs()))?
            .map_err(|e| AppError::Analysis(format!("resume analysis failed: {e}")))?;

        validate_analysis(raw)
    }
}
