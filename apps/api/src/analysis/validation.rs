//! Post-deserialization schema checks for model output.
//!
//! The provider is asked for schema-constrained output, but the response is
//! still validated locally before any consumer sees it: a response that
//! violates the contract is an analysis failure, never silently coerced.
//! The single exception is the keyword cap, where an over-long list is
//! truncated rather than failed (the cap is relevance-ordered, so dropping
//! the tail keeps the most useful entries).

use tracing::warn;

use crate::analysis::models::{ResumeAnalysis, MAX_MISSING_KEYWORDS};
use crate::errors::AppError;

/// Checks a freshly deserialized analysis against the output contract.
/// Returns the (possibly keyword-truncated) analysis, or an `Analysis` error
/// naming the violated invariant.
pub fn validate_analysis(mut analysis: ResumeAnalysis) -> Result<ResumeAnalysis, AppError> {
    if analysis.match_percentage > 100 {
        return Err(AppError::Analysis(format!(
            "model returned match_percentage {} outside 0-100",
            analysis.match_percentage
        )));
    }

    for (field, value) in [
        ("strengths", &analysis.strengths),
        ("improvements", &analysis.improvements),
        ("overall_assessment", &analysis.overall_assessment),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Analysis(format!("model returned empty {field}")));
        }
    }

    if analysis.missing_keywords.len() > MAX_MISSING_KEYWORDS {
        warn!(
            "model returned {} missing keywords, truncating to {}",
            analysis.missing_keywords.len(),
            MAX_MISSING_KEYWORDS
        );
        analysis.missing_keywords.truncate(MAX_MISSING_KEYWORDS);
    }

    Ok(analysis)
}
