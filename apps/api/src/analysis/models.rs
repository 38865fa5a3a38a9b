//! Data contracts for the analysis round trip.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;

/// Hard cap on `missing_keywords`, mirrored in the prompt and the response
/// schema. A model that over-returns is truncated, not failed.
pub const MAX_MISSING_KEYWORDS: usize = 20;

/// One analysis submission: résumé text plus job description text.
///
/// Immutable value constructed per user action and discarded after a single
/// request/response round trip. Both fields are guaranteed non-empty after
/// trim; construction is the only place that guarantee is established, so
/// nothing downstream re-checks it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    resume_text: String,
    job_description: String,
}

impl AnalysisRequest {
    pub fn new(resume_text: String, job_description: String) -> Result<Self, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation("resume text cannot be empty".to_string()));
        }
        if job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job description cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            resume_text,
            job_description,
        })
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }
}

/// Structured output contract for a resume analysis.
///
/// A value of this type that reached a consumer has passed
/// `validation::validate_analysis`: the score is in range, the narratives are
/// non-empty, and the keyword list is within the cap. There is no partially
/// valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Match between resume and job description, 0-100.
    pub match_percentage: u32,
    /// Important keywords missing from the resume, most relevant first.
    pub missing_keywords: Vec<String>,
    /// Why the candidate is a good fit.
    pub strengths: String,
    /// Specific, actionable suggestions to improve the resume.
    pub improvements: String,
    /// Brief overall assessment of the candidate's fit.
    pub overall_assessment: String,
}

impl ResumeAnalysis {
    /// OpenAPI-style schema sent to the provider as the `responseSchema`
    /// constraint. Field names must match the serde field names above.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "match_percentage": {
                    "type": "INTEGER",
                    "description": "Percentage match between resume and job description (0-100)"
                },
                "missing_keywords": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Important keywords missing from the resume (max 20)"
                },
                "strengths": {
                    "type": "STRING",
                    "description": "Detailed analysis of why the candidate is a good fit"
                },
                "improvements": {
                    "type": "STRING",
                    "description": "Specific, actionable suggestions to improve the resume"
                },
                "overall_assessment": {
                    "type": "STRING",
                    "description": "Brief overall assessment of the candidate's fit"
                }
            },
            "required": [
                "match_percentage",
                "missing_keywords",
                "strengths",
                "improvements",
                "overall_assessment"
            ]
        })
    }
}

/// Interpretation band for a match score, used by the API response so clients
/// do not re-derive thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above: strong candidate for the position.
    Excellent,
    /// 60-79: competitive with some improvements.
    Good,
    /// Below 60: significant gaps against the role.
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(match_percentage: u32) -> Self {
        if match_percentage >= 80 {
            ScoreBand::Excellent
        } else if match_percentage >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }
}
