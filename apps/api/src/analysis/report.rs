//! Plain-text report serialization.

use crate::analysis::models::ResumeAnalysis;

/// Renders an analysis as a flat plain-text report with a fixed field order.
/// Pure function: equal inputs produce byte-identical output.
pub fn render_report(analysis: &ResumeAnalysis) -> String {
    let keywords = analysis
        .missing_keywords
        .iter()
        .map(|k| format!("- {k}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "RESUME ANALYSIS REPORT\n\
         ======================\n\
         \n\
         Match Score: {}%\n\
         \n\
         MISSING KEYWORDS:\n\
         {}\n\
         \n\
         STRENGTHS:\n\
         {}\n\
         \n\
         IMPROVEMENTS:\n\
         {}\n\
         \n\
         OVERALL ASSESSMENT:\n\
         {}\n",
        analysis.match_percentage,
        keywords,
        analysis.strengths,
        analysis.improvements,
        analysis.overall_assessment,
    )
}
