// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume analysis. The JSON-only fragment is appended at
/// call time by the analyzer.
pub const ANALYSIS_SYSTEM: &str = "\
You are an expert Application Tracking System (ATS) with deep knowledge of:
- Software Engineering
- Data Science & Machine Learning
- Data Analysis & Business Intelligence
- Full Stack Development
- Cloud Computing & DevOps
- Big Data Engineering

Your task is to provide thorough, accurate, and actionable resume analysis.";

/// Analysis prompt template. Replace `{job_description}` and `{resume_text}`
/// before sending. The five requested outputs map one-to-one onto the fields
/// of `ResumeAnalysis`.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume against the job description.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

Provide a comprehensive analysis with:

1. match_percentage (0-100): How well does this resume match the job requirements?
   - Consider skills, experience, education, and achievements
   - Be realistic and fair in your assessment

2. missing_keywords: Identify up to 20 critical keywords/skills from the job description that are missing or underrepresented in the resume, most relevant first. Focus on:
   - Technical skills
   - Tools and technologies
   - Relevant certifications
   - Industry-specific terminology

3. strengths: Explain in detail why this candidate IS a good fit:
   - Matching skills and experience
   - Relevant projects or achievements
   - Educational background
   - Transferable skills

4. improvements: Provide specific, actionable recommendations:
   - How to better highlight existing relevant experience
   - Skills or certifications to acquire
   - Resume formatting or presentation improvements
   - Keywords to add for better ATS optimization
   - Ways to quantify achievements

5. overall_assessment: Provide a brief 2-3 sentence summary of the candidate's overall fit.

Remember: The job market is highly competitive. Provide honest, constructive feedback that will genuinely help improve the candidate's chances."#;

/// Fills the analysis template with the request's two text inputs.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_interpolates_both_inputs() {
        let prompt = build_analysis_prompt("Rust engineer wanted", "Seven years of Rust");
        assert!(prompt.contains("Rust engineer wanted"));
        assert!(prompt.contains("Seven years of Rust"));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn prompt_requests_all_five_outputs() {
        for field in [
            "match_percentage",
            "missing_keywords",
            "strengths",
            "improvements",
            "overall_assessment",
        ] {
            assert!(
                ANALYSIS_PROMPT_TEMPLATE.contains(field),
                "template must request {field}"
            );
        }
    }
}
