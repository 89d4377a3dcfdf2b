// Prompt constants for resume enhancement.

/// System prompt for the rewrite call — truthful rewriting only.
pub const ENHANCE_SYSTEM: &str = "You are an expert resume writer. \
    Rewrite resumes truthfully: never invent employers, titles, dates, or \
    achievements that are not present in the candidate's resume. \
    Respond with the rewritten resume text only.";

/// Rewrite prompt template. Replace `{jd_summary}` and `{resume_text}`
/// before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume to align it with the provided job description. Ensure:
- A strong Summary Section highlighting technical expertise and achievements.
- Relevant skills aligned with job description requirements.
- Action-oriented bullet points in the Experience Section.

**Job Description Summary**:
{jd_summary}

**Candidate's Resume**:
{resume_text}

**Enhanced Resume**:"#;
