// Prompt constants for job-description summarization.

/// System prompt for the JD summary call — plain text out, no decoration.
pub const SUMMARIZE_SYSTEM: &str = "You are a concise job-description analyst. \
    Respond with the summary text only. \
    Do NOT include preamble, headings, or markdown fences.";

/// JD summary prompt template. Replace `{jd_text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = r#"Summarize the following job description. Focus on key skills, qualifications, and responsibilities. Keep it concise and under 300 words.

Job Description:
{jd_text}

Summary:"#;
