// Prompt constants for cover-letter drafting.

/// System prompt for the letter call.
pub const LETTER_SYSTEM: &str = "You are an expert cover-letter writer. \
    Respond with the letter text only — no preamble and no markdown fences.";

/// Letter prompt template. Replace `{jd_text}` and `{resume_text}` before
/// sending.
pub const LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter based on the following resume and job description:
- Address to "Dear Hiring Manager".
- Strong opening paragraph explaining interest in the role.
- Highlight relevant skills and experiences.
- End with enthusiasm and a call to action.

**Job Description**:
{jd_text}

**Candidate's Resume**:
{resume_text}

**Cover Letter**:"#;

/// Scripted letter returned when no generative capability is reachable.
/// Replace `{jd_text}` before returning.
pub const SCRIPTED_LETTER_TEMPLATE: &str = r#"Dear Hiring Manager,

I am excited to apply for the position described in your job posting. Based on my resume, I possess skills that align closely with your requirements: {jd_text}.

I bring expertise in various areas mentioned in the job description, and my resume highlights how my experiences complement your organization's needs.

Looking forward to discussing my qualifications further!

Sincerely,
[Your Name]"#;
