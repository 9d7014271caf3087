// Prompt constants for resume assessment.

/// Assessment prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending. Both are embedded verbatim.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Analyze this resume for a software engineering position. Focus on these key aspects:

1. Find the Skills/Technical Skills section and extract ONLY the skills listed there.
2. Calculate total years of experience from the work history.
3. Identify and categorize all projects mentioned.
4. Compare skills against job requirements.
5. Calculate match percentage.

Resume Text:
{resume_text}

Job Description:
{job_description}

Provide a JSON response with these exact fields:
{
    "rank": <number 0-100>,
    "skills": [<skills from skills section>],
    "total_experience": <number>,
    "project_category": [<project categories>],
    "missing_skills": [<required skills not in resume>],
    "score_breakdown": {
        "skills": <number 0-100>,
        "experience": <number 0-100>,
        "projects": <number 0-100>,
        "keywords": <number 0-100>
    },
    "project_description": {
        <project name>: <brief description>
    }
}

Rules:
- Only extract skills from the dedicated skills section
- Use numbers for all scores (not strings)
- Keep project descriptions brief
- Include all fields in response
"#;

/// Fills the template. Substitution is single-pass over the template, so
/// placeholders appearing inside the resume are left alone.
pub fn build_assessment_prompt(resume_text: &str, job_description: &str) -> String {
    let (head, rest) = ASSESSMENT_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((ASSESSMENT_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{job_description}").unwrap_or((rest, ""));

    let mut prompt = String::with_capacity(
        ASSESSMENT_PROMPT_TEMPLATE.len() + resume_text.len() + job_description.len(),
    );
    prompt.push_str(head);
    prompt.push_str(resume_text);
    prompt.push_str(middle);
    prompt.push_str(job_description);
    prompt.push_str(tail);
    prompt
}
