// Resume analysis prompt templates.
// Each prompt embeds the full resume text; no context is shared between calls.

pub const SUMMARY_PROMPT: &str = "\
Summarize this resume professionally in 5-6 lines:

{resume_text}";

pub const SKILL_GAPS_PROMPT: &str = "\
Identify missing skills and improvement areas for tech/data roles based on this resume:

{resume_text}";

pub const ROADMAP_PROMPT: &str = "\
Create a structured 3-6 month roadmap to improve skills and get hired in tech/data field:

{resume_text}";

pub const KEYWORDS_PROMPT: &str = "\
Extract exactly 5 short job search keywords.
Return only comma separated words.

{resume_text}";

pub fn fill(template: &str, resume_text: &str) -> String {
    template.replace("{resume_text}", resume_text)
}
