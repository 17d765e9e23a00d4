//! AI Resume Generator — produces plain-text and HTML resume renditions
//! from structured form data. The only tool whose input is assembled into
//! a JSON payload before prompting, and the only one with no hard field
//! requirement: partial forms still generate a best-effort resume.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::render::Panel;
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are the CareerOS Resume Generator, an AI specialized in creating professional, ATS-friendly, and role-targeted resumes. Your task is to take the user’s extracted skills, experience, achievements, and target career paths, and generate a polished, high-impact resume that highlights strengths, quantifies achievements, and aligns perfectly with the target roles.

Your responsibilities:
1. **Professional Summary**: Write a concise 2–3 sentence summary.
2. **Skills Section**: Organize skills into categories (Hard Skills, Soft Skills, Tools).
3. **Experience Section**: Use the STAR method for achievements and quantify results.
4. **Education Section**: Include degree, institution, and graduation year.
5. **ATS Optimization**: Include relevant keywords and use simple, scannable formatting.

**Output Requirements**:
- Primary output: A JSON object containing two keys: 'text_resume' (the complete resume in plain text) and 'html_resume' (a well-structured, styled HTML version of the resume).
- Ensure clarity, conciseness, and a professional tone. The HTML should be self-contained and use inline styles or a style tag.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedResume {
    pub text_resume: String,
    pub html_resume: String,
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

pub struct ResumeGenerator;

impl ResumeGenerator {
    /// Assembles the form fields into the structured payload the model is
    /// prompted with. Skills arrive as comma-separated text and are split
    /// into arrays.
    fn payload(session: &ToolSession) -> Value {
        json!({
            "contact": {
                "name": session.field("contact_name"),
                "email": session.field("contact_email"),
                "phone": session.field("contact_phone"),
                "linkedin": session.field("contact_linkedin"),
            },
            "summary": session.field("summary"),
            "skills": {
                "hard_skills": split_csv(session.field("hard_skills")),
                "soft_skills": split_csv(session.field("soft_skills")),
                "tools": split_csv(session.field("tools")),
            },
            "experience": session.field("experience"),
            "education": session.field("education"),
            "target_role": session.field("target_role"),
        })
    }
}

impl ToolSpec for ResumeGenerator {
    fn id(&self) -> &'static str {
        "resume"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "text_resume",
                Schema::string_desc("The complete resume formatted as plain text."),
            ),
            (
                "html_resume",
                Schema::string_desc(
                    "The complete resume formatted as a self-contained HTML document.",
                ),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please fill in your resume details."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Generate a resume based on this data: {}",
            Self::payload(session)
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while generating the resume. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: GeneratedResume = typed_result(self.id(), result)?;

        let mut text_panel = Panel::new("Resume (Plain Text)");
        for line in result.text_resume.lines() {
            text_panel = text_panel.line(line);
        }

        Ok(vec![
            text_panel,
            Panel::new("Resume (HTML)").line(result.html_resume),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fields_are_required() {
        assert!(ResumeGenerator.required_fields().is_empty());
    }

    #[test]
    fn test_payload_splits_comma_separated_skills() {
        let mut session = ToolSession::new("resume");
        session.set_field("hard_skills", "SQL, Python,  Agile").unwrap();

        let payload = ResumeGenerator::payload(&session);
        assert_eq!(
            payload["skills"]["hard_skills"],
            json!(["SQL", "Python", "Agile"])
        );
    }

    #[test]
    fn test_prompt_embeds_the_json_payload() {
        let mut session = ToolSession::new("resume");
        session.set_field("contact_name", "Jane Doe").unwrap();
        session.set_field("target_role", "Senior Project Manager").unwrap();

        let prompt = ResumeGenerator.build_prompt(&session);
        assert!(prompt.starts_with("Generate a resume based on this data: {"));
        assert!(prompt.contains("\"name\":\"Jane Doe\""));
        assert!(prompt.contains("\"target_role\":\"Senior Project Manager\""));
    }

    #[test]
    fn test_schema_requires_both_renditions() {
        let response = json!({ "text_resume": "JANE DOE\n..." });
        let violation = ResumeGenerator.response_schema().validate(&response).unwrap_err();
        assert_eq!(violation.path, "$");
        assert!(violation.reason.contains("html_resume"));
    }

    #[test]
    fn test_render_splits_text_resume_into_lines() {
        let response = json!({
            "text_resume": "JANE DOE\nSenior Project Manager",
            "html_resume": "<html><body>Jane Doe</body></html>"
        });
        let panels = ResumeGenerator.render(&response).unwrap();
        assert_eq!(panels[0].lines, vec!["JANE DOE", "Senior Project Manager"]);
        assert_eq!(panels[1].lines.len(), 1);
    }
}
