//! Job Matching — recommends roles for a pasted professional background.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Job Matching Engine, an AI specialized in analyzing a user’s skills, experience, and professional background to identify the most suitable career opportunities. Your task is to recommend high-probability roles, industries, and job categories, providing actionable insights for career growth and job applications.

Your responsibilities:
1.  **Role Recommendation**: Recommend 3–5 roles that align with the user’s current abilities and potential growth.
2.  **Match Scoring**: Assign a match score (0–100) for each role and provide a brief rationale.
3.  **Skills Analysis**: List critical required skills and highlight the user's skill gaps.
4.  **Job Market Insights**: Suggest industries, sectors, or companies hiring for each role and provide a typical salary range.
5.  **Actionable Recommendations**: Provide practical next steps for the user.

Your primary output must be a JSON object containing an array of recommended roles, adhering strictly to the provided schema.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJobRole {
    pub role: String,
    pub match_score: f64,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
    pub industry_suggestions: Vec<String>,
    pub salary_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchResult {
    pub recommended_roles: Vec<RecommendedJobRole>,
}

pub struct JobMatching;

impl ToolSpec for JobMatching {
    fn id(&self) -> &'static str {
        "job-matching"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![(
            "recommended_roles",
            Schema::array_desc(
                "A list of 3-5 recommended job roles.",
                Schema::object(vec![
                    ("role", Schema::string_desc("The job title.")),
                    (
                        "match_score",
                        Schema::number_desc("A score from 0 to 100 indicating profile match."),
                    ),
                    (
                        "required_skills",
                        Schema::string_array_desc("Skills the user possesses that match the role."),
                    ),
                    (
                        "missing_skills",
                        Schema::string_array_desc(
                            "Key skills the user needs to develop for this role.",
                        ),
                    ),
                    (
                        "justification",
                        Schema::string_desc(
                            "A brief 1-2 sentence explanation for the recommendation and score.",
                        ),
                    ),
                    (
                        "industry_suggestions",
                        Schema::string_array_desc(
                            "Examples of industries or sectors where this role is in demand.",
                        ),
                    ),
                    (
                        "salary_range",
                        Schema::string_desc(
                            "Typical salary range for this role, e.g., '$90,000 - $120,000'.",
                        ),
                    ),
                ]),
            ),
        )])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["background"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please paste your resume or professional background."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Analyze the following professional background and find suitable job matches: {}",
            session.field("background")
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while finding job matches. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: JobMatchResult = typed_result(self.id(), result)?;

        let panels = result
            .recommended_roles
            .into_iter()
            .map(|role| {
                Panel::new(scored_line(&role.role, role.match_score))
                    .line(role.justification)
                    .line(format!("Salary range: {}", role.salary_range))
                    .line(format!("Matching skills: {}", role.required_skills.join(", ")))
                    .line(format!("Skills to develop: {}", role.missing_skills.join(", ")))
                    .line(format!("Industries: {}", role.industry_suggestions.join(", ")))
            })
            .collect();

        Ok(panels)
    }
}
