//! Enterprise Dashboard — workforce analytics from a structured employee
//! dataset. The only tool taking JSON input, so it carries a pre-flight
//! syntax check that rejects malformed data before any network call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::Panel;
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Enterprise Dashboard AI, a system designed to provide organizations with a comprehensive view of their workforce’s skills, career trajectories, and talent mobility opportunities. Your task is to process structured employee data and generate actionable insights and analytics for HR, L&D, and management teams.

Your responsibilities:
1.  **Workforce Skill Analysis**: Aggregate and analyze employee skills across departments. Identify skill distributions, strengths, and weaknesses.
2.  **Talent Identification**: Highlight high-potential employees based on their skill sets and experience.
3.  **Gap Analysis**: Identify critical skill gaps within each department.
4.  **Actionable Recommendations**: Suggest upskilling initiatives and internal mobility opportunities.

Your primary output must be a JSON object containing an array of departments with their respective analytics, adhering strictly to the provided schema. Ensure insights are actionable and relevant to business strategy.";

pub const MALFORMED_DATA_MESSAGE: &str = "Invalid JSON format. Please check your data.";

/// Documented input record shape for the employee dataset. The pre-flight
/// check only enforces JSON syntax, matching the tool's contract; record
/// shape is left to the generation service to interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopEmployee {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAnalytics {
    pub name: String,
    pub skills_summary: Vec<SkillCount>,
    pub top_employees: Vec<TopEmployee>,
    pub skills_gaps: Vec<String>,
    pub upskilling_recommendations: Vec<String>,
    pub career_mobility_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseDashboardResult {
    pub departments: Vec<DepartmentAnalytics>,
}

pub struct EnterpriseDashboard;

impl ToolSpec for EnterpriseDashboard {
    fn id(&self) -> &'static str {
        "enterprise"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![(
            "departments",
            Schema::array(Schema::object(vec![
                ("name", Schema::string()),
                (
                    "skills_summary",
                    Schema::array_desc(
                        "A summary of the top skills in the department.",
                        Schema::object(vec![
                            ("skill", Schema::string()),
                            (
                                "count",
                                Schema::number_desc("Number of employees with this skill."),
                            ),
                        ]),
                    ),
                ),
                (
                    "top_employees",
                    Schema::array_desc(
                        "Employees identified as high-potential or key contributors.",
                        Schema::object(vec![
                            ("name", Schema::string()),
                            (
                                "reason",
                                Schema::string_desc("Why this employee was highlighted."),
                            ),
                        ]),
                    ),
                ),
                (
                    "skills_gaps",
                    Schema::string_array_desc(
                        "Critical skills missing or underrepresented in the department.",
                    ),
                ),
                (
                    "upskilling_recommendations",
                    Schema::string_array_desc(
                        "Actionable recommendations for training and development.",
                    ),
                ),
                (
                    "career_mobility_opportunities",
                    Schema::string_array_desc(
                        "Potential internal career moves for employees in this department.",
                    ),
                ),
            ])),
        )])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["employee_data"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please paste your employee data in JSON format."
    }

    /// Rejects syntactically invalid employee JSON before submission.
    fn preflight(&self, session: &ToolSession) -> Result<(), String> {
        serde_json::from_str::<Value>(session.field("employee_data"))
            .map(|_| ())
            .map_err(|_| MALFORMED_DATA_MESSAGE.to_string())
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Analyze the following employee dataset: {}",
            session.field("employee_data")
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while generating the dashboard. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: EnterpriseDashboardResult = typed_result(self.id(), result)?;

        let panels = result
            .departments
            .into_iter()
            .map(|dept| {
                let mut panel = Panel::new(dept.name).line("Top skills:");
                for entry in &dept.skills_summary {
                    panel = panel.line(format!("  {} × {:.0}", entry.skill, entry.count));
                }
                panel = panel.line("Top employees:");
                for employee in &dept.top_employees {
                    panel = panel.line(format!("  {} — {}", employee.name, employee.reason));
                }
                panel
                    .line(format!("Skill gaps: {}", dept.skills_gaps.join(", ")))
                    .line("Upskilling recommendations:")
                    .bullets(&dept.upskilling_recommendations)
                    .line("Mobility opportunities:")
                    .bullets(&dept.career_mobility_opportunities)
            })
            .collect();

        Ok(panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VALID_DATASET: &str = r#"[
        {"id":"E101","name":"Alice Johnson","role":"Senior Software Engineer","department":"Engineering","skills":["React","Node.js","AWS","TypeScript"],"experience_years":8}
    ]"#;

    fn canned_response() -> Value {
        json!({
            "departments": [{
                "name": "Engineering",
                "skills_summary": [{ "skill": "React", "count": 1 }],
                "top_employees": [{ "name": "Alice Johnson", "reason": "Deep full-stack coverage." }],
                "skills_gaps": ["Security engineering"],
                "upskilling_recommendations": ["Sponsor AWS certifications"],
                "career_mobility_opportunities": ["Alice Johnson → Staff Engineer"]
            }]
        })
    }

    #[test]
    fn test_canned_response_matches_schema_and_model() {
        let response = canned_response();
        EnterpriseDashboard.response_schema().validate(&response).unwrap();
        let result: EnterpriseDashboardResult = serde_json::from_value(response).unwrap();
        assert_eq!(result.departments[0].skills_summary[0].skill, "React");
    }

    #[test]
    fn test_preflight_accepts_valid_json() {
        let mut session = ToolSession::new("enterprise");
        session.set_field("employee_data", VALID_DATASET).unwrap();
        assert!(EnterpriseDashboard.preflight(&session).is_ok());
    }

    #[test]
    fn test_preflight_rejects_trailing_comma() {
        let mut session = ToolSession::new("enterprise");
        session
            .set_field(
                "employee_data",
                r#"[{"id":"E101","name":"Alice Johnson","department":"Engineering","skills":["React"],"experience_years":8},]"#,
            )
            .unwrap();
        assert_eq!(
            EnterpriseDashboard.preflight(&session),
            Err(MALFORMED_DATA_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_prompt_embeds_the_raw_dataset() {
        let mut session = ToolSession::new("enterprise");
        session.set_field("employee_data", "[]").unwrap();
        assert_eq!(
            EnterpriseDashboard.build_prompt(&session),
            "Analyze the following employee dataset: []"
        );
    }

    #[test]
    fn test_employee_profile_record_shape() {
        let profiles: Vec<EmployeeProfile> = serde_json::from_str(VALID_DATASET).unwrap();
        assert_eq!(profiles[0].id, "E101");
        assert_eq!(profiles[0].experience_years, 8.0);
    }
}
