//! Talent Mobility Engine — internal mobility planning for one employee.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are the CareerOS Talent Mobility Engine, an AI designed to help organizations facilitate internal career growth and retain talent. Your task is to analyze an employee's profile in the context of available internal roles and generate a strategic mobility plan.

Your responsibilities:
1.  **Internal Opportunity Matching**: Match the employee to the most suitable internal roles or projects from the provided list. Provide a match score (0-100), justification, and skills to develop for each match.
2.  **Career Path Simulation**: Generate 1-2 potential career paths for the employee *within the organization*, outlining next steps and a development plan.
3.  **Retention Risk Assessment**: Assess the employee's retention risk (Low, Medium, High) and provide a reason.
4.  **Mobility Recommendations**: Provide actionable recommendations for the *organization* to support this employee's growth and mobility.

Your primary output must be a JSON object adhering strictly to the provided schema. The analysis must be strategic, data-driven, and focused on internal talent development.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub name: String,
    pub current_role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalOpportunity {
    pub role_or_project: String,
    pub match_score: f64,
    pub justification: String,
    pub skills_to_develop: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialCareerPath {
    pub path_name: String,
    pub next_steps: Vec<String>,
    pub development_plan: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionRisk {
    pub level: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentMobilityResult {
    pub employee_summary: EmployeeSummary,
    pub internal_opportunities: Vec<InternalOpportunity>,
    pub potential_career_paths: Vec<PotentialCareerPath>,
    pub retention_risk: RetentionRisk,
    pub mobility_recommendations: Vec<String>,
}

pub struct TalentMobility;

impl ToolSpec for TalentMobility {
    fn id(&self) -> &'static str {
        "mobility"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "employee_summary",
                Schema::object(vec![
                    ("name", Schema::string()),
                    ("current_role", Schema::string()),
                ]),
            ),
            (
                "internal_opportunities",
                Schema::array(Schema::object(vec![
                    ("role_or_project", Schema::string()),
                    ("match_score", Schema::number()),
                    ("justification", Schema::string()),
                    ("skills_to_develop", Schema::string_array()),
                ])),
            ),
            (
                "potential_career_paths",
                Schema::array(Schema::object(vec![
                    ("path_name", Schema::string()),
                    ("next_steps", Schema::string_array()),
                    ("development_plan", Schema::string_array()),
                ])),
            ),
            (
                "retention_risk",
                Schema::object(vec![
                    ("level", Schema::string_enum(&["Low", "Medium", "High"])),
                    ("reason", Schema::string()),
                ]),
            ),
            (
                "mobility_recommendations",
                Schema::string_array_desc("Recommendations for the organization."),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["employee_profile", "internal_roles"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please provide both the employee profile and the list of internal roles."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Employee Profile:\n{}\n\nAvailable Internal Roles/Projects:\n{}",
            session.field("employee_profile"),
            session.field("internal_roles"),
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred during analysis. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: TalentMobilityResult = typed_result(self.id(), result)?;

        let mut panels = vec![Panel::new("Employee").line(format!(
            "{} — {}",
            result.employee_summary.name, result.employee_summary.current_role
        ))];

        let mut opportunities = Panel::new("Internal Opportunities");
        for opp in &result.internal_opportunities {
            opportunities = opportunities
                .line(scored_line(&opp.role_or_project, opp.match_score))
                .line(format!("  {}", opp.justification))
                .line(format!("  Develop: {}", opp.skills_to_develop.join(", ")));
        }
        panels.push(opportunities);

        for path in &result.potential_career_paths {
            panels.push(
                Panel::new(format!("Career Path: {}", path.path_name))
                    .line("Next steps:")
                    .bullets(&path.next_steps)
                    .line("Development plan:")
                    .bullets(&path.development_plan),
            );
        }

        panels.push(Panel::new("Retention Risk").line(format!(
            "{}: {}",
            result.retention_risk.level, result.retention_risk.reason
        )));
        panels.push(
            Panel::new("Recommendations for the Organization")
                .bullets(&result.mobility_recommendations),
        );

        Ok(panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canned_response() -> Value {
        json!({
            "employee_summary": { "name": "Alex Chen", "current_role": "Senior Marketing Analyst" },
            "internal_opportunities": [{
                "role_or_project": "Product Marketing Manager",
                "match_score": 76,
                "justification": "Analytical depth transfers well to positioning work.",
                "skills_to_develop": ["GTM strategy"]
            }],
            "potential_career_paths": [{
                "path_name": "Marketing Leadership Track",
                "next_steps": ["Shadow the PMM team for a quarter"],
                "development_plan": ["Complete a GTM strategy course"]
            }],
            "retention_risk": { "level": "Medium", "reason": "Expressed interest in a role change." },
            "mobility_recommendations": ["Create a 6-month rotation into product marketing"]
        })
    }

    #[test]
    fn test_canned_response_matches_schema_and_model() {
        let response = canned_response();
        TalentMobility.response_schema().validate(&response).unwrap();
        let result: TalentMobilityResult = serde_json::from_value(response).unwrap();
        assert_eq!(result.retention_risk.level, "Medium");
    }

    #[test]
    fn test_schema_rejects_out_of_enum_risk_level() {
        let mut response = canned_response();
        response["retention_risk"]["level"] = json!("Severe");
        let violation = TalentMobility.response_schema().validate(&response).unwrap_err();
        assert_eq!(violation.path, "$.retention_risk.level");
    }

    #[test]
    fn test_prompt_orders_profile_before_roles() {
        let mut session = ToolSession::new("mobility");
        session.set_field("employee_profile", "Name: Alex Chen").unwrap();
        session.set_field("internal_roles", "1. Product Marketing Manager").unwrap();

        assert_eq!(
            TalentMobility.build_prompt(&session),
            "Employee Profile:\nName: Alex Chen\n\nAvailable Internal Roles/Projects:\n1. Product Marketing Manager"
        );
    }

    #[test]
    fn test_both_fields_are_required() {
        assert_eq!(
            TalentMobility.required_fields(),
            &["employee_profile", "internal_roles"]
        );
    }
}
