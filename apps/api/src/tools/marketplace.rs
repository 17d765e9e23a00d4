//! Career Marketplace — ranked external opportunity recommendations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Career Marketplace AI, an intelligent system designed to connect users with career opportunities. Your task is to provide actionable, personalized, and market-aligned recommendations to help users discover and secure the most relevant opportunities.

Your responsibilities:
1.  **Opportunity Matching**: Analyze user skills, experience, and goals to recommend top-fit roles, freelance projects, or contract opportunities. Rank them by match score (0–100).
2.  **Employer & Role Insights**: Provide details about the organization, role expectations, and required skills.
3.  **Skill Gap & Readiness Assessment**: Compare the user's skills with role requirements and identify gaps.
4.  **Compensation & Growth Guidance**: Include typical salary ranges and highlight career growth potential.

Your primary output must be a JSON object containing an array of recommended opportunities, adhering strictly to the provided schema. Prioritize high-probability matches.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedOpportunity {
    pub role: String,
    pub organization: String,
    pub match_score: f64,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
    pub location: String,
    pub salary_range: String,
    pub career_growth_potential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMarketplaceResult {
    pub recommended_opportunities: Vec<RecommendedOpportunity>,
}

pub struct CareerMarketplace;

impl ToolSpec for CareerMarketplace {
    fn id(&self) -> &'static str {
        "marketplace"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![(
            "recommended_opportunities",
            Schema::array(Schema::object(vec![
                ("role", Schema::string()),
                ("organization", Schema::string()),
                ("match_score", Schema::number()),
                ("required_skills", Schema::string_array()),
                ("missing_skills", Schema::string_array()),
                ("justification", Schema::string()),
                ("location", Schema::string()),
                ("salary_range", Schema::string()),
                ("career_growth_potential", Schema::string()),
            ])),
        )])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["user_profile"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please provide your professional profile."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "User Profile:\n{}\n\nCareer Preferences:\n{}",
            session.field("user_profile"),
            session.field("preferences"),
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while finding opportunities. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: CareerMarketplaceResult = typed_result(self.id(), result)?;

        let panels = result
            .recommended_opportunities
            .into_iter()
            .map(|opp| {
                Panel::new(format!("{} @ {}", opp.role, opp.organization))
                    .line(scored_line("Match", opp.match_score))
                    .line(format!("Location: {}", opp.location))
                    .line(format!("Salary: {}", opp.salary_range))
                    .line(format!("Required: {}", opp.required_skills.join(", ")))
                    .line(format!("Missing: {}", opp.missing_skills.join(", ")))
                    .line(opp.justification)
                    .line(format!("Growth: {}", opp.career_growth_potential))
            })
            .collect();

        Ok(panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canned_response() -> Value {
        json!({
            "recommended_opportunities": [{
                "role": "Lead Engineer",
                "organization": "FinTech startup",
                "match_score": 88,
                "required_skills": ["React", "TypeScript", "AWS"],
                "missing_skills": ["Kubernetes"],
                "justification": "Stack overlap and leadership experience.",
                "location": "Remote",
                "salary_range": "$170,000 – $210,000",
                "career_growth_potential": "Path to Head of Engineering within 2 years."
            }]
        })
    }

    #[test]
    fn test_canned_response_matches_schema_and_model() {
        let response = canned_response();
        CareerMarketplace.response_schema().validate(&response).unwrap();
        let result: CareerMarketplaceResult = serde_json::from_value(response).unwrap();
        assert_eq!(result.recommended_opportunities[0].location, "Remote");
    }

    #[test]
    fn test_only_the_profile_is_required() {
        assert_eq!(CareerMarketplace.required_fields(), &["user_profile"]);
    }

    #[test]
    fn test_prompt_includes_preferences_even_when_blank() {
        let mut session = ToolSession::new("marketplace");
        session.set_field("user_profile", "Senior engineer, 8 years.").unwrap();

        assert_eq!(
            CareerMarketplace.build_prompt(&session),
            "User Profile:\nSenior engineer, 8 years.\n\nCareer Preferences:\n"
        );
    }

    #[test]
    fn test_schema_flags_missing_salary_range() {
        let mut response = canned_response();
        response["recommended_opportunities"][0]
            .as_object_mut()
            .unwrap()
            .remove("salary_range");
        let violation = CareerMarketplace.response_schema().validate(&response).unwrap_err();
        assert_eq!(violation.path, "$.recommended_opportunities[0]");
        assert!(violation.reason.contains("salary_range"));
    }
}
