//! Skills Analytics — categorizes a skills profile and maps it to roles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Skills Analysis AI, designed to assess and analyze employee or user skill profiles to provide actionable insights. Your task is to evaluate skills, categorize them, identify gaps, and generate clear recommendations.

Your responsibilities:
1.  **Skill Categorization**: Classify skills into: Technical/Hard Skills, Soft Skills, Tools & Platforms, Certifications, and Domain Expertise.
2.  **Skill Gap Identification**: Compare current skills against common requirements for relevant roles and identify missing competencies.
3.  **Strengths Analysis**: Highlight strong skill areas and high-proficiency competencies.
4.  **Learning Recommendations**: Suggest personalized upskilling initiatives (courses, projects).
5.  **Role Alignment**: Match skills to potential career paths with a match score and justification.

Your primary output must be a JSON object adhering strictly to the provided schema. Ensure insights are actionable and prioritized.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsSummary {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
    pub domain_expertise: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBasedRoleAlignment {
    pub role: String,
    pub match_score: f64,
    pub missing_skills: Vec<String>,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAnalysisResult {
    pub skills_summary: SkillsSummary,
    pub strengths: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub role_alignment: Vec<SkillBasedRoleAlignment>,
    pub upskilling_recommendations: Vec<String>,
}

pub struct SkillsAnalytics;

impl ToolSpec for SkillsAnalytics {
    fn id(&self) -> &'static str {
        "analytics"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "skills_summary",
                Schema::object(vec![
                    ("hard_skills", Schema::string_array()),
                    ("soft_skills", Schema::string_array()),
                    ("tools", Schema::string_array()),
                    ("certifications", Schema::string_array()),
                    ("domain_expertise", Schema::string_array()),
                ]),
            ),
            (
                "strengths",
                Schema::string_array_desc("A list of the user's key strengths."),
            ),
            (
                "skill_gaps",
                Schema::string_array_desc("A list of identified skill gaps."),
            ),
            (
                "role_alignment",
                Schema::array(Schema::object(vec![
                    ("role", Schema::string()),
                    ("match_score", Schema::number()),
                    ("missing_skills", Schema::string_array()),
                    ("justification", Schema::string()),
                ])),
            ),
            (
                "upskilling_recommendations",
                Schema::string_array_desc("Actionable recommendations for skill development."),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["profile"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please describe your skills or paste your professional background."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Analyze the following professional skills profile: {}",
            session.field("profile")
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while analyzing the skills profile. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: SkillsAnalysisResult = typed_result(self.id(), result)?;
        let summary = &result.skills_summary;

        let mut panels = vec![
            Panel::new("Skills Summary")
                .line(format!("Hard skills: {}", summary.hard_skills.join(", ")))
                .line(format!("Soft skills: {}", summary.soft_skills.join(", ")))
                .line(format!("Tools: {}", summary.tools.join(", ")))
                .line(format!("Certifications: {}", summary.certifications.join(", ")))
                .line(format!(
                    "Domain expertise: {}",
                    summary.domain_expertise.join(", ")
                )),
            Panel::new("Strengths").bullets(&result.strengths),
            Panel::new("Skill Gaps").bullets(&result.skill_gaps),
        ];

        let mut alignment = Panel::new("Role Alignment");
        for role in &result.role_alignment {
            alignment = alignment
                .line(scored_line(&role.role, role.match_score))
                .line(format!("  {}", role.justification))
                .line(format!("  Missing: {}", role.missing_skills.join(", ")));
        }
        panels.push(alignment);
        panels.push(
            Panel::new("Upskilling Recommendations").bullets(&result.upskilling_recommendations),
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
            "skills_summary": {
                "hard_skills": ["Agile", "Market analysis"],
                "soft_skills": ["Leadership"],
                "tools": ["Jira"],
                "certifications": ["CSPO"],
                "domain_expertise": ["B2B SaaS"]
            },
            "strengths": ["Data-informed prioritization"],
            "skill_gaps": ["Pricing strategy"],
            "role_alignment": [{
                "role": "Group Product Manager",
                "match_score": 81,
                "missing_skills": ["Pricing strategy"],
                "justification": "Breadth across discovery and delivery."
            }],
            "upskilling_recommendations": ["Take a pricing and packaging course"]
        })
    }

    #[test]
    fn test_canned_response_matches_schema_and_model() {
        let response = canned_response();
        SkillsAnalytics.response_schema().validate(&response).unwrap();
        let result: SkillsAnalysisResult = serde_json::from_value(response).unwrap();
        assert_eq!(result.skills_summary.domain_expertise, vec!["B2B SaaS"]);
    }

    #[test]
    fn test_prompt_prefixes_the_profile() {
        let mut session = ToolSession::new("analytics");
        session.set_field("profile", "Experienced product manager.").unwrap();
        assert_eq!(
            SkillsAnalytics.build_prompt(&session),
            "Analyze the following professional skills profile: Experienced product manager."
        );
    }

    #[test]
    fn test_schema_requires_domain_expertise_category() {
        let mut response = canned_response();
        response["skills_summary"].as_object_mut().unwrap().remove("domain_expertise");
        let violation = SkillsAnalytics.response_schema().validate(&response).unwrap_err();
        assert_eq!(violation.path, "$.skills_summary");
    }
}
