//! Personalized Upskilling — a milestone learning path toward a target role.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::Panel;
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Personalized Upskilling Advisor, an AI specialized in designing customized learning and development plans. Your task is to provide structured, actionable, and prioritized upskilling paths to help users achieve their target roles.

Your responsibilities:
1.  **Analyze Skill Gaps**: Based on the user's current skills and target role, identify the most important missing competencies.
2.  **Design Learning Path**: Generate a clear, actionable roadmap with milestones (Short-term, Medium-term, Long-term).
3.  **Provide Resources**: For each milestone, recommend specific online courses, certifications, hands-on projects, and measurable goals.
4.  **Prioritize for Impact**: Tailor recommendations to highlight skills that offer the highest ROI for career growth.

Your primary output must be a JSON object with a structured learning plan, adhering strictly to the provided schema. Ensure recommendations are realistic and actionable.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathMilestone {
    pub milestone: String,
    pub skills_to_learn: Vec<String>,
    pub recommended_courses: Vec<String>,
    pub projects: Vec<String>,
    pub measurable_goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpskillingResult {
    pub learning_path: Vec<LearningPathMilestone>,
}

pub struct PersonalizedUpskilling;

impl ToolSpec for PersonalizedUpskilling {
    fn id(&self) -> &'static str {
        "upskilling"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![(
            "learning_path",
            Schema::array_desc(
                "A structured learning path with 3 milestones.",
                Schema::object(vec![
                    (
                        "milestone",
                        Schema::string_desc(
                            "The timeframe for the milestone, e.g., 'Short-term / 1–4 weeks'.",
                        ),
                    ),
                    (
                        "skills_to_learn",
                        Schema::string_array_desc("Specific skills to focus on during this phase."),
                    ),
                    (
                        "recommended_courses",
                        Schema::string_array_desc("A list of suggested online courses or tutorials."),
                    ),
                    (
                        "projects",
                        Schema::string_array_desc("Ideas for hands-on projects to apply new skills."),
                    ),
                    (
                        "measurable_goals",
                        Schema::string_array_desc("Clear, measurable goals to track progress."),
                    ),
                ]),
            ),
        )])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["target_role", "current_skills", "skill_gaps"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please fill in all fields to generate a learning plan."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        format!(
            "Target Role: {}\nCurrent Skills: {}\nSkills to Learn / Gaps: {}",
            session.field("target_role"),
            session.field("current_skills"),
            session.field("skill_gaps"),
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while generating the learning plan. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: UpskillingResult = typed_result(self.id(), result)?;

        let panels = result
            .learning_path
            .into_iter()
            .map(|milestone| {
                Panel::new(milestone.milestone)
                    .line("Skills to learn:")
                    .bullets(&milestone.skills_to_learn)
                    .line("Recommended courses:")
                    .bullets(&milestone.recommended_courses)
                    .line("Projects:")
                    .bullets(&milestone.projects)
                    .line("Measurable goals:")
                    .bullets(&milestone.measurable_goals)
            })
            .collect();

        Ok(panels)
    }
}
