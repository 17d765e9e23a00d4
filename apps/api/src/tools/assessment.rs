//! AI Career Assessment — full career analysis from a pasted background.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS, an advanced AI Career Generator and Professional Development Assistant. Your task is to analyze a user’s professional background, including resumes, text input, and optional video transcripts, to produce a structured, actionable, and personalized career roadmap. Your outputs should be precise, clear, and actionable, using JSON formatting for structured data.

Your responsibilities include:

1. **Career Identity Detection**: Analyze the user's professional background to identify their strengths, weaknesses, work style, and ideal roles. Generate a clear career persona, describing key attributes and motivations.
2. **Experience & Skills Extraction**: Extract hard skills, soft skills, tools, certifications, job roles, achievements, and education from resumes or text input.
3. **Career Path Generation**: Recommend 3–5 high-probability career paths. For each, provide: Role name, Match score (0–100), Required skills, Missing skills, and a justification.
4. **Skill Gap Analysis**: Compare current skills with requirements of each recommended path, identify missing competencies, and suggest learning strategies.
5. **Resume & Profile Builder**: Generate an optimized resume or LinkedIn summary tailored to target roles.
6. **Personalized Career Roadmap**: Produce a 30/60/90-day action plan.
7. **Job Market Insights**: Suggest industries, trending jobs, and salary ranges.

Your primary output must be a JSON object matching the provided schema. Ensure outputs are ready for direct use in applications. Keep responses professional and tailored to individual career growth.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedRole {
    pub role: String,
    pub match_score: f64,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    #[serde(rename = "type")]
    pub gap_type: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRoadmap {
    #[serde(rename = "30_days")]
    pub days_30: Vec<String>,
    #[serde(rename = "60_days")]
    pub days_60: Vec<String>,
    #[serde(rename = "90_days")]
    pub days_90: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub career_persona: String,
    pub skills: Skills,
    pub recommended_roles: Vec<RecommendedRole>,
    pub skill_gaps: Vec<SkillGap>,
    pub career_roadmap: CareerRoadmap,
    pub resume: String,
}

pub struct CareerAssessment;

impl ToolSpec for CareerAssessment {
    fn id(&self) -> &'static str {
        "assessment"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "career_persona",
                Schema::string_desc("A summary of the user's professional persona."),
            ),
            (
                "skills",
                Schema::object(vec![
                    ("hard_skills", Schema::string_array()),
                    ("soft_skills", Schema::string_array()),
                    ("tools", Schema::string_array()),
                    ("certifications", Schema::string_array()),
                    (
                        "experience",
                        Schema::array(Schema::object(vec![
                            ("role", Schema::string()),
                            ("company", Schema::string()),
                            ("duration", Schema::string()),
                            ("achievements", Schema::string_array()),
                        ])),
                    ),
                ]),
            ),
            (
                "recommended_roles",
                Schema::array(Schema::object(vec![
                    ("role", Schema::string()),
                    ("match_score", Schema::number_desc("A score from 0 to 100.")),
                    ("required_skills", Schema::string_array()),
                    ("missing_skills", Schema::string_array()),
                    ("justification", Schema::string()),
                ])),
            ),
            (
                "skill_gaps",
                Schema::array(Schema::object(vec![
                    ("skill", Schema::string()),
                    (
                        "type",
                        Schema::string_enum(&["technical", "behavioral", "domain-specific"]),
                    ),
                    (
                        "suggestion",
                        Schema::string_desc("Actionable advice to close the skill gap."),
                    ),
                ])),
            ),
            (
                "career_roadmap",
                Schema::object(vec![
                    ("30_days", Schema::string_array()),
                    ("60_days", Schema::string_array()),
                    ("90_days", Schema::string_array()),
                ]),
            ),
            (
                "resume",
                Schema::string_desc("An optimized resume tailored to the recommended roles."),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["background"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please paste your resume or professional background."
    }

    // The assessment prompt is the pasted background itself; all framing
    // lives in the system instruction.
    fn build_prompt(&self, session: &ToolSession) -> String {
        session.field("background").to_string()
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while analyzing your information. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: AnalysisResult = typed_result(self.id(), result)?;

        let mut panels = vec![
            Panel::new("Career Persona").line(result.career_persona),
            Panel::new("Hard Skills").bullets(&result.skills.hard_skills),
            Panel::new("Soft Skills").bullets(&result.skills.soft_skills),
            Panel::new("Tools").bullets(&result.skills.tools),
            Panel::new("Certifications").bullets(&result.skills.certifications),
        ];

        let mut roles = Panel::new("Recommended Roles");
        for role in &result.recommended_roles {
            roles = roles
                .line(scored_line(&role.role, role.match_score))
                .line(format!("  {}", role.justification))
                .line(format!("  Missing: {}", role.missing_skills.join(", ")));
        }
        panels.push(roles);

        let mut gaps = Panel::new("Skill Gaps");
        for gap in &result.skill_gaps {
            gaps = gaps.line(format!(
                "{} ({}): {}",
                gap.skill, gap.gap_type, gap.suggestion
            ));
        }
        panels.push(gaps);

        panels.push(
            Panel::new("30/60/90-Day Roadmap")
                .line("First 30 days:")
                .bullets(&result.career_roadmap.days_30)
                .line("By day 60:")
                .bullets(&result.career_roadmap.days_60)
                .line("By day 90:")
                .bullets(&result.career_roadmap.days_90),
        );
        panels.push(Panel::new("Optimized Resume").line(result.resume));

        Ok(panels)
    }
}
