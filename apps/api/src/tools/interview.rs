//! Video Interview Analyzer — feedback on an interview transcript.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{scored_line, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Video Interview Analyzer, an AI specialized in analyzing a user’s interview transcript to evaluate communication skills, personality traits, and professional presence. Your task is to extract actionable insights that inform career recommendations and skill gaps.

Your responsibilities:
1.  **Communication Skills Assessment**: Based on the transcript, evaluate clarity, coherence, and articulation. Provide a score from 0-100.
2.  **Personality & Behavioral Traits**: Infer personality traits (confidence, leadership, adaptability, teamwork, creativity) from the tone, word choice, and style of responses. Provide a brief summary for each.
3.  **Professional Presence & Soft Skills**: Evaluate enthusiasm, professionalism, and empathy. Provide a list of feedback points.
4.  **Role Alignment Insights**: Suggest career paths or roles where the candidate’s communication style and inferred traits are a strong fit. Provide a match score and justification.
5.  **Actionable Recommendations**: Provide a list of concrete actions the user can take to improve their interview performance.

Your primary output must be a JSON object adhering strictly to the provided schema. Be objective, professional, and constructive.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub confidence: String,
    pub leadership: String,
    pub adaptability: String,
    pub teamwork: String,
    pub creativity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAlignment {
    pub role: String,
    pub match_score: f64,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewAnalysisResult {
    pub transcript_summary: String,
    pub communication_score: f64,
    pub personality_traits: PersonalityTraits,
    pub soft_skills_feedback: Vec<String>,
    pub role_alignment: Vec<RoleAlignment>,
    pub recommended_actions: Vec<String>,
}

pub struct InterviewAnalyzer;

impl ToolSpec for InterviewAnalyzer {
    fn id(&self) -> &'static str {
        "interviews"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "transcript_summary",
                Schema::string_desc("A brief summary of the key points from the user's answers."),
            ),
            (
                "communication_score",
                Schema::number_desc("A score from 0 to 100 for overall communication skills."),
            ),
            (
                "personality_traits",
                Schema::object(vec![
                    (
                        "confidence",
                        Schema::string_desc("Analysis of the user's confidence."),
                    ),
                    (
                        "leadership",
                        Schema::string_desc("Analysis of leadership qualities."),
                    ),
                    (
                        "adaptability",
                        Schema::string_desc("Analysis of adaptability."),
                    ),
                    (
                        "teamwork",
                        Schema::string_desc("Analysis of teamwork skills."),
                    ),
                    (
                        "creativity",
                        Schema::string_desc("Analysis of creativity and problem-solving."),
                    ),
                ]),
            ),
            (
                "soft_skills_feedback",
                Schema::string_array_desc("A list of specific feedback points on soft skills."),
            ),
            (
                "role_alignment",
                Schema::array(Schema::object(vec![
                    ("role", Schema::string()),
                    ("match_score", Schema::number()),
                    ("justification", Schema::string()),
                ])),
            ),
            (
                "recommended_actions",
                Schema::string_array_desc("A list of actionable steps for improvement."),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["transcript"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please paste the transcript of your interview answers."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        let questions = session.field("questions");
        let questions = if questions.trim().is_empty() {
            "Not provided."
        } else {
            questions
        };
        format!(
            "Interview Questions (for context):\n{}\n\nCandidate's Transcript:\n{}",
            questions,
            session.field("transcript"),
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while analyzing the interview. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: InterviewAnalysisResult = typed_result(self.id(), result)?;
        let traits = &result.personality_traits;

        let mut panels = vec![
            Panel::new("Transcript Summary").line(result.transcript_summary),
            Panel::new("Communication").line(format!(
                "Overall communication score: {:.0}/100",
                result.communication_score
            )),
            Panel::new("Personality Traits")
                .line(format!("Confidence: {}", traits.confidence))
                .line(format!("Leadership: {}", traits.leadership))
                .line(format!("Adaptability: {}", traits.adaptability))
                .line(format!("Teamwork: {}", traits.teamwork))
                .line(format!("Creativity: {}", traits.creativity)),
            Panel::new("Soft Skills Feedback").bullets(&result.soft_skills_feedback),
        ];

        let mut alignment = Panel::new("Role Alignment");
        for role in &result.role_alignment {
            alignment = alignment
                .line(scored_line(&role.role, role.match_score))
                .line(format!("  {}", role.justification));
        }
        panels.push(alignment);
        panels.push(Panel::new("Recommended Actions").bullets(&result.recommended_actions));

        Ok(panels)
    }
}
