//! Salary Prediction — estimates a market salary range for a target role.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::{average_marker_position, format_currency, Panel};
use crate::schema::Schema;
use crate::session::ToolSession;
use crate::tools::{typed_result, ToolSpec};

const SYSTEM_INSTRUCTION: &str = "You are CareerOS Salary Prediction Engine, an AI specialized in estimating realistic salary ranges for a user’s target roles based on their skills, experience, industry, location, and market trends. Your task is to provide data-driven, actionable insights to help users understand compensation expectations and make informed career decisions.

Your responsibilities:
1.  **Salary Estimation**: Analyze the user’s profile to estimate salary ranges (min, average, max) for their target role and location.
2.  **Justification**: Provide a brief justification for the estimated range based on the user's profile and market data.
3.  **Key Factors**: Identify specific skills or experience points that positively or negatively impact the salary estimate.
4.  **Recommendations**: Suggest actionable steps, such as acquiring new skills or certifications, that could increase their earning potential.

Your primary output must be a JSON object adhering strictly to the provided schema. Base estimates on realistic market trends.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedSalaryRange {
    pub min: f64,
    pub average: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryPredictionResult {
    pub role: String,
    pub location: String,
    pub estimated_salary_range: EstimatedSalaryRange,
    pub justification: String,
    pub skills_impacting_salary: Vec<String>,
    pub recommendations_to_increase_salary: Vec<String>,
}

pub struct SalaryPrediction;

impl ToolSpec for SalaryPrediction {
    fn id(&self) -> &'static str {
        "salary"
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn response_schema(&self) -> Schema {
        Schema::object(vec![
            (
                "role",
                Schema::string_desc("The target job role being analyzed."),
            ),
            (
                "location",
                Schema::string_desc(
                    "The location (e.g., 'San Francisco, CA' or 'Remote, USA') for the salary estimate.",
                ),
            ),
            (
                "estimated_salary_range",
                Schema::object(vec![
                    (
                        "min",
                        Schema::number_desc("The lower end of the estimated salary range."),
                    ),
                    (
                        "average",
                        Schema::number_desc("The average or median estimated salary."),
                    ),
                    (
                        "max",
                        Schema::number_desc("The higher end of the estimated salary range."),
                    ),
                ]),
            ),
            (
                "justification",
                Schema::string_desc(
                    "A brief narrative explaining the rationale behind the salary estimate.",
                ),
            ),
            (
                "skills_impacting_salary",
                Schema::string_array_desc(
                    "A list of key skills from the user's profile that significantly influence their earning potential for this role.",
                ),
            ),
            (
                "recommendations_to_increase_salary",
                Schema::string_array_desc(
                    "A list of actionable recommendations for the user to increase their salary.",
                ),
            ),
        ])
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["target_role", "profile"]
    }

    fn missing_input_message(&self) -> &'static str {
        "Please provide a target role and a professional background."
    }

    fn build_prompt(&self, session: &ToolSession) -> String {
        let location = session.field("location");
        let location = if location.trim().is_empty() {
            "Not specified"
        } else {
            location
        };
        format!(
            "Target Role: {}\nLocation: {}\nProfessional Profile / Resume:\n{}",
            session.field("target_role"),
            location,
            session.field("profile"),
        )
    }

    fn failure_message(&self) -> &'static str {
        "An error occurred while predicting the salary. Please try again."
    }

    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError> {
        let result: SalaryPredictionResult = typed_result(self.id(), result)?;
        let range = &result.estimated_salary_range;
        let marker = average_marker_position(range.min, range.average, range.max);

        Ok(vec![
            Panel::new("Your Salary Estimate")
                .line(format!("For a {} in {}.", result.role, result.location))
                .line(format!(
                    "Range: {} – {}",
                    format_currency(range.min),
                    format_currency(range.max)
                ))
                .line(format!(
                    "Average: {} (marker at {marker:.1}%)",
                    format_currency(range.average)
                )),
            Panel::new("Justification").line(result.justification),
            Panel::new("Skills Impacting Salary").bullets(&result.skills_impacting_salary),
            Panel::new("How to Increase Your Salary")
                .bullets(&result.recommendations_to_increase_salary),
        ])
    }
}
