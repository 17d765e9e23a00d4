//! Tool specifications — one structured-generation contract per CareerOS tool.
//!
//! Every tool is the same orchestration pattern parameterized differently:
//! a fixed system instruction, a response-schema descriptor, a deterministic
//! prompt built from labeled input sections, and a renderer for the validated
//! result. All generation calls go through `llm_client` — no tool talks to
//! the API directly.

pub mod assessment;
pub mod enterprise;
pub mod interview;
pub mod job_matching;
pub mod marketplace;
pub mod mobility;
pub mod resume;
pub mod salary;
pub mod skills_analytics;
pub mod upskilling;

use serde_json::Value;

use crate::errors::AppError;
use crate::render::Panel;
use crate::schema::Schema;
use crate::session::ToolSession;

/// One tool's generation contract. Implementations are stateless units; all
/// per-submission state lives in the `ToolSession`.
pub trait ToolSpec: Send + Sync {
    /// Feature-registry id of this tool.
    fn id(&self) -> &'static str;

    /// Fixed system instruction sent with every request.
    fn system_instruction(&self) -> &'static str;

    /// Response-schema descriptor, both sent on the wire and re-checked
    /// against the returned document.
    fn response_schema(&self) -> Schema;

    /// Input fields that must be non-blank before a submission leaves `idle`.
    fn required_fields(&self) -> &'static [&'static str];

    /// Message shown when a required field is blank.
    fn missing_input_message(&self) -> &'static str;

    /// Extra local check before any network call (e.g. JSON syntax of
    /// structured input). The returned string is the user-facing rejection.
    fn preflight(&self, _session: &ToolSession) -> Result<(), String> {
        Ok(())
    }

    /// Deterministic, order-preserving concatenation of labeled input
    /// sections into the outbound prompt.
    fn build_prompt(&self, session: &ToolSession) -> String;

    /// Generic "please try again" message for this tool's failed submissions.
    fn failure_message(&self) -> &'static str;

    /// Pure result → panels view of a validated response.
    fn render(&self, result: &Value) -> Result<Vec<Panel>, AppError>;
}

/// Static tool table, keyed by feature id. The `api` feature is a canned
/// integration, not a generation tool, so it does not appear here.
pub static TOOLS: &[&dyn ToolSpec] = &[
    &assessment::CareerAssessment,
    &resume::ResumeGenerator,
    &job_matching::JobMatching,
    &interview::InterviewAnalyzer,
    &salary::SalaryPrediction,
    &upskilling::PersonalizedUpskilling,
    &enterprise::EnterpriseDashboard,
    &skills_analytics::SkillsAnalytics,
    &mobility::TalentMobility,
    &marketplace::CareerMarketplace,
];

pub fn find(id: &str) -> Option<&'static dyn ToolSpec> {
    TOOLS.iter().copied().find(|tool| tool.id() == id)
}

/// Deserializes a validated result into a tool's typed model. Schema
/// validation runs first, so a failure here is a programming error.
pub(crate) fn typed_result<T: serde::de::DeserializeOwned>(
    tool_id: &str,
    result: &Value,
) -> Result<T, AppError> {
    serde_json::from_value(result.clone()).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Validated {tool_id} result did not match its typed model: {e}"
        ))
    })
}
