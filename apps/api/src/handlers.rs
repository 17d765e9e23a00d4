use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::features::{self, Feature};
use crate::integrations::{sample_linkedin_profile, LinkedInProfile};
use crate::orchestrator;
use crate::render::Panel;
use crate::session::{Lifecycle, ToolSession};
use crate::state::AppState;
use crate::tools;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Tool input fields, keyed by field name. Missing fields read as blank.
    #[serde(default)]
    pub input: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub tool_id: String,
    pub lifecycle: Lifecycle,
    pub result: Value,
    pub panels: Vec<Panel>,
}

/// GET /api/v1/features
pub async fn handle_list_features() -> Json<&'static [Feature]> {
    Json(features::FEATURES)
}

/// POST /api/v1/tools/:id/analyze
///
/// Runs one full submission cycle for the named tool. Each request gets a
/// fresh session; local rejections and generation failures surface through
/// the error taxonomy, so a body is only returned for succeeded sessions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(tool_id): Path<String>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let tool = tools::find(&tool_id).ok_or_else(|| AppError::UnknownTool(tool_id.clone()))?;

    let mut session = ToolSession::with_input(&tool_id, req.input);
    orchestrator::run(tool, &mut session, state.llm.as_ref()).await?;

    let result = session
        .result()
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("succeeded session has no result")))?;
    let panels = tool.render(&result)?;

    Ok(Json(AnalyzeResponse {
        session_id: session.id,
        tool_id,
        lifecycle: session.lifecycle(),
        result,
        panels,
    }))
}

/// GET /api/v1/integrations/linkedin/profile
///
/// Canned connector: returns the sample profile with no external call.
pub async fn handle_linkedin_profile() -> Json<LinkedInProfile> {
    Json(sample_linkedin_profile())
}
