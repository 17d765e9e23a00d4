//! Submission orchestrator — drives one analysis cycle end to end.
//!
//! Every tool submission follows the same sequence: local input checks,
//! `idle → submitting`, exactly one generation call, parse, schema check,
//! then `succeeded` or `failed`. Local rejections (blank required fields,
//! malformed structured input) never leave `idle` and never reach the
//! network.

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, GenerationBackend, GenerationRequest};
use crate::session::{SessionError, ToolSession};
use crate::tools::ToolSpec;

fn transition_failed(err: SessionError) -> AppError {
    AppError::Internal(anyhow::anyhow!("session transition failed: {err}"))
}

/// Runs one submission for `tool` against `session`. On success the session
/// ends `succeeded` with the validated result stored; on generation-side
/// failure it ends `failed` with the tool's generic failure message. The
/// returned error carries the taxonomy kind for the HTTP layer.
pub async fn run(
    tool: &dyn ToolSpec,
    session: &mut ToolSession,
    backend: &dyn GenerationBackend,
) -> Result<(), AppError> {
    for &field in tool.required_fields() {
        if session.is_blank(field) {
            let message = tool.missing_input_message();
            session.reject(message).map_err(transition_failed)?;
            debug!(tool = tool.id(), field, "submission rejected: blank required field");
            return Err(AppError::Validation(message.to_string()));
        }
    }

    if let Err(message) = tool.preflight(session) {
        session.reject(&message).map_err(transition_failed)?;
        debug!(tool = tool.id(), "submission rejected in preflight");
        return Err(AppError::MalformedInput(message));
    }

    session.begin_submit().map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = tool.build_prompt(session);
    let schema = tool.response_schema();
    let request = GenerationRequest {
        prompt: &prompt,
        system_instruction: tool.system_instruction(),
        response_schema: &schema,
    };

    let text = match backend.generate(request).await {
        Ok(text) => text,
        Err(err) => {
            session.fail(tool.failure_message()).map_err(transition_failed)?;
            return Err(AppError::Generation {
                message: tool.failure_message().to_string(),
                detail: err.to_string(),
            });
        }
    };

    let result: Value = match serde_json::from_str(strip_json_fences(&text)) {
        Ok(value) => value,
        Err(err) => {
            session.fail(tool.failure_message()).map_err(transition_failed)?;
            return Err(AppError::ResponseShape {
                message: tool.failure_message().to_string(),
                detail: err.to_string(),
            });
        }
    };

    if let Err(violation) = schema.validate(&result) {
        session.fail(tool.failure_message()).map_err(transition_failed)?;
        return Err(AppError::ResponseSchema {
            message: tool.failure_message().to_string(),
            detail: violation.to_string(),
        });
    }

    session.resolve(result).map_err(transition_failed)?;
    info!(tool = tool.id(), session = %session.id, "submission succeeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::llm_client::LlmError;
    use crate::session::Lifecycle;
    use crate::tools;
    use crate::tools::enterprise::MALFORMED_DATA_MESSAGE;

    /// Canned backend that counts how often it is called.
    struct CannedBackend {
        body: Result<String, String>,
        calls: AtomicUsize,
    }

    impl CannedBackend {
        fn ok(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                body: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationBackend for CannedBackend {
        async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    fn canned_salary_body() -> String {
        json!({
            "role": "Senior Software Engineer",
            "location": "San Francisco, CA",
            "estimated_salary_range": { "min": 150000, "average": 180000, "max": 220000 },
            "justification": "Cloud and full-stack depth command a premium.",
            "skills_impacting_salary": ["AWS", "React"],
            "recommendations_to_increase_salary": ["Get an AWS certification"]
        })
        .to_string()
    }

    fn salary_session() -> ToolSession {
        let mut session = ToolSession::new("salary");
        session.set_field("target_role", "Senior Software Engineer").unwrap();
        session.set_field("profile", "10+ years of full-stack development.").unwrap();
        session
    }

    #[tokio::test]
    async fn test_successful_submission_makes_exactly_one_call() {
        let tool = tools::find("salary").unwrap();
        let backend = CannedBackend::ok(&canned_salary_body());
        let mut session = salary_session();

        run(tool, &mut session, &backend).await.unwrap();

        assert_eq!(backend.calls(), 1);
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
        assert!(session.error_message().is_none());
        assert_eq!(
            session.result().unwrap()["estimated_salary_range"]["average"],
            180000
        );
    }

    #[tokio::test]
    async fn test_blank_required_field_never_reaches_the_backend() {
        let tool = tools::find("salary").unwrap();
        let backend = CannedBackend::ok(&canned_salary_body());
        let mut session = ToolSession::new("salary");
        session.set_field("target_role", "   ").unwrap();
        session.set_field("profile", "10+ years of experience.").unwrap();

        let err = run(tool, &mut session, &backend).await.unwrap_err();

        assert_eq!(backend.calls(), 0);
        assert_eq!(session.lifecycle(), Lifecycle::Idle);
        assert_eq!(
            session.error_message(),
            Some("Please provide a target role and a professional background.")
        );
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_malformed_employee_json_is_rejected_before_submission() {
        let tool = tools::find("enterprise").unwrap();
        let backend = CannedBackend::ok("{}");
        let mut session = ToolSession::new("enterprise");
        session
            .set_field("employee_data", r#"[{"id":"E101","name":"Alice"},]"#)
            .unwrap();

        let err = run(tool, &mut session, &backend).await.unwrap_err();

        assert_eq!(backend.calls(), 0);
        assert_eq!(session.lifecycle(), Lifecycle::Idle);
        assert_eq!(session.error_message(), Some(MALFORMED_DATA_MESSAGE));
        assert!(matches!(err, AppError::MalformedInput(m) if m == MALFORMED_DATA_MESSAGE));
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_generic_message() {
        let tool = tools::find("salary").unwrap();
        let backend = CannedBackend::failing("Resource has been exhausted");
        let mut session = salary_session();

        let err = run(tool, &mut session, &backend).await.unwrap_err();

        assert_eq!(backend.calls(), 1);
        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        assert_eq!(
            session.error_message(),
            Some("An error occurred while predicting the salary. Please try again.")
        );
        // The raw backend detail never appears in the user-facing message.
        assert!(!session.error_message().unwrap().contains("exhausted"));
        match err {
            AppError::Generation { detail, .. } => assert!(detail.contains("exhausted")),
            other => panic!("expected Generation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_response_is_a_shape_error() {
        let tool = tools::find("salary").unwrap();
        let backend = CannedBackend::ok("I am sorry, I cannot help with that.");
        let mut session = salary_session();

        let err = run(tool, &mut session, &backend).await.unwrap_err();

        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        assert!(matches!(err, AppError::ResponseShape { .. }));
    }

    #[tokio::test]
    async fn test_fenced_json_response_is_accepted() {
        let tool = tools::find("salary").unwrap();
        let backend = CannedBackend::ok(&format!("```json\n{}\n```", canned_salary_body()));
        let mut session = salary_session();

        run(tool, &mut session, &backend).await.unwrap();
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
    }

    #[tokio::test]
    async fn test_schema_violation_is_distinct_from_transport_failure() {
        let tool = tools::find("salary").unwrap();
        // Valid JSON, wrong shape: the range is missing 'average'.
        let backend = CannedBackend::ok(
            &json!({
                "role": "Senior Software Engineer",
                "location": "SF",
                "estimated_salary_range": { "min": 150000, "max": 220000 },
                "justification": "…",
                "skills_impacting_salary": [],
                "recommendations_to_increase_salary": []
            })
            .to_string(),
        );
        let mut session = salary_session();

        let err = run(tool, &mut session, &backend).await.unwrap_err();

        assert_eq!(session.lifecycle(), Lifecycle::Failed);
        match err {
            AppError::ResponseSchema { detail, .. } => {
                assert!(detail.contains("$.estimated_salary_range"));
            }
            other => panic!("expected ResponseSchema, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_after_failure_allows_resubmission() {
        let tool = tools::find("salary").unwrap();
        let failing = CannedBackend::failing("boom");
        let mut session = salary_session();
        run(tool, &mut session, &failing).await.unwrap_err();
        assert_eq!(session.lifecycle(), Lifecycle::Failed);

        session.reset();
        let working = CannedBackend::ok(&canned_salary_body());
        run(tool, &mut session, &working).await.unwrap();
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(working.calls(), 1);
    }

    #[tokio::test]
    async fn test_resume_submits_with_entirely_blank_input() {
        let tool = tools::find("resume").unwrap();
        let backend = CannedBackend::ok(
            &json!({ "text_resume": "JANE DOE", "html_resume": "<html></html>" }).to_string(),
        );
        let mut session = ToolSession::new("resume");

        run(tool, &mut session, &backend).await.unwrap();
        assert_eq!(backend.calls(), 1);
        assert_eq!(session.lifecycle(), Lifecycle::Succeeded);
    }
}
