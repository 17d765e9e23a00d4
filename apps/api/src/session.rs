//! Per-tool analysis session — one request/response cycle.
//!
//! A session holds the draft input fields and the lifecycle state machine:
//!
//! ```text
//! idle --submit(valid input)--> submitting
//! idle --submit(invalid input)--> idle (error_message set, no network call)
//! submitting --success--> succeeded
//! submitting --failure--> failed
//! succeeded --reset--> idle
//! failed --reset--> idle
//! ```
//!
//! Sessions are never persisted; they live in memory for the duration of one
//! submission. Input is editable only in `idle` and frozen while a request is
//! in flight. At most one of `result`/`error_message` is set outside
//! `idle`/`submitting`. Reset retains the draft input and clears everything
//! else.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle state of a session. `Idle` is both the initial state and
/// reachable from every other state via reset; no state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input fields are frozen while a submission is in flight")]
    InputFrozen,

    #[error("a submission is already in flight for this session")]
    AlreadySubmitting,

    #[error("invalid transition from {0:?}")]
    InvalidTransition(Lifecycle),
}

/// One analysis request/response cycle for a single tool instance.
#[derive(Debug, Clone)]
pub struct ToolSession {
    pub id: Uuid,
    pub tool_id: String,
    pub created_at: DateTime<Utc>,
    input: HashMap<String, String>,
    lifecycle: Lifecycle,
    result: Option<Value>,
    error_message: Option<String>,
}

impl ToolSession {
    pub fn new(tool_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool_id: tool_id.to_string(),
            created_at: Utc::now(),
            input: HashMap::new(),
            lifecycle: Lifecycle::Idle,
            result: None,
            error_message: None,
        }
    }

    pub fn with_input(tool_id: &str, input: HashMap<String, String>) -> Self {
        let mut session = Self::new(tool_id);
        session.input = input;
        session
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns a field value, or the empty string when the field is absent.
    pub fn field(&self, name: &str) -> &str {
        self.input.get(name).map(String::as_str).unwrap_or("")
    }

    /// True when the field is absent or whitespace-only.
    pub fn is_blank(&self, name: &str) -> bool {
        self.field(name).trim().is_empty()
    }

    /// Edits a draft field. Rejected outside `idle` — input is frozen while a
    /// request is in flight and results are read-only.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Idle {
            return Err(SessionError::InputFrozen);
        }
        self.input.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Records a local validation failure: the message is shown, the session
    /// stays `idle`, and no network call happens.
    pub fn reject(&mut self, message: &str) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Idle {
            return Err(SessionError::InvalidTransition(self.lifecycle));
        }
        self.error_message = Some(message.to_string());
        Ok(())
    }

    /// `idle → submitting`. A second submit while one is in flight is
    /// rejected, which is what keeps submissions to one network call each.
    pub fn begin_submit(&mut self) -> Result<(), SessionError> {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.lifecycle = Lifecycle::Submitting;
                self.error_message = None;
                Ok(())
            }
            Lifecycle::Submitting => Err(SessionError::AlreadySubmitting),
            state => Err(SessionError::InvalidTransition(state)),
        }
    }

    /// `submitting → succeeded`. The result is immutable once stored.
    pub fn resolve(&mut self, result: Value) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Submitting {
            return Err(SessionError::InvalidTransition(self.lifecycle));
        }
        self.lifecycle = Lifecycle::Succeeded;
        self.result = Some(result);
        self.error_message = None;
        Ok(())
    }

    /// `submitting → failed`.
    pub fn fail(&mut self, message: &str) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Submitting {
            return Err(SessionError::InvalidTransition(self.lifecycle));
        }
        self.lifecycle = Lifecycle::Failed;
        self.error_message = Some(message.to_string());
        self.result = None;
        Ok(())
    }

    /// Returns to `idle` from any state, clearing result and error. Draft
    /// input is retained so the user can tweak and resubmit.
    pub fn reset(&mut self) {
        self.lifecycle = Lifecycle::Idle;
        self.result = None;
        self.error_message = None;
    }
}
