//! In-memory `ActivitiesApi` for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::StatusCode;
use tokio::sync::Notify;

use crate::models::{ActivityBoard, CommandReply, ReplyBody};
use crate::services::activities_api_service::{ActivitiesApi, ApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Scripted reply for a command; `None` simulates a transport failure.
pub type Scripted = Option<CommandReply>;

#[derive(Default)]
pub struct FakeApi {
    board: Mutex<Option<ActivityBoard>>,
    replies: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<Call>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeApi {
    pub fn with_board(board: ActivityBoard) -> Self {
        let api = Self::default();
        *api.board.lock().unwrap() = Some(board);
        api
    }

    pub fn fail_listing(&self) {
        *self.board.lock().unwrap() = None;
    }

    pub fn set_board(&self, board: ActivityBoard) {
        *self.board.lock().unwrap() = Some(board);
    }

    pub fn push_reply(&self, reply: Scripted) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Commands block until the returned handle is notified.
    pub fn hold_commands(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(*c)).count()
    }

    async fn command(&self, call: Call) -> Result<CommandReply, ApiError> {
        self.calls.lock().unwrap().push(call);
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let scripted = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Some(reply(StatusCode::OK, None, None)));
        scripted.ok_or_else(unreachable_backend)
    }
}

/// A genuine transport error: reqwest refuses to build a request for a bad URL,
/// which yields the same `reqwest::Error` type a dropped connection does.
fn unreachable_backend() -> ApiError {
    let source = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("an invalid URL cannot become a request");
    ApiError::Transport {
        url: "fake://activities".to_string(),
        source,
    }
}

pub fn reply(status: StatusCode, message: Option<&str>, detail: Option<&str>) -> CommandReply {
    CommandReply {
        status,
        body: Some(ReplyBody {
            message: message.map(str::to_string),
            detail: detail.map(|d| serde_json::Value::String(d.to_string())),
        }),
    }
}

#[async_trait]
impl ActivitiesApi for FakeApi {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError> {
        self.calls.lock().unwrap().push(Call::List);
        self.board
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(unreachable_backend)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError> {
        self.command(Call::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        })
        .await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError> {
        self.command(Call::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        })
        .await
    }
}
