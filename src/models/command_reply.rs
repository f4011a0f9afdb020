use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Body of a signup/unregister response: `{message}` on success, `{detail}` on failure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    // FastAPI validation errors send `detail` as a list; keep it raw.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ReplyBody {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// The server detail, only when it is a non-empty string.
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
    }
}

/// Outcome of a command that reached the server. `body` is `None` when the
/// response carried no parsable JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub status: StatusCode,
    pub body: Option<ReplyBody>,
}

impl CommandReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn message(&self) -> Option<&str> {
        self.body.as_ref().and_then(ReplyBody::message)
    }

    pub fn detail(&self) -> Option<&str> {
        self.body.as_ref().and_then(ReplyBody::detail)
    }
}
