use std::time::Duration;

use crate::ui::page::{MessageKind, SharedPage};

pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_millis(5000);

/// Status line under the sign-up form.
#[derive(Clone)]
pub struct MessageNotifier {
    page: SharedPage,
    hide_after: Duration,
}

impl MessageNotifier {
    pub fn new(page: SharedPage, hide_after: Duration) -> Self {
        Self { page, hide_after }
    }

    /// Shows `text` and schedules it to hide. Earlier timers are not cancelled;
    /// whichever fires leaves the message hidden.
    pub async fn show(&self, text: impl Into<String>, kind: MessageKind) {
        {
            let mut page = self.page.lock().await;
            page.message.text = text.into();
            page.message.kind = Some(kind);
            page.message.hidden = false;
        }

        let page = self.page.clone();
        let hide_after = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            page.lock().await.message.hidden = true;
        });
    }
}
