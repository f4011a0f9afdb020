use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::models::PendingRemoval;
use crate::services::activities_api_service::ActivitiesApi;
use crate::ui::notifier::MessageNotifier;
use crate::ui::page::{MessageKind, SharedPage};
use crate::ui::renderer::ActivityRenderer;

pub const REMOVED_FALLBACK: &str = "Participant removed";
pub const REMOVE_FAILED: &str = "Failed to remove participant";

/// Confirm-before-delete flow for participant removal.
///
/// Idle: nothing pending, modal hidden. Confirming: one removal pending, modal shown.
pub struct RemovalController {
    api: Arc<dyn ActivitiesApi>,
    page: SharedPage,
    notifier: MessageNotifier,
    renderer: Arc<ActivityRenderer>,
    pending: Mutex<Option<PendingRemoval>>,
}

impl RemovalController {
    pub fn new(
        api: Arc<dyn ActivitiesApi>,
        page: SharedPage,
        notifier: MessageNotifier,
        renderer: Arc<ActivityRenderer>,
    ) -> Self {
        Self {
            api,
            page,
            notifier,
            renderer,
            pending: Mutex::new(None),
        }
    }

    /// A remove button was pressed. Ignored unless both identifiers are present;
    /// a newer request replaces one still waiting for confirmation.
    pub async fn request(&self, activity: &str, email: &str) {
        if activity.is_empty() || email.is_empty() {
            debug!("remove requested without activity or email");
            return;
        }

        *self.pending.lock().await = Some(PendingRemoval {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.page
            .lock()
            .await
            .delete_modal
            .open(format!("Remove {} from {}?", email, activity));
    }

    pub async fn cancel(&self) {
        if self.pending.lock().await.take().is_none() {
            return;
        }
        self.page.lock().await.delete_modal.close();
    }

    /// Sends the pending removal. The modal closes before the request goes out,
    /// so a second confirm finds nothing pending.
    pub async fn confirm(&self) {
        let Some(PendingRemoval { activity, email }) = self.pending.lock().await.take() else {
            return;
        };
        self.page.lock().await.delete_modal.close();

        let reply = match self.api.unregister(&activity, &email).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error removing participant: {}", e);
                self.notifier.show(REMOVE_FAILED, MessageKind::Error).await;
                return;
            }
        };

        if reply.is_success() {
            info!(activity = %activity, email = %email, "participant removed");
            let text = reply.message().unwrap_or(REMOVED_FALLBACK).to_string();
            self.notifier.show(text, MessageKind::Success).await;
            self.renderer.refresh(self.api.as_ref(), &self.page).await;
        } else {
            warn!(status = %reply.status, activity = %activity, email = %email, "removal rejected");
            let text = reply.detail().unwrap_or(REMOVE_FAILED).to_string();
            self.notifier.show(text, MessageKind::Error).await;
        }
    }

    pub async fn pending(&self) -> Option<PendingRemoval> {
        self.pending.lock().await.clone()
    }
}
