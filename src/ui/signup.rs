use std::sync::Arc;

use tracing::{error, info, warn};

use crate::services::activities_api_service::ActivitiesApi;
use crate::ui::notifier::MessageNotifier;
use crate::ui::page::{MessageKind, SharedPage};
use crate::ui::renderer::ActivityRenderer;

pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_ERROR_FALLBACK: &str = "An error occurred";
pub const SIGNUP_SUCCESS_FALLBACK: &str = "Signed up successfully";

pub struct SignupController {
    api: Arc<dyn ActivitiesApi>,
    page: SharedPage,
    notifier: MessageNotifier,
    renderer: Arc<ActivityRenderer>,
}

impl SignupController {
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
        }
    }

    /// Signs `email` up for `activity`. Both values go to the server as typed;
    /// capacity and duplicates are the server's call.
    pub async fn submit(&self, activity: &str, email: &str) {
        {
            let mut page = self.page.lock().await;
            page.signup_form.activity = activity.to_string();
            page.signup_form.email = email.to_string();
        }

        let reply = match self.api.signup(activity, email).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error signing up: {}", e);
                self.notifier.show(SIGNUP_FAILED, MessageKind::Error).await;
                return;
            }
        };

        // A reply without a JSON body counts as a failed request.
        if reply.body.is_none() {
            error!(status = %reply.status, "Error signing up: unreadable response body");
            self.notifier.show(SIGNUP_FAILED, MessageKind::Error).await;
            return;
        }

        if reply.is_success() {
            info!(activity, email, "signed up");
            let text = reply.message().unwrap_or(SIGNUP_SUCCESS_FALLBACK).to_string();
            self.notifier.show(text, MessageKind::Success).await;
            self.page.lock().await.signup_form.reset();
            self.renderer.refresh(self.api.as_ref(), &self.page).await;
        } else {
            warn!(status = %reply.status, activity, email, "signup rejected");
            let text = reply.detail().unwrap_or(SIGNUP_ERROR_FALLBACK).to_string();
            self.notifier.show(text, MessageKind::Error).await;
        }
    }
}
