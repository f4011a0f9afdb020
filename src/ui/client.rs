use std::sync::Arc;
use std::time::Duration;

use crate::services::activities_api_service::ActivitiesApi;
use crate::ui::notifier::MessageNotifier;
use crate::ui::page::{shared_page, Page, SharedPage};
use crate::ui::removal::RemovalController;
use crate::ui::renderer::ActivityRenderer;
use crate::ui::signup::SignupController;

/// One sign-up page: the page model plus the components acting on it.
///
/// There is a single page per client, not one per visitor. Everyone served by
/// the same instance sees the same form values, message and delete modal, and a
/// confirm sends whatever removal is pending, whoever opened it.
pub struct ActivitiesClient {
    api: Arc<dyn ActivitiesApi>,
    page: SharedPage,
    renderer: Arc<ActivityRenderer>,
    pub signup: SignupController,
    pub removal: RemovalController,
}

impl ActivitiesClient {
    pub fn new(api: Arc<dyn ActivitiesApi>, hide_after: Duration) -> Self {
        let page = shared_page();
        let renderer = Arc::new(ActivityRenderer::new());
        let notifier = MessageNotifier::new(page.clone(), hide_after);
        Self {
            signup: SignupController::new(
                api.clone(),
                page.clone(),
                notifier.clone(),
                renderer.clone(),
            ),
            removal: RemovalController::new(api.clone(), page.clone(), notifier, renderer.clone()),
            api,
            page,
            renderer,
        }
    }

    /// Fetches and renders everything; what the page does when it first opens.
    pub async fn load(&self) {
        self.renderer.refresh(self.api.as_ref(), &self.page).await;
    }

    /// Loads only if nothing has been fetched yet.
    pub async fn ensure_loaded(&self) {
        let loaded = self.page.lock().await.loaded;
        if !loaded {
            self.load().await;
        }
    }

    pub async fn snapshot(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub fn renderer(&self) -> &ActivityRenderer {
        &self.renderer
    }
}
