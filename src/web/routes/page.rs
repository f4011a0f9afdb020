use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use crate::ui::{ActivitiesClient, Page};
use crate::web::BUILD_ID;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Page,
    pub build_id: &'static str,
}

pub async fn index_handler(State(client): State<Arc<ActivitiesClient>>) -> Response {
    client.ensure_loaded().await;

    let template = IndexTemplate {
        page: client.snapshot().await,
        build_id: BUILD_ID,
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Rendering sign-up page failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// Browsers omit empty selects in some cases; missing fields arrive as "".
#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
}

pub async fn signup_handler(
    State(client): State<Arc<ActivitiesClient>>,
    Form(form): Form<ParticipantForm>,
) -> Redirect {
    client.signup.submit(&form.activity, &form.email).await;
    Redirect::to("/")
}

pub async fn remove_request_handler(
    State(client): State<Arc<ActivitiesClient>>,
    Form(form): Form<ParticipantForm>,
) -> Redirect {
    client.removal.request(&form.activity, &form.email).await;
    Redirect::to("/")
}

pub async fn remove_cancel_handler(State(client): State<Arc<ActivitiesClient>>) -> Redirect {
    client.removal.cancel().await;
    Redirect::to("/")
}

pub async fn remove_confirm_handler(State(client): State<Arc<ActivitiesClient>>) -> Redirect {
    client.removal.confirm().await;
    Redirect::to("/")
}

pub async fn refresh_handler(State(client): State<Arc<ActivitiesClient>>) -> Redirect {
    client.load().await;
    Redirect::to("/")
}
