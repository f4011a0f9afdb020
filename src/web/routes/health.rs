use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::ui::ActivitiesClient;
use crate::web::BUILD_ID;

pub async fn health_handler(State(client): State<Arc<ActivitiesClient>>) -> Json<Value> {
    let activities = client.renderer().board().await.map(|b| b.len());
    Json(serde_json::json!({
        "status": "ok",
        "build_id": BUILD_ID,
        "activities": activities,
    }))
}
