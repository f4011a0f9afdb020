//! Stub activities API served on an ephemeral port.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Email that makes the stub answer a removal with a bodiless 500.
pub const BROKEN_EMAIL: &str = "broken@mergington.edu";

#[derive(Clone, Default)]
pub struct StubBackend {
    pub activities: Arc<Mutex<Map<String, Value>>>,
    pub signups: Arc<AtomicUsize>,
    pub removals: Arc<AtomicUsize>,
    pub listings: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut map = backend.activities.lock().unwrap();
            map.insert(
                "Chess Club".to_string(),
                json!({
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 12,
                    "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
                }),
            );
            map.insert(
                "Art Workshop".to_string(),
                json!({
                    "description": "Painting, drawing & mixed-media projects",
                    "schedule": "Wednesdays, 4:00 PM - 6:00 PM",
                    "max_participants": 1,
                    "participants": []
                }),
            );
        }
        backend
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .lock()
            .unwrap()
            .get(activity)
            .and_then(|a| a.get("participants"))
            .and_then(|p| p.as_array())
            .map(|p| {
                p.iter()
                    .filter_map(|e| e.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn detail(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

async fn list(State(backend): State<StubBackend>) -> Json<Value> {
    backend.listings.fetch_add(1, Ordering::SeqCst);
    Json(Value::Object(backend.activities.lock().unwrap().clone()))
}

async fn signup(
    State(backend): State<StubBackend>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Response {
    backend.signups.fetch_add(1, Ordering::SeqCst);
    let mut map = backend.activities.lock().unwrap();
    let Some(activity) = map.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    let max = activity["max_participants"].as_u64().unwrap_or(0) as usize;
    let participants = activity["participants"].as_array_mut().unwrap();
    if participants.iter().any(|p| p.as_str() == Some(q.email.as_str())) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }
    if participants.len() >= max {
        return detail(StatusCode::BAD_REQUEST, "Activity is full");
    }
    participants.push(Value::String(q.email.clone()));
    Json(json!({ "message": format!("Signed up {} for {}", q.email, name) })).into_response()
}

async fn unregister(
    State(backend): State<StubBackend>,
    Path(name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Response {
    backend.removals.fetch_add(1, Ordering::SeqCst);
    if q.email == BROKEN_EMAIL {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut map = backend.activities.lock().unwrap();
    let Some(activity) = map.get_mut(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    let participants = activity["participants"].as_array_mut().unwrap();
    let Some(idx) = participants
        .iter()
        .position(|p| p.as_str() == Some(q.email.as_str()))
    else {
        return detail(StatusCode::NOT_FOUND, "Participant not found");
    };
    participants.remove(idx);
    Json(json!({ "message": format!("Removed {} from {}", q.email, name) })).into_response()
}

pub async fn spawn_backend(backend: StubBackend) -> SocketAddr {
    let app = Router::new()
        .route("/activities", get(list))
        .route("/activities/:name/signup", post(signup).delete(unregister))
        .with_state(backend);
    serve(app).await
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Accepts connections and never answers on them.
pub async fn stalled_backend() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}

/// An address nothing listens on.
pub async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
