use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// A stand-in Readwise save API. Records every request it receives and
/// answers with a configurable status, body and optional delay.
pub struct ReadwiseMock {
    /// Full URL of the mock save endpoint
    pub url: String,
    state: Arc<MockState>,
}

#[derive(Clone)]
pub struct RecordedSave {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockBehaviour {
    status: StatusCode,
    body: Value,
    delay: Option<Duration>,
}

struct MockState {
    requests: Mutex<Vec<RecordedSave>>,
    behaviour: Mutex<MockBehaviour>,
}

impl ReadwiseMock {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState {
            requests: Mutex::new(Vec::new()),
            behaviour: Mutex::new(MockBehaviour {
                status: StatusCode::OK,
                body: json!({"id": 1, "url": "https://read.readwise.io/read/01"}),
                delay: None,
            }),
        });

        let app = Router::new()
            .route("/api/v3/save/", post(handle_save))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/api/v3/save/", addr),
            state,
        }
    }

    /// Make the mock answer every save call with this status and body
    pub fn respond_with(&self, status: StatusCode, body: Value) {
        let mut behaviour = self.state.behaviour.lock().unwrap();
        behaviour.status = status;
        behaviour.body = body;
    }

    /// Make the mock sit on every save call for this long before answering
    pub fn delay_responses(&self, delay: Duration) {
        self.state.behaviour.lock().unwrap().delay = Some(delay);
    }

    pub fn recorded_saves(&self) -> Vec<RecordedSave> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle_save(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedSave {
            authorization,
            body,
        });

    let (status, body, delay) = {
        let behaviour = state.behaviour.lock().unwrap();
        (behaviour.status, behaviour.body.clone(), behaviour.delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    (status, Json(body))
}
