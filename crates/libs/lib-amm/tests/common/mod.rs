//! Stub AMM service for integration tests.
//!
//! Each stub listens on an ephemeral localhost port, records every request it
//! receives and answers with a configured reply.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const QUOTE_BODY: &str =
    r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":10.0,"amountOut":9.5,"fee":0.05}"#;

pub const SWAP_BODY: &str = r#"{"transactionId":"abc123","status":"submitted","submittedAt":"2024-01-01T00:00:00Z","message":"Swap created"}"#;

/// How the stub answers.
#[derive(Clone, Debug)]
pub enum Reply {
    /// Fixed status and body, sent after `delay`.
    Fixed {
        status: u16,
        body: Vec<u8>,
        delay: Duration,
    },
    /// Quote computed from the request: `amountOut = amount * 2`, no fee.
    EchoQuote,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::bytes(status, body.as_bytes())
    }

    /// Body sent byte for byte, whether or not it is valid UTF-8.
    pub fn bytes(status: u16, body: &[u8]) -> Self {
        Reply::Fixed {
            status,
            body: body.to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(status: u16, body: &str, delay: Duration) -> Self {
        Reply::Fixed {
            status,
            body: body.as_bytes().to_vec(),
            delay,
        }
    }
}

/// One request as seen by the stub.
#[derive(Clone, Debug)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    captured: Arc<Mutex<Vec<Captured>>>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

/// Start a stub on the current Tokio runtime.
pub async fn spawn_stub(reply: Reply) -> StubServer {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply,
        captured: Arc::clone(&captured),
    };

    let app = Router::new().fallback(handle).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer { addr, captured }
}

/// Address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn handle(
    State(state): State<StubState>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let captured = Captured {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    };
    state.captured.lock().unwrap().push(captured);

    match state.reply {
        Reply::Fixed { status, body, delay } => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let status = StatusCode::from_u16(status).unwrap();
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Reply::EchoQuote => {
            let request: Value = serde_json::from_str(&body).unwrap();
            let amount = request["amount"].as_f64().unwrap();
            let reply = json!({
                "fromAsset": request["fromAsset"],
                "toAsset": request["toAsset"],
                "amountIn": amount,
                "amountOut": amount * 2.0,
                "fee": 0.0,
            });
            (StatusCode::OK, axum::Json(reply)).into_response()
        }
    }
}
