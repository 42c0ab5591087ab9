//! A throwaway approval service for exercising the HTTP paths.
//!
//! Each server is an axum app on 127.0.0.1 that answers every route with one
//! canned response, hands the request it saw back through a oneshot channel,
//! and shuts down once that request is done. It runs on its own thread and
//! runtime so it works the same from sync tests, `#[tokio::test]`, and
//! subprocess tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::oneshot;

/// What the server saw.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        self.body.clone().expect("request body should be JSON")
    }
}

#[derive(Clone)]
struct Script {
    status: StatusCode,
    body: String,
    hold: Option<Duration>,
    seen: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
}

async fn answer(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Response {
    let captured = CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body: body.map(|Json(value)| value),
    };
    let sender = script.seen.lock().unwrap().take();
    if let Some(tx) = sender {
        let _ = tx.send(captured);
    }

    if let Some(hold) = script.hold {
        tokio::time::sleep(hold).await;
    }

    (
        script.status,
        [(header::CONTENT_TYPE, "application/json")],
        script.body,
    )
        .into_response()
}

pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    /// Answer the first request with `status` and `body`.
    pub fn respond(status: u16, body: &str) -> Self {
        Self::start(
            StatusCode::from_u16(status).unwrap(),
            body.to_string(),
            None,
        )
    }

    /// Take the request, then say nothing for `hold`.
    pub fn stall(hold: Duration) -> Self {
        Self::start(StatusCode::OK, "{}".to_string(), Some(hold))
    }

    fn start(status: StatusCode, body: String, hold: Option<Duration>) -> Self {
        // Bind before returning so the URL is live as soon as the caller has it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}/api/hook/ask", listener.local_addr().unwrap());

        let (tx, rx) = oneshot::channel();
        let script = Script {
            status,
            body,
            hold,
            seen: Arc::new(Mutex::new(Some(tx))),
        };

        let handle = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                let router = Router::new().fallback(answer).with_state(script);

                let captured = Arc::new(Mutex::new(None));
                let slot = captured.clone();
                axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        if let Ok(request) = rx.await {
                            *slot.lock().unwrap() = Some(request);
                        }
                    })
                    .await
                    .unwrap();

                let request = captured.lock().unwrap().take();
                request.unwrap_or_default()
            })
        });

        Self { url, handle }
    }

    /// The request the server received. Blocks until the server has shut down.
    pub fn captured(self) -> CapturedRequest {
        self.handle.join().expect("server thread panicked")
    }
}

/// A URL on a port nobody is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/hook/ask", addr)
}
