//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Response, Uri};
use axum::Router;
use tokio::net::TcpListener;

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    #[allow(dead_code)]
    pub query: Option<String>,
    #[allow(dead_code)]
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// What the mock backend answers with.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Option<String>,
    pub headers: Vec<(&'static str, String)>,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
            headers: vec![("content-type", "application/json".to_string())],
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: None,
            headers: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

type Responder = dyn Fn(&CapturedRequest) -> MockResponse + Send + Sync;

struct BackendState {
    respond: Box<Responder>,
    captured: Mutex<Vec<CapturedRequest>>,
}

/// Handle to a running mock backend.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: Arc<BackendState>,
}

impl MockBackend {
    /// Base URL in the `http://host:port/v0` shape the client expects.
    pub fn base_url(&self) -> String {
        format!("http://{}/v0", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests().pop().expect("backend received no request")
    }
}

/// Start a backend that always returns the same response.
#[allow(dead_code)]
pub async fn start_mock_backend(response: MockResponse) -> MockBackend {
    start_programmable_backend(move |_| response.clone()).await
}

/// Start a programmable mock backend on an ephemeral port.
pub async fn start_programmable_backend<F>(respond: F) -> MockBackend
where
    F: Fn(&CapturedRequest) -> MockResponse + Send + Sync + 'static,
{
    let state = Arc::new(BackendState {
        respond: Box::new(respond),
        captured: Mutex::new(Vec::new()),
    });

    let app = Router::new().fallback(capture).with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { addr, state }
}

async fn capture(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response<Body> {
    let request = CapturedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    };

    let reply = (state.respond)(&request);
    state.captured.lock().unwrap().push(request);

    let mut builder = Response::builder().status(reply.status);
    for (name, value) in &reply.headers {
        builder = builder.header(*name, value.as_str());
    }
    let body = match reply.body {
        Some(text) => Body::from(text),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}
