//! In-process stub of the Finmate API used by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::sync::oneshot;

use finmate_api::ApiClient;

/// One request as seen by the stub.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct StubState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn only_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url, Duration::from_secs(5)).expect("client")
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> ApiClient {
        ApiClient::with_base_url(&self.base_url, timeout).expect("client")
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(CapturedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: header_value(&headers, header::AUTHORIZATION),
            accept: header_value(&headers, header::ACCEPT),
            content_type: header_value(&headers, header::CONTENT_TYPE),
            body,
        });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Starts a stub answering every request with `status` and `body`.
pub async fn spawn_stub(status: u16, body: &str) -> StubServer {
    spawn_stub_with_delay(status, body, None).await
}

pub async fn spawn_stub_with_delay(status: u16, body: &str, delay: Option<Duration>) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(StubState {
        status: StatusCode::from_u16(status).expect("status"),
        body: body.to_string(),
        delay,
        requests: Arc::clone(&requests),
    });
    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    StubServer {
        base_url: format!("http://{}/api", addr),
        requests,
        shutdown: Some(shutdown_tx),
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/api", addr)
}

pub const TOKEN: &str = "token-123";

pub const TRANSACTIONS_BODY: &str = r#"{
    "success": true,
    "data": [
        {
            "id": 11,
            "code": "TRX-011",
            "name": "Gaji Maret",
            "date": "2024-03-25",
            "formatted_date": "25 Mar 2024",
            "amount": 8500000,
            "formatted_amount": "Rp 8.500.000",
            "type": "income",
            "type_id": 1
        },
        {
            "id": 12,
            "code": "TF-012",
            "name": "Kirim ke Ibu",
            "date": "2024-03-26",
            "formatted_date": "26 Mar 2024",
            "amount": 1000000,
            "formatted_amount": "Rp 1.000.000",
            "type": "expense",
            "type_id": 3,
            "has_items": false
        }
    ],
    "pagination": {"current_page": 2, "last_page": 3, "total": 27}
}"#;
