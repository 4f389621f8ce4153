//! Canned in-process verification service for integration tests
//!
//! Serves fixed JSON bodies on `/api/verify` and `/api/fix` so CLI tests
//! exercise a real HTTP boundary without the real service. Binds an
//! ephemeral local port; counts requests so tests can assert that
//! rejected input never reached the network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tiny_http::{Header, Response, Server};

/// A mock TruthForge service bound to an ephemeral local port
pub struct MockBackend {
    server: Arc<Server>,
    handle: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicUsize>,
    base_url: String,
}

impl MockBackend {
    /// Start a service answering verify and fix with the given JSON bodies
    pub fn start(verify_body: &str, fix_body: &str) -> Self {
        Self::spawn((200, verify_body.to_string()), (200, fix_body.to_string()))
    }

    /// Start a service answering every request with the given status code
    pub fn failing(status: u16) -> Self {
        let body = r#"{"detail": "Internal Server Error"}"#.to_string();
        Self::spawn((status, body.clone()), (status, body))
    }

    fn spawn(verify: (u16, String), fix: (u16, String)) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind mock service"));
        let addr = server.server_addr().to_ip().expect("tcp listener");
        let base_url = format!("http://{addr}");
        let hits = Arc::new(AtomicUsize::new(0));

        let handle = {
            let server = Arc::clone(&server);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let (status, body) = match request.url() {
                        "/api/verify" => verify.clone(),
                        "/api/fix" => fix.clone(),
                        _ => (404, r#"{"detail": "Not Found"}"#.to_string()),
                    };
                    let response = Response::from_data(body.into_bytes())
                        .with_header(
                            Header::from_bytes("Content-Type", "application/json")
                                .expect("static header"),
                        )
                        .with_status_code(status);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            hits,
            base_url,
        }
    }

    /// Origin to pass as `--api-url`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
