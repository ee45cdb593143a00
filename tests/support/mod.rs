#![allow(dead_code)]

use std::net::TcpListener;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use session_analyzer::config::ServiceConfig;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const HEALTH_PATH: &str = "/api/health";
pub const ANALYZE_PATH: &str = "/api/analizar-sesion";

/// A wiremock analyzer kept alive on its own runtime so the blocking client
/// can be driven from the test thread.
pub struct FakeAnalyzerServer {
    // Declared before `runtime` so the server is dropped first.
    server: MockServer,
    runtime: Runtime,
}

impl FakeAnalyzerServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.base_url(),
            probe_timeout_seconds: 1,
            analyze_timeout_seconds: 5,
        }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn healthy(self) -> Self {
        self.mount(
            Mock::given(method("GET"))
                .and(path(HEALTH_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"}))),
        );
        self
    }

    pub fn replying(self, template: ResponseTemplate) -> Self {
        self.mount(
            Mock::given(method("POST"))
                .and(path(ANALYZE_PATH))
                .respond_with(template),
        );
        self
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn received_on(&self, route: &str) -> Vec<Request> {
        self.received()
            .into_iter()
            .filter(|request| request.url.path() == route)
            .collect()
    }
}

/// Replies with the submitted `transcripcion` as the `analisis`.
pub struct EchoTranscript;

impl Respond for EchoTranscript {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match request.body_json::<Value>() {
            Ok(body) => ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "analisis": body["transcripcion"],
            })),
            Err(_) => ResponseTemplate::new(400),
        }
    }
}

pub fn success_body(analysis: &str) -> Value {
    json!({"status": "success", "analisis": analysis})
}

/// Base URL of a loopback port with nothing listening on it.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

pub fn write_transcript(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write transcript");
    path
}
