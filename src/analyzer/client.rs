use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::analyzer::describe_error;
use crate::analyzer::envelope::{parse_reply, AnalysisRequest};
use crate::analyzer::probe::probe_health;
use crate::config::ServiceConfig;
use crate::error::{AnalysisError, AnalysisResult};

pub const ANALYZE_ROUTE: &str = "analizar-sesion";

const JSON_UTF8: &str = "application/json; utf-8";

/// Seam between the session driver and the remote analyzer.
pub trait AnalyzerService {
    fn base_url(&self) -> &str;
    fn probe(&self) -> bool;
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    service: ServiceConfig,
}

impl HttpAnalyzer {
    pub fn new(service: ServiceConfig) -> Self {
        Self { service }
    }
}

impl AnalyzerService for HttpAnalyzer {
    fn base_url(&self) -> &str {
        &self.service.base_url
    }

    fn probe(&self) -> bool {
        probe_health(&self.service)
    }

    // One client per call; the connection is released when `client` drops.
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let client = Client::builder()
            .timeout(self.service.analyze_timeout())
            .build()
            .map_err(transport)?;

        let response = client
            .post(self.service.endpoint(ANALYZE_ROUTE))
            .header(CONTENT_TYPE, JSON_UTF8)
            .json(request)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AnalysisError::Http(status.as_u16()));
        }

        let body = response.bytes().map_err(transport)?;
        parse_reply(&body)?.into_result()
    }
}

fn transport(error: reqwest::Error) -> AnalysisError {
    AnalysisError::Transport(describe_error(&error))
}
