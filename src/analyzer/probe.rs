use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::analyzer::describe_error;
use crate::config::ServiceConfig;

pub const HEALTH_ROUTE: &str = "health";

/// Liveness check. Any failure (build, connect, timeout, non-200) is `false`.
/// The response body is never read.
pub fn probe_health(service: &ServiceConfig) -> bool {
    let url = service.endpoint(HEALTH_ROUTE);
    let deadline = service.probe_timeout();

    let client = match Client::builder()
        .connect_timeout(deadline)
        .timeout(deadline)
        .build()
    {
        Ok(client) => client,
        Err(error) => {
            tracing::warn!(error = %describe_error(&error), "failed to build health probe client");
            return false;
        }
    };

    match client.get(&url).send() {
        Ok(response) => {
            let status = response.status();
            tracing::debug!(%url, status = status.as_u16(), "health probe answered");
            status == StatusCode::OK
        }
        Err(error) => {
            tracing::warn!(%url, error = %describe_error(&error), "health probe failed");
            false
        }
    }
}
