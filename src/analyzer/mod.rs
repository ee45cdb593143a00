pub mod client;
pub mod envelope;
pub mod probe;

pub use client::{AnalyzerService, HttpAnalyzer, ANALYZE_ROUTE};
pub use envelope::{parse_reply, AnalysisReply, AnalysisRequest};
pub use probe::{probe_health, HEALTH_ROUTE};

/// Flattens an error and its source chain into one line.
pub(crate) fn describe_error(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
