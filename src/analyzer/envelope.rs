use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::transcript::TranscriptFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "transcripcion")]
    pub transcript: String,
    #[serde(rename = "formato")]
    pub format: TranscriptFormat,
}

impl AnalysisRequest {
    pub fn new(transcript: impl Into<String>, format: TranscriptFormat) -> Self {
        Self {
            transcript: transcript.into(),
            format,
        }
    }
}

/// Parsed analyzer reply; exactly one of analysis or error text exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReply {
    Success { analysis: String },
    Error { message: String },
}

impl AnalysisReply {
    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisReply::Success { analysis } => Ok(analysis),
            AnalysisReply::Error { message } => Err(AnalysisError::Rejected(message)),
        }
    }
}

// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    status: String,
    analisis: Option<String>,
    error: Option<String>,
}

pub fn parse_reply(body: &[u8]) -> Result<AnalysisReply, AnalysisError> {
    let envelope: ReplyEnvelope =
        serde_json::from_slice(body).map_err(|_| AnalysisError::MalformedReply)?;

    match envelope.status.as_str() {
        "success" => envelope
            .analisis
            .map(|analysis| AnalysisReply::Success { analysis })
            .ok_or(AnalysisError::MalformedReply),
        "error" => envelope
            .error
            .map(|message| AnalysisReply::Error { message })
            .ok_or(AnalysisError::MalformedReply),
        _ => Err(AnalysisError::MalformedReply),
    }
}
