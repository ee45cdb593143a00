use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Wire tag telling the analyzer how to parse the transcript body.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    Json,
    Txt,
}

impl TranscriptFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TranscriptFormat::Json => "json",
            TranscriptFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies by lowercased path suffix only; contents are never inspected.
pub fn classify(path: &Path) -> TranscriptFormat {
    if path.to_string_lossy().to_lowercase().ends_with(".json") {
        TranscriptFormat::Json
    } else {
        TranscriptFormat::Txt
    }
}
