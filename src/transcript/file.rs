use std::path::Path;

use crate::error::{AnalysisError, AppError, AppResult};
use crate::transcript::format::{classify, TranscriptFormat};

#[derive(Debug, Clone)]
pub struct TranscriptFile {
    pub contents: String,
    pub format: TranscriptFormat,
}

impl TranscriptFile {
    pub fn byte_len(&self) -> usize {
        self.contents.len()
    }

    pub fn char_count(&self) -> usize {
        self.contents.chars().count()
    }
}

/// Reads the whole transcript as UTF-8. No size cap is applied.
pub fn read_transcript(path: &Path) -> Result<TranscriptFile, AnalysisError> {
    let contents = std::fs::read_to_string(path).map_err(AnalysisError::Read)?;
    Ok(TranscriptFile {
        contents,
        format: classify(path),
    })
}

/// Writes (truncating) the analysis text. Missing parent directories are an error.
pub fn write_analysis(path: &Path, text: &str) -> AppResult<()> {
    std::fs::write(path, text.as_bytes()).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
