use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("transcript file does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error(
        "cannot reach the analysis service at {base_url}; start it with `python agente_psicologo_api.py` and retry"
    )]
    ServiceUnreachable { base_url: String },

    #[error("failed to save analysis to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("signal handling failed: {0}")]
    Signal(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a single submission. The `Display` text is what gets printed
/// and persisted in place of the analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Error al leer archivo: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error de conexión: {0}")]
    Transport(String),

    #[error("Error HTTP: {0}")]
    Http(u16),

    #[error("Error: malformed reply")]
    MalformedReply,

    #[error("Error: {0}")]
    Rejected(String),
}

pub type AnalysisResult = Result<String, AnalysisError>;
