use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_file: PathBuf,
}

impl AppPaths {
    pub fn resolve() -> AppResult<Self> {
        let project_dirs = ProjectDirs::from("io", "sesiones", "session-analyzer")
            .ok_or_else(|| AppError::Config("unable to resolve project directories".to_owned()))?;

        Ok(Self {
            config_file: project_dirs.config_dir().join("config.toml"),
        })
    }
}
