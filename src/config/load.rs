use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::bootstrap::AppPaths;
use crate::config::schema::AppConfig;
use crate::error::{AppError, AppResult};

pub const CONFIG_PATH_ENV: &str = "SESSION_ANALYZER_CONFIG";

/// `SESSION_ANALYZER_CONFIG` when set, else the per-user config file if one resolved.
pub fn config_path(paths: Option<&AppPaths>) -> Option<PathBuf> {
    non_blank_env(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|| paths.map(|paths| paths.config_file.clone()))
}

/// Reads the config file when present, otherwise starts from defaults. Never writes.
pub fn load_config(config_path: Option<&Path>) -> AppResult<AppConfig> {
    let mut config = match config_path.filter(|path| path.exists()) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&raw)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);

    validate(&config)?;
    Ok(config)
}

/// Writes a default config file if none exists. Failures are logged and ignored;
/// an unwritable config directory must not block a run.
pub fn seed_default_config(path: &Path) {
    if path.exists() {
        return;
    }

    match write_default_config(path, &AppConfig::default()) {
        Ok(()) => tracing::debug!(path = %path.display(), "wrote default config"),
        Err(error) => tracing::warn!(
            path = %path.display(),
            %error,
            "could not write default config; continuing with defaults"
        ),
    }
}

fn write_default_config(path: &Path, defaults: &AppConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = toml::to_string_pretty(defaults)?;
    std::fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn validate(config: &AppConfig) -> AppResult<()> {
    if config.service.probe_timeout_seconds == 0 {
        return Err(AppError::Config(
            "service.probe_timeout_seconds must be > 0".to_owned(),
        ));
    }

    if config.service.analyze_timeout_seconds == 0 {
        return Err(AppError::Config(
            "service.analyze_timeout_seconds must be > 0".to_owned(),
        ));
    }

    let url = Url::parse(&config.service.base_url).map_err(|error| {
        AppError::Config(format!(
            "service.base_url `{}` is not a valid URL: {error}",
            config.service.base_url
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "service.base_url must use http or https, got `{}`",
            url.scheme()
        )));
    }

    Ok(())
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(value) = non_blank_env("SESSION_ANALYZER_BASE_URL") {
        config.service.base_url = value;
    }
    if let Some(value) = non_blank_env("SESSION_ANALYZER_PROBE_TIMEOUT_SECONDS") {
        if let Ok(parsed) = value.trim().parse::<u64>() {
            config.service.probe_timeout_seconds = parsed;
        }
    }
    if let Some(value) = non_blank_env("SESSION_ANALYZER_ANALYZE_TIMEOUT_SECONDS") {
        if let Ok(parsed) = value.trim().parse::<u64>() {
            config.service.analyze_timeout_seconds = parsed;
        }
    }
    if let Some(value) = non_blank_env("SESSION_ANALYZER_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(value);
    }
    if let Some(value) = non_blank_env("SESSION_ANALYZER_LOG_LEVEL") {
        config.diagnostics.log_level = value;
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
