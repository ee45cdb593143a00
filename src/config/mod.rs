pub mod load;
pub mod schema;

pub use load::{config_path, load_config, seed_default_config};
pub use schema::{AppConfig, DiagnosticsConfig, OutputConfig, ServiceConfig};
