//! Configuration loaded from `config/*.toml` and `APP__*` environment variables

mod app_config;

pub use app_config::{
    AppConfig, ArtifactsConfig, LogFormat, LoggingConfig, PredictionConfig, ServerConfig,
};
