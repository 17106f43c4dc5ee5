use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("stream error: {0}")]
    Stream(#[from] crate::stream::StreamError),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("other error: {0}")]
    Other(String),
}
