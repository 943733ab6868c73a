use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing dependency: {0}")]
    Dependency(String),

    #[error("{0}() must be overridden.")]
    NotImplemented(&'static str),

    #[error("API Error: {0}")]
    Api(String),
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
