use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("results (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
