use thiserror::Error;

/// Failures while loading or parsing a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
