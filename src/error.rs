use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hotspot not found: {0}")]
    HotspotNotFound(String),

    #[error("No project registered for hotspot: {0}")]
    ProjectNotFound(String),

    #[error("No hotspot elements to bind")]
    MissingElement,

    #[error("Coordinator already initialized")]
    AlreadyInitialized,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
