use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Couldn't read file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Couldn't write to file {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No points found in {0}")]
    Empty(String),
}
