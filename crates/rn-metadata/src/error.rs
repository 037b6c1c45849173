use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("intersection CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MetadataResult<T> = Result<T, MetadataError>;
