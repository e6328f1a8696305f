use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid scale options: {0}")]
    InvalidOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
