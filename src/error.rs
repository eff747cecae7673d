use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("The submitted memorial is invalid: {0:?}")]
    InvalidSubmission(Vec<String>),
    #[error("The memorials storage can't be accessed.")]
    StorageUnavailable,
}
