use thiserror::Error;

/// Fatal startup problems with the host document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("missing #{id}")]
    MissingElement { id: String },
    #[error("#{id} is not a {expected}")]
    UnexpectedElementType { id: String, expected: &'static str },
}
