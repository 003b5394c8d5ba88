use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnnotationError>;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("no item identifiers were supplied")]
    EmptyItemList,

    #[error("annotation endpoint request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("annotation endpoint returned an unreadable body: {0}")]
    Decode(#[from] std::io::Error),
}
