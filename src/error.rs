use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("Cannot pop from an empty heap")]
    Empty,
}

pub type Result<T> = std::result::Result<T, HeapError>;
