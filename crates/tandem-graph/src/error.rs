//! Error type for graph construction and vertex queries.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A capacity hint below zero was passed to a constructor.
    #[error("initial capacity must not be negative: {capacity}")]
    InvalidCapacity { capacity: i64 },

    /// The vertex was never added, or has been removed.
    #[error("vertex not found")]
    VertexNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
