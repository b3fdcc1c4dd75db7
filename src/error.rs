use thiserror::Error;

/// Errors returned by the accessors of a [`List`](crate::List).
///
/// Absence is only an error for the accessors that demand an element
/// ([`get`](crate::List::get) and friends). [`search`](crate::List::search)
/// reports absence with `None`, and [`remove`](crate::List::remove) of a
/// missing element is a no-op.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The index is not a live slot of the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// No live element is equal to the requested key.
    #[error("element not found")]
    NotFound,
}
