
use thiserror::Error;

/// The ways a [`Position`](struct.Position.html) can be misused against a
/// [`SingleList`](struct.SingleList.html).
#[derive(Debug, Clone, PartialEq, Eq, Error,)]
pub enum Error {
    /// The position is the end position and names no `Node`.
    #[error("the position is past the end of the list")]
    EndPosition,
    /// The position is the before-begin sentinel which holds no value.
    #[error("the before-begin position cannot be dereferenced")]
    BeforeBegin,
    /// The position was taken from another list.
    #[error("the position belongs to a different list")]
    ForeignPosition,
    /// The `Node` named by the position has been erased.
    #[error("the position refers to an erased node")]
    StalePosition,
    /// There is no `Node` after the position to erase.
    #[error("the position has no successor to erase")]
    NoSuccessor,
    /// Growing the node storage failed.
    #[cfg(feature = "try_reserve",)]
    #[error("failed to reserve space for {0} more nodes")]
    Reserve(usize,),
}

/// A `Result` with an [`Error`].
pub type Result<T,> = std::result::Result<T, Error,>;
