use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Debug)]
pub enum QueueError {
    /// An absent item was offered to `add_*` or `enqueue`.
    NullArgument,
    /// Removal or sampling on a container holding no items.
    EmptyContainer,
    /// A checked iterator step past the last item.
    Exhausted,
    IOError(std::io::Error),
}

from_error!(std::io::Error, IOError);

impl Display for QueueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::NullArgument => write!(f, "item must not be absent"),
            QueueError::EmptyContainer => write!(f, "container is empty"),
            QueueError::Exhausted => write!(f, "no more items to return"),
            QueueError::IOError(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl QueueError {
    pub fn is_empty_container(&self) -> bool {
        matches!(self, QueueError::EmptyContainer)
    }
}
