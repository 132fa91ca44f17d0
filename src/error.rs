use thiserror::Error;

/// Rejected input shape or count.
///
/// This is the only error kind raised by the crate. It is returned before
/// any arithmetic starts.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub String);

impl InvalidArgument {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
