use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StopIndexError {
    #[error("Max depth {depth} exceeds the supported limit of {limit}.")]
    DepthOutOfRange { depth: usize, limit: usize },

    #[error("Unknown split axis {0:?}, expected \"x\" or \"y\".")]
    InvalidAxis(String),
}

pub type Result<T> = std::result::Result<T, StopIndexError>;
