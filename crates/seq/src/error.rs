use thiserror::Error;

/// Errors produced by sequence constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
	/// A stepped range was requested with a step of zero.
	#[error("range step must be non-zero")]
	ZeroStep,
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;
