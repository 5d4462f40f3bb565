use pvpp::pvpp::PvppError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `pvppdoc` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Loading or decoding the payload failed.
	#[error(transparent)]
	Decode(#[from] PvppError),
	/// Collection index outside the decoded document.
	#[error("{kind} index {index} out of range (len {len})")]
	IndexOutOfRange {
		/// Collection being indexed.
		kind: &'static str,
		/// Requested index.
		index: usize,
		/// Collection length.
		len: usize,
	},
	/// Numeric flag value was invalid.
	#[error("invalid number literal: {value}")]
	InvalidNumberLiteral {
		/// User-provided literal.
		value: String,
	},
}
