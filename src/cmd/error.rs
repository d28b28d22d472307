use nullint64::null::NullError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CmdError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CmdError {
	/// Decode or coercion failure from the library.
	#[error(transparent)]
	Null(#[from] NullError),
	/// Command-line literal does not match the requested driver kind.
	#[error("invalid {kind} literal: {input:?}")]
	InvalidLiteral {
		/// Requested driver kind.
		kind: &'static str,
		/// User-provided literal.
		input: String,
	},
}
