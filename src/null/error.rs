use std::num::ParseIntError;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NullError>;

/// Errors produced while decoding or coercing nullable integers.
#[derive(Debug, Error)]
pub enum NullError {
	/// Text payload is not a base-10 signed 64-bit integer.
	#[error("invalid int64 {input:?}: {source}")]
	Parse {
		/// Offending input, lossily decoded as UTF-8.
		input: String,
		/// Underlying integer parse failure.
		#[source]
		source: ParseIntError,
	},
	/// JSON payload decoded to a type that cannot hold an integer.
	#[error("json: cannot decode {found} into NullInt64")]
	TypeMismatch {
		/// JSON type name of the decoded payload.
		found: &'static str,
	},
	/// Malformed JSON, or a JSON number that does not fit in an `i64`.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Driver value could not be coerced into an `i64`.
	#[error("converting driver value {kind} ({value}) to int64: {reason}")]
	Convert {
		/// Driver value kind label.
		kind: &'static str,
		/// Rendered driver value.
		value: String,
		/// Why coercion failed.
		reason: String,
	},
}

impl NullError {
	pub(crate) fn parse(input: &str, source: ParseIntError) -> Self {
		Self::Parse {
			input: input.to_owned(),
			source,
		}
	}
}
