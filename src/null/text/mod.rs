use std::fmt;
use std::str::FromStr;

use crate::null::{NullError, NullInt64, Result};

impl NullInt64 {
	/// Decode raw decimal text in place.
	///
	/// Empty input decodes to null. Unlike the JSON path, `0` is kept as a value.
	pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
		*self = Self::Null;
		if text.is_empty() {
			return Ok(());
		}

		let input = String::from_utf8_lossy(text);
		let value = input.parse::<i64>().map_err(|err| NullError::parse(&input, err))?;
		*self = Self::Value(value);
		Ok(())
	}

	/// Encode as decimal text, or an empty byte sequence when not valid.
	pub fn marshal_text(&self) -> Vec<u8> {
		match self {
			Self::Value(value) => value.to_string().into_bytes(),
			Self::Unset | Self::Null => Vec::new(),
		}
	}
}

impl FromStr for NullInt64 {
	type Err = NullError;

	fn from_str(text: &str) -> Result<Self> {
		let mut value = Self::Unset;
		value.unmarshal_text(text.as_bytes())?;
		Ok(value)
	}
}

/// Renders the text encoding: digits for a value, nothing otherwise.
impl fmt::Display for NullInt64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => write!(f, "{value}"),
			Self::Unset | Self::Null => Ok(()),
		}
	}
}
