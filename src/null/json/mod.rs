use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::null::{NullError, NullInt64, Result};

/// JSON `null` token.
pub const NULL_BYTES: &[u8] = b"null";

impl NullInt64 {
	/// Decode one JSON value in place.
	///
	/// Any call marks the value as set, including calls that fail. Numbers and
	/// decimal strings equal to zero decode to null, as do `null` and `""`.
	pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
		*self = Self::Null;
		if data == NULL_BYTES {
			return Ok(());
		}

		let decoded: serde_json::Value = serde_json::from_slice(data)?;
		tracing::trace!(kind = json_type_name(&decoded), "decoding json payload");
		match decoded {
			// serde_json reads `-0` as a float; it is still the integer zero.
			serde_json::Value::Number(number) if is_negative_zero_literal(&number, data) => {}
			serde_json::Value::Number(_) => {
				// Reparse as an integer so large values never pass through f64.
				let value: i64 = serde_json::from_slice(data)?;
				*self = from_json_int(value);
			}
			serde_json::Value::String(text) => *self = from_json_str(&text)?,
			serde_json::Value::Null => {}
			other => {
				return Err(NullError::TypeMismatch {
					found: json_type_name(&other),
				});
			}
		}
		Ok(())
	}

	/// Encode as a bare JSON number, or `null` when not valid.
	pub fn marshal_json(&self) -> Vec<u8> {
		match self {
			Self::Value(value) => value.to_string().into_bytes(),
			Self::Unset | Self::Null => NULL_BYTES.to_vec(),
		}
	}
}

fn from_json_int(value: i64) -> NullInt64 {
	if value == 0 { NullInt64::Null } else { NullInt64::Value(value) }
}

fn from_json_str(text: &str) -> Result<NullInt64> {
	if text.is_empty() {
		return Ok(NullInt64::Null);
	}
	let value = text.parse::<i64>().map_err(|err| NullError::parse(text, err))?;
	Ok(from_json_int(value))
}

fn is_negative_zero_literal(number: &serde_json::Number, data: &[u8]) -> bool {
	number.is_f64() && number.as_f64() == Some(0.0) && !data.iter().any(|byte| matches!(*byte, b'.' | b'e' | b'E'))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "bool",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

impl Serialize for NullInt64 {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Value(value) => serializer.serialize_i64(*value),
			Self::Unset | Self::Null => serializer.serialize_none(),
		}
	}
}

impl<'de> Deserialize<'de> for NullInt64 {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(NullInt64Visitor)
	}
}

struct NullInt64Visitor;

impl<'de> Visitor<'de> for NullInt64Visitor {
	type Value = NullInt64;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an integer, a decimal string, or null")
	}

	fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		Ok(from_json_int(value))
	}

	fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		i64::try_from(value)
			.map(from_json_int)
			.map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
	}

	/// Only negative zero is accepted; serde_json reports the `-0` literal as a float.
	fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		if value == 0.0 && value.is_sign_negative() {
			return Ok(NullInt64::Null);
		}
		Err(E::invalid_type(Unexpected::Float(value), &self))
	}

	fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		from_json_str(value).map_err(E::custom)
	}

	fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		Ok(NullInt64::Null)
	}

	fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
	where
		E: de::Error,
	{
		Ok(NullInt64::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(self)
	}
}
