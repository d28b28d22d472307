use std::fmt;

use crate::null::{NullError, NullInt64, Result};

/// Dynamically typed value exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
	/// SQL `NULL`.
	Null,
	/// Boolean column value.
	Bool(bool),
	/// Signed integer column value.
	I64(i64),
	/// Unsigned integer column value.
	U64(u64),
	/// Floating point column value.
	F64(f64),
	/// Textual column value.
	String(String),
	/// Raw byte column value.
	Bytes(Vec<u8>),
}

impl DriverValue {
	/// Stable lowercase kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F64(_) => "f64",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
		}
	}

	/// True for SQL `NULL`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for DriverValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("NULL"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::F64(v) => write!(f, "{v}"),
			Self::String(v) => write!(f, "{v:?}"),
			Self::Bytes(v) => write!(f, "{:?}", String::from_utf8_lossy(v)),
		}
	}
}

/// Read side of the driver binding: assign from a value supplied by the driver.
pub trait Scanner {
	/// Overwrite `self` from `src`.
	fn scan(&mut self, src: DriverValue) -> Result<()>;
}

/// Write side of the driver binding: produce a value for statement parameters.
pub trait Valuer {
	/// Value to bind; [`DriverValue::Null`] for SQL `NULL`.
	fn driver_value(&self) -> DriverValue;
}

/// Best-effort coercion of a driver value into an `i64`.
pub fn convert_i64(src: &DriverValue) -> Result<i64> {
	match src {
		DriverValue::I64(v) => Ok(*v),
		DriverValue::U64(v) => i64::try_from(*v).map_err(|_| convert_error(src, "value out of range")),
		DriverValue::F64(v) => float_to_i64(*v).ok_or_else(|| convert_error(src, "not an integral value in range")),
		DriverValue::String(text) => parse_digits(src, text),
		DriverValue::Bytes(bytes) => {
			let text = std::str::from_utf8(bytes).map_err(|_| convert_error(src, "invalid utf-8"))?;
			parse_digits(src, text)
		}
		DriverValue::Bool(_) => Err(convert_error(src, "unsupported type")),
		DriverValue::Null => Err(convert_error(src, "null has no integer value")),
	}
}

fn parse_digits(src: &DriverValue, text: &str) -> Result<i64> {
	text.parse::<i64>().map_err(|err| convert_error(src, &err.to_string()))
}

fn float_to_i64(value: f64) -> Option<i64> {
	// 2^63 is exactly representable; anything at or above it overflows.
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;
	if !value.is_finite() || value.fract() != 0.0 || value < -LIMIT || value >= LIMIT {
		return None;
	}
	Some(value as i64)
}

fn convert_error(src: &DriverValue, reason: &str) -> NullError {
	NullError::Convert {
		kind: src.kind(),
		value: src.to_string(),
		reason: reason.to_owned(),
	}
}

impl Scanner for NullInt64 {
	/// SQL `NULL` resets to [`NullInt64::Unset`]; anything else is coerced.
	///
	/// A coercion failure leaves the value set but null.
	fn scan(&mut self, src: DriverValue) -> Result<()> {
		tracing::trace!(kind = src.kind(), "scanning driver value");
		if src.is_null() {
			*self = Self::Unset;
			return Ok(());
		}

		*self = Self::Null;
		let value = convert_i64(&src)?;
		*self = Self::Value(value);
		Ok(())
	}
}

impl Valuer for NullInt64 {
	fn driver_value(&self) -> DriverValue {
		match self {
			Self::Value(value) => DriverValue::I64(*value),
			Self::Unset | Self::Null => DriverValue::Null,
		}
	}
}

impl From<NullInt64> for DriverValue {
	fn from(value: NullInt64) -> Self {
		value.driver_value()
	}
}

macro_rules! driver_value_from {
	($variant:ident($target:ty): $($source:ty),+) => {
		$(
			impl From<$source> for DriverValue {
				fn from(value: $source) -> Self {
					Self::$variant(<$target>::from(value))
				}
			}
		)+
	};
}

driver_value_from!(I64(i64): i8, i16, i32, i64);
driver_value_from!(U64(u64): u8, u16, u32, u64);
driver_value_from!(F64(f64): f32, f64);
driver_value_from!(Bool(bool): bool);
driver_value_from!(String(String): String, &str);
driver_value_from!(Bytes(Vec<u8>): Vec<u8>, &[u8]);

impl From<isize> for DriverValue {
	fn from(value: isize) -> Self {
		Self::I64(value as i64)
	}
}

impl From<usize> for DriverValue {
	fn from(value: usize) -> Self {
		Self::U64(value as u64)
	}
}

impl<T> From<Option<T>> for DriverValue
where
	T: Into<DriverValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
