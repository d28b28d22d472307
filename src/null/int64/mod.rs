/// Nullable `i64` that remembers whether it was ever assigned.
///
/// Three states are kept apart:
/// - [`NullInt64::Unset`]: never decoded or assigned (absent from input).
/// - [`NullInt64::Null`]: explicitly assigned a null.
/// - [`NullInt64::Value`]: holds a concrete integer.
///
/// Struct fields that should distinguish "absent" from "null" need
/// `#[serde(default)]`, and `#[serde(skip_serializing_if = "NullInt64::is_unset")]`
/// to stay absent when re-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NullInt64 {
	/// Never assigned.
	#[default]
	Unset,
	/// Assigned, but null.
	Null,
	/// Assigned a concrete value.
	Value(i64),
}

impl NullInt64 {
	/// Build an assigned value; `valid == false` yields [`NullInt64::Null`].
	pub fn new(value: i64, valid: bool) -> Self {
		if valid { Self::Value(value) } else { Self::Null }
	}

	/// Build an assigned, non-null value.
	pub fn from_i64(value: i64) -> Self {
		Self::new(value, true)
	}

	/// Build an assigned value that is null when `value` is `None`.
	pub fn from_option(value: Option<i64>) -> Self {
		match value {
			Some(value) => Self::new(value, true),
			None => Self::new(0, false),
		}
	}

	/// True when assigned and not null.
	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Value(_))
	}

	/// True when assigned, null inclusive.
	pub fn is_set(&self) -> bool {
		!self.is_unset()
	}

	/// True when never assigned.
	pub fn is_unset(&self) -> bool {
		matches!(self, Self::Unset)
	}

	/// True for anything that is not a concrete value, whether unset or null.
	pub fn is_zero(&self) -> bool {
		!self.is_valid()
	}

	/// Replace the current state with a concrete value.
	pub fn set_valid(&mut self, value: i64) {
		*self = Self::Value(value);
	}

	/// Borrow the held integer, if any.
	pub fn ptr(&self) -> Option<&i64> {
		match self {
			Self::Value(value) => Some(value),
			Self::Unset | Self::Null => None,
		}
	}

	/// Copy out the held integer, if any.
	pub fn get(&self) -> Option<i64> {
		self.ptr().copied()
	}

	/// Raw payload; `0` when not valid.
	pub fn int64(&self) -> i64 {
		self.value_or(0)
	}

	/// Held integer or `default` when not valid.
	pub fn value_or(&self, default: i64) -> i64 {
		self.get().unwrap_or(default)
	}

	/// Stable lowercase state label.
	pub fn state_label(&self) -> &'static str {
		match self {
			Self::Unset => "unset",
			Self::Null => "null",
			Self::Value(_) => "value",
		}
	}
}

impl From<i64> for NullInt64 {
	fn from(value: i64) -> Self {
		Self::from_i64(value)
	}
}

impl From<Option<i64>> for NullInt64 {
	fn from(value: Option<i64>) -> Self {
		Self::from_option(value)
	}
}

impl From<Option<&i64>> for NullInt64 {
	fn from(value: Option<&i64>) -> Self {
		Self::from_option(value.copied())
	}
}

impl From<NullInt64> for Option<i64> {
	fn from(value: NullInt64) -> Self {
		value.get()
	}
}

#[cfg(test)]
mod tests;
