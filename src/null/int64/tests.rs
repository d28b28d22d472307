use crate::null::NullInt64;

#[test]
fn default_is_unset_and_zero() {
	let value = NullInt64::default();
	assert_eq!(value, NullInt64::Unset);
	assert!(!value.is_set());
	assert!(!value.is_valid());
	assert!(value.is_zero());
	assert_eq!(value.ptr(), None);
	assert_eq!(value.int64(), 0);
}

#[test]
fn new_respects_valid_flag() {
	assert_eq!(NullInt64::new(7, true), NullInt64::Value(7));

	let null = NullInt64::new(7, false);
	assert_eq!(null, NullInt64::Null);
	assert!(null.is_set());
	assert!(!null.is_valid());
	assert_eq!(null.get(), None);
}

#[test]
fn from_i64_is_always_valid() {
	let zero = NullInt64::from_i64(0);
	assert!(zero.is_valid());
	assert!(!zero.is_zero());
	assert_eq!(zero.ptr(), Some(&0));

	assert_eq!(NullInt64::from(-5), NullInt64::Value(-5));
}

#[test]
fn from_option_maps_none_to_null() {
	assert_eq!(NullInt64::from_option(None), NullInt64::Null);
	assert_eq!(NullInt64::from_option(Some(42)), NullInt64::Value(42));

	let source = 9_i64;
	assert_eq!(NullInt64::from(Some(&source)), NullInt64::Value(9));
	assert_eq!(NullInt64::from(None::<&i64>), NullInt64::Null);
}

#[test]
fn set_valid_overwrites_any_state() {
	for start in [NullInt64::Unset, NullInt64::Null, NullInt64::Value(1)] {
		let mut value = start;
		value.set_valid(-3);
		assert_eq!(value, NullInt64::Value(-3));
		assert!(value.is_set());
		assert!(value.is_valid());
	}
}

#[test]
fn is_zero_ignores_set_flag() {
	assert!(NullInt64::Unset.is_zero());
	assert!(NullInt64::Null.is_zero());
	assert!(!NullInt64::Value(0).is_zero());
}

#[test]
fn value_or_and_option_projection() {
	assert_eq!(NullInt64::Null.value_or(11), 11);
	assert_eq!(NullInt64::Value(4).value_or(11), 4);
	assert_eq!(Option::<i64>::from(NullInt64::Value(4)), Some(4));
	assert_eq!(Option::<i64>::from(NullInt64::Unset), None);
}

#[test]
fn state_labels_are_stable() {
	assert_eq!(NullInt64::Unset.state_label(), "unset");
	assert_eq!(NullInt64::Null.state_label(), "null");
	assert_eq!(NullInt64::Value(1).state_label(), "value");
}
