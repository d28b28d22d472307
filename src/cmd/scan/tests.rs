use nullint64::null::DriverValue;

use crate::cmd::CmdError;
use crate::cmd::scan::{Kind, driver_value};

#[test]
fn builds_driver_values_per_kind() {
	assert_eq!(driver_value(Kind::Null, "ignored").expect("null builds"), DriverValue::Null);
	assert_eq!(driver_value(Kind::Int, "-3").expect("int builds"), DriverValue::I64(-3));
	assert_eq!(driver_value(Kind::Uint, "3").expect("uint builds"), DriverValue::U64(3));
	assert_eq!(driver_value(Kind::Float, "2.5").expect("float builds"), DriverValue::F64(2.5));
	assert_eq!(driver_value(Kind::Bool, "true").expect("bool builds"), DriverValue::Bool(true));
	assert_eq!(driver_value(Kind::Bytes, "12").expect("bytes build"), DriverValue::Bytes(b"12".to_vec()));
}

#[test]
fn rejects_literal_that_does_not_match_kind() {
	let err = driver_value(Kind::Uint, "-1").expect_err("negative uint should fail");
	assert!(matches!(err, CmdError::InvalidLiteral { kind: "uint", .. }));
}
