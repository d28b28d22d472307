use nullint64::null::{NullInt64, Valuer};

/// Decoded state snapshot printed by every command.
#[derive(Debug, serde::Serialize)]
pub(crate) struct Report {
	input: String,
	state: &'static str,
	set: bool,
	valid: bool,
	zero: bool,
	value: Option<i64>,
	json: String,
	text: String,
	driver: String,
}

impl Report {
	pub(crate) fn new(input: &str, value: &NullInt64) -> Self {
		Self {
			input: input.to_owned(),
			state: value.state_label(),
			set: value.is_set(),
			valid: value.is_valid(),
			zero: value.is_zero(),
			value: value.get(),
			json: String::from_utf8_lossy(&value.marshal_json()).into_owned(),
			text: String::from_utf8_lossy(&value.marshal_text()).into_owned(),
			driver: value.driver_value().to_string(),
		}
	}

	pub(crate) fn print(&self) {
		println!("input: {:?}", self.input);
		println!("state: {}", self.state);
		println!("set: {}", self.set);
		println!("valid: {}", self.valid);
		println!("zero: {}", self.zero);
		println!("value: {}", self.value.map_or_else(|| "none".to_owned(), |value| value.to_string()));
		println!("json: {}", self.json);
		println!("text: {:?}", self.text);
		println!("driver: {}", self.driver);
	}
}

/// Print `report` as pretty JSON or `key: value` lines.
pub(crate) fn emit_report(report: &Report, json: bool) {
	if json {
		emit_json(report);
	} else {
		report.print();
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}
