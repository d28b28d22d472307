use nullint64::null::NullInt64;

use crate::cmd::Result;
use crate::cmd::util::{Report, emit_report};

#[derive(clap::Args)]
pub struct Args {
	/// JSON value to decode, for example `123`, `"-4"`, or `null`.
	#[arg(allow_negative_numbers = true)]
	pub input: String,
	#[arg(long)]
	pub json: bool,
}

/// Decode `input` as one JSON value and report the resulting state.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let mut value = NullInt64::default();
	value.unmarshal_json(input.as_bytes())?;
	tracing::debug!(state = value.state_label(), "json input decoded");

	emit_report(&Report::new(&input, &value), json);
	Ok(())
}
