use nullint64::null::NullInt64;

use crate::cmd::Result;
use crate::cmd::util::{Report, emit_report};

#[derive(clap::Args)]
pub struct Args {
	/// Raw decimal text; pass `""` for the empty encoding.
	#[arg(allow_negative_numbers = true)]
	pub input: String,
	#[arg(long)]
	pub json: bool,
}

/// Decode `input` as raw text and report the resulting state.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let mut value = NullInt64::default();
	value.unmarshal_text(input.as_bytes())?;
	tracing::debug!(state = value.state_label(), "text input decoded");

	emit_report(&Report::new(&input, &value), json);
	Ok(())
}
