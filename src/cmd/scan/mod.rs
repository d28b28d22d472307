use nullint64::null::{DriverValue, NullInt64, Scanner};

use crate::cmd::util::{Report, emit_report};
use crate::cmd::{CmdError, Result};

/// Driver value kind the input literal is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
	Null,
	Bool,
	Int,
	Uint,
	Float,
	String,
	Bytes,
}

#[derive(clap::Args)]
pub struct Args {
	/// Literal handed to the driver binding; ignored for `--kind null`.
	#[arg(default_value = "", allow_negative_numbers = true)]
	pub input: String,
	#[arg(long, value_enum, default_value_t = Kind::String)]
	pub kind: Kind,
	#[arg(long)]
	pub json: bool,
}

/// Scan `input` as a driver value of `kind` and report the resulting state.
pub fn run(args: Args) -> Result<()> {
	let Args { input, kind, json } = args;

	let src = driver_value(kind, &input)?;
	let mut value = NullInt64::default();
	value.scan(src)?;
	tracing::debug!(state = value.state_label(), "driver value scanned");

	emit_report(&Report::new(&input, &value), json);
	Ok(())
}

pub(crate) fn driver_value(kind: Kind, input: &str) -> Result<DriverValue> {
	let invalid = |label: &'static str| CmdError::InvalidLiteral {
		kind: label,
		input: input.to_owned(),
	};

	Ok(match kind {
		Kind::Null => DriverValue::Null,
		Kind::Bool => DriverValue::Bool(input.parse().map_err(|_| invalid("bool"))?),
		Kind::Int => DriverValue::I64(input.parse().map_err(|_| invalid("int"))?),
		Kind::Uint => DriverValue::U64(input.parse().map_err(|_| invalid("uint"))?),
		Kind::Float => DriverValue::F64(input.parse().map_err(|_| invalid("float"))?),
		Kind::String => DriverValue::String(input.to_owned()),
		Kind::Bytes => DriverValue::Bytes(input.as_bytes().to_vec()),
	})
}

#[cfg(test)]
mod tests;
