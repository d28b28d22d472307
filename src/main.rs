#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "nullint64", about = "Inspect how inputs decode into a tri-state nullable int64")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a JSON value.
	Json(cmd::json::Args),
	/// Decode raw text.
	Text(cmd::text::Args),
	/// Scan a database driver value.
	Scan(cmd::scan::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Json(args) => cmd::json::run(args),
		Commands::Text(args) => cmd::text::run(args),
		Commands::Scan(args) => cmd::scan::run(args),
	}
}
