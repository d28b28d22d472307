/// Command error and result aliases.
pub mod error;
/// JSON decode command.
pub mod json;
/// Driver scan command.
pub mod scan;
/// Text decode command.
pub mod text;
/// Shared report rendering.
pub mod util;

pub use error::{CmdError, Result};
