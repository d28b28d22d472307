mod driver;
mod error;
mod int64;
mod json;
mod text;

/// Database driver value, binding traits, and integer coercion.
pub use driver::{DriverValue, Scanner, Valuer, convert_i64};
/// Error and result aliases.
pub use error::{NullError, Result};
/// Tri-state nullable integer.
pub use int64::NullInt64;
/// JSON null token.
pub use json::NULL_BYTES;
