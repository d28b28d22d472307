//! Tri-state nullable `int64` value with JSON, text, and database driver codecs.

/// Nullable value type, codecs, and driver binding contract.
pub mod null;
