//! Prelude module for mrz_format crate.
//!
//! Re-exports the derive_more macros used by the field types.

pub use derive_more::{Deref, Display};
