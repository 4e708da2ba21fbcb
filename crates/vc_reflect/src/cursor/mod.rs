//! Pair expected nested type slots with the generated types supplied for them.
//!
//! While a message descriptor is being built, every nested type it declares
//! takes the next generated type from a caller supplied sequence. Messages
//! without generated nested types supply no sequence at all.
//!
//! - [`next_type`]: advance an optional iterator exactly once.
//! - [`TypeCursor`]: the same, plus the expected count for error reports.
//! - [`SequenceError`]: the expected and supplied counts disagree.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod type_cursor;

// -----------------------------------------------------------------------------
// Exports

pub use error::SequenceError;
pub use type_cursor::{TypeCursor, next_type};
