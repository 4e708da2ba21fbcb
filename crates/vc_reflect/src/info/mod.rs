//! Type identity of reflected values.
//!
//! - [`TypePath`]: a stable path naming a type, used in diagnostics.
//! - [`DynamicTypePath`]: the same, callable on `dyn Reflect`.
//! - [`Type`]: a [`TypeId`] paired with its path.
//!
//! Message and foreign types get their [`TypePath`] through
//! [`impl_type_path!`](crate::impl_type_path).
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use type_path::{DynamicTypePath, Type, TypePath};
