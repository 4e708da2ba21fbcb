//! [`TypePath`](crate::info::TypePath) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - `()`, `bool`, `char`
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `&'static str`, `String`, `Vec<u8>`

// -----------------------------------------------------------------------------
// Modules

mod primitive;
mod type_path_macro;
