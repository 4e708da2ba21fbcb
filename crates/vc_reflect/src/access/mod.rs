//! Synthesize fast accessors from method descriptors.
//!
//! The reflection layer of a message runtime calls getters, setters and
//! other methods on many unrelated generated types through one uniform,
//! type-erased calling convention. Resolving those methods reflectively on
//! every call is too slow for a serialization path, so an accessor is built
//! once per member and reused: each call then costs the target (and argument)
//! narrowing plus one direct call.
//!
//! - [`MethodDescriptor`]: name, declaring type, parameter and return types
//!   of one method, plus the method itself.
//! - Accessors, one per call-site signature:
//!     - [`BoxedGetter`]: `&dyn Reflect -> Box<dyn Reflect>`, read a field.
//!     - [`TypedGetter<R>`]: `&dyn Reflect -> R`, read a field of a known type.
//!     - [`BoxedSetter`]: `(&mut dyn Reflect, Box<dyn Reflect>) -> ()`, set a field.
//!     - [`BoxedAction`]: `&mut dyn Reflect -> ()`, invoke a behavior such as `clear`.
//! - [`BuildError`]: the descriptor cannot serve the requested accessor.
//! - [`AccessError`]: an accessor was invoked with a value of the wrong type.
//!
//! Accessors are immutable, cheap to clone and `Send + Sync`. They are not
//! cached here: building twice yields two independent accessors.
//!
//! # Examples
//!
//! ```
//! use vc_reflect::Reflect;
//! use vc_reflect::access::{BoxedGetter, BoxedSetter, MethodDescriptor};
//!
//! struct Point { x: i32 }
//!
//! impl Point {
//!     fn x(&self) -> i32 { self.x }
//!     fn set_x(&mut self, x: i32) { self.x = x; }
//! }
//!
//! vc_reflect::impl_type_path!((in demo) Point);
//!
//! let get_x = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();
//! let set_x = BoxedSetter::from_method(&MethodDescriptor::setter("set_x", Point::set_x)).unwrap();
//!
//! let mut point = Point { x: 5 };
//! assert_eq!(get_x.get(&point).unwrap().take::<i32>().unwrap(), 5);
//!
//! set_x.set(&mut point, 7_i32.into_boxed_reflect()).unwrap();
//! assert_eq!(point.x, 7);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod method;
mod synthesize;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{BoxedAction, BoxedGetter, BoxedSetter, TypedGetter};
pub use error::{AccessError, BuildError};
pub use method::{MethodDescriptor, MethodKind};

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests;
