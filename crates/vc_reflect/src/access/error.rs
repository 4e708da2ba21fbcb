use thiserror::Error;

use crate::access::MethodKind;

// -----------------------------------------------------------------------------
// Error

/// A fault raised when an accessor is invoked with a value of the wrong type.
///
/// The bound method is never called when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The target is not an instance of the method's declaring type.
    #[error("accessor of `{method}` expected a target of type `{expected}`, found `{actual}`")]
    TargetMismatch {
        method: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The argument is not of the method's parameter type.
    #[error("accessor of `{method}` expected an argument of type `{expected}`, found `{actual}`")]
    ArgumentMismatch {
        method: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A fault raised when an accessor cannot be synthesized from a [`MethodDescriptor`].
///
/// [`MethodDescriptor`]: crate::access::MethodDescriptor
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The method's [`MethodKind`] cannot serve the requested accessor.
    #[error("cannot build a {accessor} from {actual} `{method}`")]
    ShapeMismatch {
        method: &'static str,
        accessor: &'static str,
        actual: MethodKind,
    },

    /// A typed getter was requested for a type other than the method's result.
    #[error("cannot build a getter returning `{expected}` from `{method}`, which returns `{actual}`")]
    ResultMismatch {
        method: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

macro_rules! impl_handle_error {
    ($name:ident) => {
        impl $name {
            /// Panics with the error message.
            ///
            /// For callers that treat the fault as fatal during type initialization.
            #[cold]
            #[inline(never)]
            pub fn handle_error(&self) -> ! {
                panic!("{self}");
            }
        }
    };
}

impl_handle_error!(AccessError);
impl_handle_error!(BuildError);

// -----------------------------------------------------------------------------
// Tests
