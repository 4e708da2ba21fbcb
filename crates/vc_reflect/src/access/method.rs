use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::access::synthesize::{ActionBody, GetterBody, SetterBody, Synthesize};
use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// MethodKind

/// The calling shape of a reflected method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `fn(&T) -> R`, reads a value.
    Getter,
    /// `fn(&mut T, P) -> O`, consumes one argument, the result is discarded.
    Setter,
    /// `fn(&mut T) -> O`, called for its side effect.
    Action,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Action => "action",
        })
    }
}

// -----------------------------------------------------------------------------
// MethodDescriptor

/// Describes one method of a reflected type.
///
/// Holds the name, the declaring type, the parameter and return types, and
/// the method itself behind a type-erased synthesizer. Building a descriptor
/// instantiates the synthesizer for the concrete types once; accessors
/// built from it later only wire up the already monomorphized code.
///
/// # Examples
///
/// ```
/// use vc_reflect::access::{MethodDescriptor, MethodKind};
/// use vc_reflect::info::Type;
///
/// struct Point { x: i32 }
///
/// impl Point {
///     fn x(&self) -> i32 { self.x }
///     fn set_x(&mut self, x: i32) { self.x = x; }
/// }
///
/// vc_reflect::impl_type_path!((in demo) Point);
///
/// let get_x = MethodDescriptor::getter("x", Point::x);
/// assert_eq!(get_x.kind(), MethodKind::Getter);
/// assert_eq!(get_x.declaring_type(), &Type::of::<Point>());
/// assert!(get_x.parameter_types().is_empty());
/// assert_eq!(get_x.return_type(), &Type::of::<i32>());
///
/// let set_x = MethodDescriptor::setter("set_x", Point::set_x);
/// assert_eq!(set_x.parameter_types(), &[Type::of::<i32>()]);
/// assert_eq!(set_x.return_type(), &Type::of::<()>());
/// ```
pub struct MethodDescriptor {
    name: &'static str,
    kind: MethodKind,
    declaring_type: Type,
    parameter_types: Box<[Type]>,
    return_type: Type,
    body: Box<dyn Synthesize>,
}

impl MethodDescriptor {
    /// Describes a method reading a value from `T`.
    pub fn getter<T, R>(name: &'static str, method: fn(&T) -> R) -> Self
    where
        T: Reflect + TypePath,
        R: Reflect + TypePath,
    {
        Self {
            name,
            kind: MethodKind::Getter,
            declaring_type: Type::of::<T>(),
            parameter_types: Box::default(),
            return_type: Type::of::<R>(),
            body: Box::new(GetterBody::new(method)),
        }
    }

    /// Describes a method taking exactly one argument.
    ///
    /// The result of `method` is discarded by accessors.
    pub fn setter<T, P, O>(name: &'static str, method: fn(&mut T, P) -> O) -> Self
    where
        T: Reflect + TypePath,
        P: Reflect + TypePath,
        O: Reflect + TypePath,
    {
        Self {
            name,
            kind: MethodKind::Setter,
            declaring_type: Type::of::<T>(),
            parameter_types: Box::new([Type::of::<P>()]),
            return_type: Type::of::<O>(),
            body: Box::new(SetterBody::new(method)),
        }
    }

    /// Describes a method without parameters, called for its side effect.
    ///
    /// The result of `method` is discarded by accessors.
    pub fn action<T, O>(name: &'static str, method: fn(&mut T) -> O) -> Self
    where
        T: Reflect + TypePath,
        O: Reflect + TypePath,
    {
        Self {
            name,
            kind: MethodKind::Action,
            declaring_type: Type::of::<T>(),
            parameter_types: Box::default(),
            return_type: Type::of::<O>(),
            body: Box::new(ActionBody::new(method)),
        }
    }

    /// Returns the method name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the calling shape.
    #[inline]
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Returns the type declaring this method, the accessor target type.
    #[inline]
    pub fn declaring_type(&self) -> &Type {
        &self.declaring_type
    }

    /// Returns the parameter types, excluding the receiver.
    #[inline]
    pub fn parameter_types(&self) -> &[Type] {
        &self.parameter_types
    }

    /// Returns the return type, `()` if the method has no result.
    #[inline]
    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    #[inline]
    pub(crate) fn body(&self) -> &dyn Synthesize {
        &*self.body
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("declaring_type", &self.declaring_type)
            .field("parameter_types", &self.parameter_types)
            .field("return_type", &self.return_type)
            .finish_non_exhaustive()
    }
}
