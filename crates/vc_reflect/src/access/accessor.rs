use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::access::synthesize::{ActFn, GetFn, SetFn, TypedGetFn};
use crate::access::{AccessError, BuildError, MethodDescriptor};
use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// Auxiliary

#[inline]
fn shape_mismatch(method: &MethodDescriptor, accessor: &'static str) -> BuildError {
    BuildError::ShapeMismatch {
        method: method.name(),
        accessor,
        actual: method.kind(),
    }
}

#[inline]
fn trace_synthesis(accessor: &str, method: &MethodDescriptor) {
    if cfg!(any(debug_assertions, feature = "debug")) {
        log::trace!(
            "synthesized {accessor} for `{}::{}`",
            method.declaring_type(),
            method.name()
        );
    }
}

macro_rules! impl_accessor_common {
    ($name:ident $(<$param:ident>)?) => {
        impl$(<$param>)? $name$(<$param>)? {
            /// Returns the name of the bound method.
            #[inline]
            pub fn method_name(&self) -> &'static str {
                self.method
            }

            /// Returns the type declaring the bound method, the expected target type.
            #[inline]
            pub fn declaring_type(&self) -> &Type {
                &self.declaring_type
            }
        }

        impl$(<$param>)? Clone for $name$(<$param>)? {
            #[inline]
            fn clone(&self) -> Self {
                Self {
                    method: self.method,
                    declaring_type: self.declaring_type,
                    func: self.func.clone(),
                }
            }
        }

        impl$(<$param>)? fmt::Debug for $name$(<$param>)? {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(::core::stringify!($name))
                    .field("method", &self.method)
                    .field("declaring_type", &self.declaring_type)
                    .finish_non_exhaustive()
            }
        }
    };
}

// -----------------------------------------------------------------------------
// BoxedGetter

/// Reads a value through a getter, both target and result type-erased.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::access::{BoxedGetter, MethodDescriptor};
///
/// struct Point { x: i32 }
///
/// impl Point {
///     fn x(&self) -> i32 { self.x }
/// }
///
/// vc_reflect::impl_type_path!((in demo) Point);
///
/// let getter = BoxedGetter::from_method(&MethodDescriptor::getter("x", Point::x)).unwrap();
///
/// let x = getter.get(&Point { x: 5 }).unwrap();
/// assert_eq!(x.take::<i32>().unwrap(), 5);
///
/// // Wrong target type.
/// assert!(getter.get(&5_i32).is_err());
/// ```
pub struct BoxedGetter {
    method: &'static str,
    declaring_type: Type,
    func: GetFn,
}

impl BoxedGetter {
    /// Synthesizes a boxed getter.
    ///
    /// Fails if `method` is not a [getter](crate::access::MethodKind::Getter).
    pub fn from_method(method: &MethodDescriptor) -> Result<Self, BuildError> {
        let func = method
            .body()
            .boxed_getter(method.name())
            .ok_or_else(|| shape_mismatch(method, "boxed getter"))?;

        trace_synthesis("boxed getter", method);
        Ok(Self {
            method: method.name(),
            declaring_type: *method.declaring_type(),
            func,
        })
    }

    /// Calls the getter on `target` and returns the boxed result.
    ///
    /// Fails with [`AccessError::TargetMismatch`] if `target` is not an
    /// instance of the declaring type.
    #[inline]
    pub fn get(&self, target: &dyn Reflect) -> Result<Box<dyn Reflect>, AccessError> {
        (self.func)(target)
    }
}

impl_accessor_common!(BoxedGetter);

// -----------------------------------------------------------------------------
// TypedGetter

/// Reads a value of a statically known type `R` through a getter.
///
/// Unlike [`BoxedGetter`], the result is returned without boxing.
///
/// # Examples
///
/// ```
/// use vc_reflect::access::{BuildError, MethodDescriptor, TypedGetter};
///
/// struct Point { x: i32 }
///
/// impl Point {
///     fn x(&self) -> i32 { self.x }
/// }
///
/// vc_reflect::impl_type_path!((in demo) Point);
///
/// let method = MethodDescriptor::getter("x", Point::x);
///
/// let getter = TypedGetter::<i32>::from_method(&method).unwrap();
/// assert_eq!(getter.get(&Point { x: 5 }).unwrap(), 5);
///
/// let err = TypedGetter::<u64>::from_method(&method).unwrap_err();
/// assert!(matches!(err, BuildError::ResultMismatch { .. }));
/// ```
pub struct TypedGetter<R> {
    method: &'static str,
    declaring_type: Type,
    func: TypedGetFn<R>,
}

impl<R: Reflect + TypePath> TypedGetter<R> {
    /// Synthesizes a typed getter.
    ///
    /// Fails if `method` is not a [getter](crate::access::MethodKind::Getter),
    /// or if it does not return `R`.
    pub fn from_method(method: &MethodDescriptor) -> Result<Self, BuildError> {
        let erased = method
            .body()
            .typed_getter(method.name())
            .ok_or_else(|| shape_mismatch(method, "typed getter"))?;

        let func = erased
            .downcast::<TypedGetFn<R>>()
            .map_err(|_| BuildError::ResultMismatch {
                method: method.name(),
                expected: R::type_path(),
                actual: method.return_type().path(),
            })?;

        trace_synthesis("typed getter", method);
        Ok(Self {
            method: method.name(),
            declaring_type: *method.declaring_type(),
            func: *func,
        })
    }
}

impl<R> TypedGetter<R> {
    /// Calls the getter on `target`.
    ///
    /// Fails with [`AccessError::TargetMismatch`] if `target` is not an
    /// instance of the declaring type.
    #[inline]
    pub fn get(&self, target: &dyn Reflect) -> Result<R, AccessError> {
        (self.func)(target)
    }
}

impl_accessor_common!(TypedGetter<R>);

// -----------------------------------------------------------------------------
// BoxedSetter

/// Calls a single-argument method, both target and argument type-erased.
///
/// The method's own result, if any, is discarded.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::access::{AccessError, BoxedSetter, MethodDescriptor};
///
/// struct Point { x: i32 }
///
/// impl Point {
///     fn set_x(&mut self, x: i32) { self.x = x; }
/// }
///
/// vc_reflect::impl_type_path!((in demo) Point);
///
/// let setter = BoxedSetter::from_method(&MethodDescriptor::setter("set_x", Point::set_x)).unwrap();
///
/// let mut point = Point { x: 5 };
/// setter.set(&mut point, 7_i32.into_boxed_reflect()).unwrap();
/// assert_eq!(point.x, 7);
///
/// let err = setter.set(&mut point, "7".into_boxed_reflect()).unwrap_err();
/// assert!(matches!(err, AccessError::ArgumentMismatch { .. }));
/// assert_eq!(point.x, 7);
/// ```
pub struct BoxedSetter {
    method: &'static str,
    declaring_type: Type,
    func: SetFn,
}

impl BoxedSetter {
    /// Synthesizes a boxed setter.
    ///
    /// Fails if `method` does not take exactly one argument.
    pub fn from_method(method: &MethodDescriptor) -> Result<Self, BuildError> {
        let func = method
            .body()
            .boxed_setter(method.name())
            .ok_or_else(|| shape_mismatch(method, "boxed setter"))?;

        trace_synthesis("boxed setter", method);
        Ok(Self {
            method: method.name(),
            declaring_type: *method.declaring_type(),
            func,
        })
    }

    /// Calls the method on `target` with `value`.
    ///
    /// The target is checked first: on [`AccessError::TargetMismatch`]
    /// `value` is dropped unchecked. On [`AccessError::ArgumentMismatch`]
    /// the method is not called either.
    #[inline]
    pub fn set(
        &self,
        target: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessError> {
        (self.func)(target, value)
    }
}

impl_accessor_common!(BoxedSetter);

// -----------------------------------------------------------------------------
// BoxedAction

/// Calls a method without arguments on a type-erased target.
///
/// Built from an [action](crate::access::MethodKind::Action) or a
/// [getter](crate::access::MethodKind::Getter); the result is discarded.
///
/// # Examples
///
/// ```
/// use vc_reflect::access::{BoxedAction, MethodDescriptor};
///
/// struct Point { x: i32 }
///
/// impl Point {
///     fn clear(&mut self) { self.x = 0; }
/// }
///
/// vc_reflect::impl_type_path!((in demo) Point);
///
/// let clear = BoxedAction::from_method(&MethodDescriptor::action("clear", Point::clear)).unwrap();
///
/// let mut point = Point { x: 5 };
/// clear.invoke(&mut point).unwrap();
/// assert_eq!(point.x, 0);
/// ```
pub struct BoxedAction {
    method: &'static str,
    declaring_type: Type,
    func: ActFn,
}

impl BoxedAction {
    /// Synthesizes a boxed action.
    ///
    /// Fails if `method` takes an argument.
    pub fn from_method(method: &MethodDescriptor) -> Result<Self, BuildError> {
        let func = method
            .body()
            .boxed_action(method.name())
            .ok_or_else(|| shape_mismatch(method, "boxed action"))?;

        trace_synthesis("boxed action", method);
        Ok(Self {
            method: method.name(),
            declaring_type: *method.declaring_type(),
            func,
        })
    }

    /// Calls the method on `target`.
    ///
    /// Fails with [`AccessError::TargetMismatch`] if `target` is not an
    /// instance of the declaring type.
    #[inline]
    pub fn invoke(&self, target: &mut dyn Reflect) -> Result<(), AccessError> {
        (self.func)(target)
    }
}

impl_accessor_common!(BoxedAction);
