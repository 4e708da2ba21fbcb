use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;

use crate::Reflect;
use crate::access::AccessError;
use crate::info::TypePath;

// -----------------------------------------------------------------------------
// Accessor function types

pub(crate) type GetFn =
    Arc<dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, AccessError> + Send + Sync>;

pub(crate) type TypedGetFn<R> = Arc<dyn Fn(&dyn Reflect) -> Result<R, AccessError> + Send + Sync>;

pub(crate) type SetFn =
    Arc<dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), AccessError> + Send + Sync>;

pub(crate) type ActFn = Arc<dyn Fn(&mut dyn Reflect) -> Result<(), AccessError> + Send + Sync>;

// -----------------------------------------------------------------------------
// Synthesize

/// Type-erased accessor synthesizer stored in a `MethodDescriptor`.
///
/// Each body is generic over the concrete method signature, so the closures
/// it returns are monomorphic: narrowing, the call and widening are resolved
/// at compile time. A body returns `None` for shapes its method cannot serve.
pub(crate) trait Synthesize: Send + Sync + 'static {
    fn boxed_getter(&self, _method: &'static str) -> Option<GetFn> {
        None
    }

    /// Returns a boxed `TypedGetFn<R>` for the method's own result type `R`.
    fn typed_getter(&self, _method: &'static str) -> Option<Box<dyn Any>> {
        None
    }

    fn boxed_setter(&self, _method: &'static str) -> Option<SetFn> {
        None
    }

    fn boxed_action(&self, _method: &'static str) -> Option<ActFn> {
        None
    }
}

// -----------------------------------------------------------------------------
// Narrowing

#[inline]
fn narrow_ref<'a, T: Reflect + TypePath>(
    method: &'static str,
    target: &'a dyn Reflect,
) -> Result<&'a T, AccessError> {
    target
        .downcast_ref::<T>()
        .ok_or_else(|| AccessError::TargetMismatch {
            method,
            expected: T::type_path(),
            actual: target.reflect_type_path(),
        })
}

#[inline]
fn narrow_mut<'a, T: Reflect + TypePath>(
    method: &'static str,
    target: &'a mut dyn Reflect,
) -> Result<&'a mut T, AccessError> {
    let actual = target.reflect_type_path();
    target
        .downcast_mut::<T>()
        .ok_or(AccessError::TargetMismatch {
            method,
            expected: T::type_path(),
            actual,
        })
}

#[inline]
fn narrow_owned<P: Reflect + TypePath>(
    method: &'static str,
    value: Box<dyn Reflect>,
) -> Result<P, AccessError> {
    value.take::<P>().map_err(|value| AccessError::ArgumentMismatch {
        method,
        expected: P::type_path(),
        actual: value.reflect_type_path(),
    })
}

// -----------------------------------------------------------------------------
// Getter

pub(crate) struct GetterBody<T, R> {
    func: fn(&T) -> R,
}

impl<T, R> GetterBody<T, R> {
    #[inline]
    pub(crate) fn new(func: fn(&T) -> R) -> Self {
        Self { func }
    }
}

impl<T, R> Synthesize for GetterBody<T, R>
where
    T: Reflect + TypePath,
    R: Reflect + TypePath,
{
    fn boxed_getter(&self, method: &'static str) -> Option<GetFn> {
        let func = self.func;
        Some(Arc::new(
            move |target: &dyn Reflect| -> Result<Box<dyn Reflect>, AccessError> {
                let target = narrow_ref::<T>(method, target)?;
                Ok(func(target).into_boxed_reflect())
            },
        ))
    }

    fn typed_getter(&self, method: &'static str) -> Option<Box<dyn Any>> {
        let func = self.func;
        let typed: TypedGetFn<R> =
            Arc::new(move |target: &dyn Reflect| -> Result<R, AccessError> {
                let target = narrow_ref::<T>(method, target)?;
                Ok(func(target))
            });
        Some(Box::new(typed))
    }

    fn boxed_action(&self, method: &'static str) -> Option<ActFn> {
        let func = self.func;
        Some(Arc::new(
            move |target: &mut dyn Reflect| -> Result<(), AccessError> {
                let target = narrow_ref::<T>(method, target)?;
                func(target);
                Ok(())
            },
        ))
    }
}

// -----------------------------------------------------------------------------
// Setter

pub(crate) struct SetterBody<T, P, O> {
    func: fn(&mut T, P) -> O,
}

impl<T, P, O> SetterBody<T, P, O> {
    #[inline]
    pub(crate) fn new(func: fn(&mut T, P) -> O) -> Self {
        Self { func }
    }
}

impl<T, P, O> Synthesize for SetterBody<T, P, O>
where
    T: Reflect + TypePath,
    P: Reflect + TypePath,
    O: Reflect + TypePath,
{
    fn boxed_setter(&self, method: &'static str) -> Option<SetFn> {
        let func = self.func;
        Some(Arc::new(
            move |target: &mut dyn Reflect, value: Box<dyn Reflect>| -> Result<(), AccessError> {
                // The target is checked before the argument is consumed.
                let target = narrow_mut::<T>(method, target)?;
                let value = narrow_owned::<P>(method, value)?;
                func(target, value);
                Ok(())
            },
        ))
    }
}

// -----------------------------------------------------------------------------
// Action

pub(crate) struct ActionBody<T, O> {
    func: fn(&mut T) -> O,
}

impl<T, O> ActionBody<T, O> {
    #[inline]
    pub(crate) fn new(func: fn(&mut T) -> O) -> Self {
        Self { func }
    }
}

impl<T, O> Synthesize for ActionBody<T, O>
where
    T: Reflect + TypePath,
    O: Reflect + TypePath,
{
    fn boxed_action(&self, method: &'static str) -> Option<ActFn> {
        let func = self.func;
        Some(Arc::new(
            move |target: &mut dyn Reflect| -> Result<(), AccessError> {
                let target = narrow_mut::<T>(method, target)?;
                func(target);
                Ok(())
            },
        ))
    }
}
