use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, TypePath};

// -----------------------------------------------------------------------------
// Reflect

/// A type-erased value passed to and returned from accessors.
///
/// Every `TypePath + Send + Sync` type is `Reflect`. Accessors take their
/// targets and arguments as `dyn Reflect` and recover the concrete type
/// through the checked casts on `dyn Reflect`; a failed cast hands the
/// value back untouched.
///
/// Prefer [`Reflect::ty_id`] over [`Any::type_id`], which on a
/// `Box<dyn Reflect>` names the box rather than its content:
///
/// ```
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let value: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert_ne!(value.type_id(), TypeId::of::<i32>());
/// assert_eq!(value.ty_id(), TypeId::of::<i32>());
/// ```
pub trait Reflect: DynamicTypePath + Send + Sync + Any {
    /// Boxes `self` as a `dyn Reflect`.
    #[inline]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

impl<T: TypePath + Send + Sync> Reflect for T {}

impl dyn Reflect {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Borrows the underlying value as a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let value: &dyn Reflect = &10_u8;
    ///
    /// assert_eq!(value.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(value.downcast_ref::<i8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Mutably borrows the underlying value as a `T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Converts the box into a `Box<T>`, or returns it unchanged.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Moves the `T` out of the box, or returns the box unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let value = String::from("vc").into_boxed_reflect();
    ///
    /// let value = value.take::<u32>().unwrap_err();
    /// assert_eq!(value.take::<String>().unwrap(), "vc");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

// -----------------------------------------------------------------------------
// Tests
