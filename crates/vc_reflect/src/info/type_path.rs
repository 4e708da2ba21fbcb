use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A stable, human readable path naming a reflected type.
///
/// Accessors report mismatched targets and arguments by path, since
/// [`core::any::type_name`] is not guaranteed to be stable. Paths never
/// start with `::`.
///
/// Implement it with [`impl_type_path!`](crate::impl_type_path):
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// struct Point { x: i32 }
///
/// vc_reflect::impl_type_path!((in my_crate::shapes) Point);
///
/// assert_eq!(Point::type_path(), "my_crate::shapes::Point");
/// ```
pub trait TypePath: 'static {
    /// Returns the full path of the type, unique per type.
    fn type_path() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe access to [`TypePath`], for `dyn Reflect` values.
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::info::DynamicTypePath;
///
/// let value: &dyn Reflect = &String::new();
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type: its [`TypeId`] and its path.
///
/// Two `Type`s are equal when their [`TypeId`]s are; the path is only used
/// for display.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Type;
///
/// let ty = Type::of::<u32>();
///
/// assert!(ty.is::<u32>());
/// assert_ne!(ty, Type::of::<i32>());
/// assert_eq!(ty.to_string(), "u32");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
}

impl Type {
    /// Returns the identity of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is the identity of `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Tests
