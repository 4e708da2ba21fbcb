/// Implement [`TypePath`](crate::info::TypePath) for a non-generic type.
///
/// - `impl_type_path!(Ident)`: a built-in type, the path is the bare name.
/// - `impl_type_path!((in path::to::module) Ident)`: a type defined in the given module.
/// - `impl_type_path!((in path::to::module as Alias) Ident)`: as above,
///   but reflected under the name `Alias`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// pub struct Point { pub x: i32 }
/// pub struct Instant;
///
/// vc_reflect::impl_type_path!((in demo::shapes) Point);
/// vc_reflect::impl_type_path!((in demo::time as Tick) Instant);
///
/// assert_eq!(Point::type_path(), "demo::shapes::Point");
/// assert_eq!(Instant::type_path(), "demo::time::Tick");
/// ```
#[macro_export]
macro_rules! impl_type_path {
    ($ty:ident) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::stringify!($ty)
            }
        }
    };
    ((in $first:ident $(:: $rest:ident)*) $ty:ident) => {
        $crate::impl_type_path!((in $first $(:: $rest)* as $ty) $ty);
    };
    ((in $first:ident $(:: $rest:ident)* as $alias:ident) $ty:ident) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(
                    ::core::stringify!($first),
                    $("::", ::core::stringify!($rest),)*
                    "::",
                    ::core::stringify!($alias),
                )
            }
        }
    };
}
