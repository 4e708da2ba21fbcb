use alloc::string::String;
use alloc::vec::Vec;

use crate::info::TypePath;

crate::impl_type_path!(bool);
crate::impl_type_path!(char);
crate::impl_type_path!(f32);
crate::impl_type_path!(f64);
crate::impl_type_path!(i8);
crate::impl_type_path!(i16);
crate::impl_type_path!(i32);
crate::impl_type_path!(i64);
crate::impl_type_path!(i128);
crate::impl_type_path!(isize);
crate::impl_type_path!(u8);
crate::impl_type_path!(u16);
crate::impl_type_path!(u32);
crate::impl_type_path!(u64);
crate::impl_type_path!(u128);
crate::impl_type_path!(usize);

crate::impl_type_path!((in alloc::string) String);

// Actions and setters without a meaningful result return `()`.
impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }
}

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }
}

// `bytes` fields.
impl TypePath for Vec<u8> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::vec::Vec<u8>"
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::info::TypePath;

    #[test]
    fn paths() {
        assert_eq!(i32::type_path(), "i32");
        assert_eq!(<()>::type_path(), "()");
        assert_eq!(<&'static str>::type_path(), "&str");
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
    }
}
