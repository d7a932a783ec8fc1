//! Scalar candidates: never iterable, expose nothing.

use super::Shape;
use crate::Token;

macro_rules! impl_scalar_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Shape for $ty {
                #[inline]
                fn is_iterable(&self) -> bool {
                    false
                }

                #[inline]
                fn exposes(&self, _token: Token) -> bool {
                    false
                }
            }
        )+
    };
}

impl_scalar_shape!(
    (),
    bool,
    char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    str,
);

#[cfg(feature = "alloc")]
impl_scalar_shape!(alloc::string::String);
