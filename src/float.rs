use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg};

mod private {
    pub trait Sealed {}
}

#[doc(hidden)]
pub trait Float:
    Sized
    + private::Sealed
    + Div<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + Add<Output = Self>
    + PartialEq
    + PartialOrd
    + Default
    + Clone
    + Copy
    + Debug
    + Display
{
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;
    const ZERO: Self;
    const NEG_ZERO: Self;

    const MANTISSA_EXPLICIT_BITS: usize;
    const EXPONENT_BITS: usize;
    const EXPONENT_BIAS: i32;
    const MIN_EXPONENT_FAST_PATH: i64;
    const MAX_EXPONENT_FAST_PATH: i64;
    const MAX_EXPONENT_DISGUISED_FAST_PATH: i64;
    const MINIMUM_EXPONENT: i32;
    const INFINITE_POWER: i32;
    const SIGN_INDEX: usize;
    /// Largest decimal exponent of a finite value (`1e308` for `f64`).
    const MAX_DECIMAL_EXPONENT: i64;
    /// Decimal exponents below this always round to zero.
    const MIN_DECIMAL_EXPONENT: i64;

    const MAX_MANTISSA_FAST_PATH: u64 = 2_u64 << Self::MANTISSA_EXPLICIT_BITS;

    fn from_u64(v: u64) -> Self;
    fn from_u64_bits(v: u64) -> Self;
    fn to_u64_bits(self) -> u64;
    fn into_f64(self) -> f64;
    fn pow10_fast_path(exponent: usize) -> Self;
    /// Magnitude bound under which one more exact power of ten keeps the product exact.
    fn max_mantissa_disguised() -> Self;

    #[inline]
    fn is_sign_negative_bits(self) -> bool {
        self.to_u64_bits() >> Self::SIGN_INDEX != 0
    }
}

impl private::Sealed for f32 {}

impl Float for f32 {
    const INFINITY: Self = core::f32::INFINITY;
    const NEG_INFINITY: Self = core::f32::NEG_INFINITY;
    const NAN: Self = core::f32::NAN;
    const ZERO: Self = 0.0;
    const NEG_ZERO: Self = -0.0;

    const MANTISSA_EXPLICIT_BITS: usize = 23;
    const EXPONENT_BITS: usize = 8;
    const EXPONENT_BIAS: i32 = 127;
    const MIN_EXPONENT_FAST_PATH: i64 = -10; // assuming FLT_EVAL_METHOD = 0
    const MAX_EXPONENT_FAST_PATH: i64 = 10;
    const MAX_EXPONENT_DISGUISED_FAST_PATH: i64 = 17;
    const MINIMUM_EXPONENT: i32 = -127;
    const INFINITE_POWER: i32 = 0xFF;
    const SIGN_INDEX: usize = 31;
    const MAX_DECIMAL_EXPONENT: i64 = 38;
    const MIN_DECIMAL_EXPONENT: i64 = -46;

    #[inline]
    fn from_u64(v: u64) -> Self {
        v as _
    }

    #[inline]
    fn from_u64_bits(v: u64) -> Self {
        f32::from_bits((v & 0xFFFFFFFF) as u32)
    }

    #[inline]
    fn to_u64_bits(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as _
    }

    #[inline]
    fn pow10_fast_path(exponent: usize) -> Self {
        #[allow(clippy::use_self)]
        const TABLE: [f32; 16] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 0., 0., 0., 0., 0.,
        ];
        TABLE[exponent & 15]
    }

    #[inline]
    fn max_mantissa_disguised() -> Self {
        1e7
    }
}

impl private::Sealed for f64 {}

impl Float for f64 {
    const INFINITY: Self = core::f64::INFINITY;
    const NEG_INFINITY: Self = core::f64::NEG_INFINITY;
    const NAN: Self = core::f64::NAN;
    const ZERO: Self = 0.0;
    const NEG_ZERO: Self = -0.0;

    const MANTISSA_EXPLICIT_BITS: usize = 52;
    const EXPONENT_BITS: usize = 11;
    const EXPONENT_BIAS: i32 = 1023;
    const MIN_EXPONENT_FAST_PATH: i64 = -22; // assuming FLT_EVAL_METHOD = 0
    const MAX_EXPONENT_FAST_PATH: i64 = 22;
    const MAX_EXPONENT_DISGUISED_FAST_PATH: i64 = 37;
    const MINIMUM_EXPONENT: i32 = -1023;
    const INFINITE_POWER: i32 = 0x7FF;
    const SIGN_INDEX: usize = 63;
    const MAX_DECIMAL_EXPONENT: i64 = 308;
    const MIN_DECIMAL_EXPONENT: i64 = -324;

    #[inline]
    fn from_u64(v: u64) -> Self {
        v as _
    }

    #[inline]
    fn from_u64_bits(v: u64) -> Self {
        f64::from_bits(v)
    }

    #[inline]
    fn to_u64_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }

    #[inline]
    fn pow10_fast_path(exponent: usize) -> Self {
        #[allow(clippy::use_self)]
        const TABLE: [f64; 32] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
            1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 0., 0., 0., 0., 0., 0., 0., 0., 0.,
        ];
        TABLE[exponent & 31]
    }

    #[inline]
    fn max_mantissa_disguised() -> Self {
        1e15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10_tables_are_exact() {
        for i in 0..=22 {
            let v = <f64 as Float>::pow10_fast_path(i);
            assert_eq!(v, format!("1e{}", i).parse::<f64>().unwrap());
        }
        for i in 0..=10 {
            let v = <f32 as Float>::pow10_fast_path(i);
            assert_eq!(v, format!("1e{}", i).parse::<f32>().unwrap());
        }
    }

    #[test]
    fn test_bits_roundtrip() {
        assert_eq!(<f64 as Float>::from_u64_bits(1.5f64.to_u64_bits()), 1.5);
        assert_eq!(<f32 as Float>::from_u64_bits(1.5f32.to_u64_bits()), 1.5);
        assert!((-0.0f64).is_sign_negative_bits());
        assert!(!0.0f32.is_sign_negative_bits());
    }
}
