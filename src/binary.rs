use crate::common::AdjustedMantissa;
use crate::float::Float;
use crate::table::{LARGEST_POWER_OF_FIVE, POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

/// Eisel-Lemire: the correctly rounded `w * 10^q`, or `None` when the
/// 128-bit approximation cannot decide the rounding (or the result is
/// subnormal or infinite) and the caller has to use a slower tier.
///
/// `power2` of the result is the biased IEEE exponent.
#[inline]
pub fn compute_float<F: Float>(q: i64, mut w: u64) -> Option<AdjustedMantissa> {
    if w == 0 {
        return Some(AdjustedMantissa::zero_pow2(0));
    }
    if q < SMALLEST_POWER_OF_FIVE as i64 || q > LARGEST_POWER_OF_FIVE as i64 {
        return None;
    }
    // low bits below the 2 extra rounding bits of the high word
    let shift = 64 - F::MANTISSA_EXPLICIT_BITS as u32 - 3;
    let mask = (1_u64 << shift) - 1;

    let lz = w.leading_zeros();
    w <<= lz;
    let mut power2 = power(q) + 64 + F::EXPONENT_BIAS as i64 - lz as i64;

    let (hi5, lo5) = POWER_OF_FIVE_128[(q - SMALLEST_POWER_OF_FIVE as i64) as usize];
    let (mut x_lo, mut x_hi) = full_multiplication(w, hi5);
    if x_hi & mask == mask && x_lo.wrapping_add(w) < w {
        // wider approximation
        let (y_lo, y_hi) = full_multiplication(w, lo5);
        let mut merged_hi = x_hi;
        let merged_lo = x_lo.wrapping_add(y_hi);
        if merged_lo < x_lo {
            merged_hi += 1;
        }
        if merged_hi & mask == mask && merged_lo.wrapping_add(1) == 0 && y_lo.wrapping_add(w) < w {
            return None;
        }
        x_hi = merged_hi;
        x_lo = merged_lo;
    }

    let msb = x_hi >> 63;
    let mut mantissa = x_hi >> (msb as u32 + shift);
    power2 -= (1 ^ msb) as i64;

    // exactly halfway, can't tell which way to round
    if x_lo == 0 && x_hi & mask == 0 && mantissa & 3 == 1 {
        return None;
    }

    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >> (F::MANTISSA_EXPLICIT_BITS + 1) > 0 {
        mantissa >>= 1;
        power2 += 1;
    }
    if power2 <= 0 || power2 >= F::INFINITE_POWER as i64 {
        return None;
    }
    mantissa &= (1_u64 << F::MANTISSA_EXPLICIT_BITS) - 1;
    Some(AdjustedMantissa {
        mantissa,
        power2: power2 as i32,
    })
}

/// `floor(q * log2(10))`, exact over the table range.
#[inline]
fn power(q: i64) -> i64 {
    (217_706 * q) >> 16
}

#[inline]
pub fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_f64(am: AdjustedMantissa) -> f64 {
        f64::from_bits(am.mantissa | (am.power2 as u64) << 52)
    }

    #[test]
    fn test_full_multiplication() {
        fn check(a: u64, b: u64, lo: u64, hi: u64) {
            assert_eq!(full_multiplication(a, b), (lo, hi));
            assert_eq!(full_multiplication(b, a), (lo, hi));
        }
        check(1 << 0, 1 << 0, 1, 0);
        check(1 << 0, 1 << 63, 1 << 63, 0);
        check(1 << 1, 1 << 63, 0, 1);
        check(1 << 63, 1 << 0, 1 << 63, 0);
        check(1 << 63, 1 << 1, 0, 1);
        check(1 << 63, 1 << 2, 0, 2);
        check(1 << 63, 1 << 63, 0, 1 << 62);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(0), 0);
        assert_eq!(power(1), 3);
        assert_eq!(power(-1), -4);
        assert_eq!(power(308), 1023);
        assert_eq!(power(-348), -1157);
    }

    #[test]
    fn test_compute_float_f64() {
        let check = |w: u64, q: i64, expected: f64| {
            let am = compute_float::<f64>(q, w).unwrap();
            assert_eq!(to_f64(am), expected);
        };
        check(1, 0, 1.0);
        check(15, -1, 1.5);
        check(1, 22, 1e22);
        check(17976931348623157, 292, 1.7976931348623157e308);
        check(22250738585072014, -324, 2.2250738585072014e-308);
        check(12345678901234567890, -10, 1234567890.1234567890);
    }

    #[test]
    fn test_compute_float_declines() {
        // out of the table range
        assert_eq!(compute_float::<f64>(-400, 1), None);
        assert_eq!(compute_float::<f64>(400, 1), None);
        // overflow
        assert_eq!(compute_float::<f64>(309, 1), None);
        // subnormal
        assert_eq!(compute_float::<f64>(-320, 1), None);
        // 1e23 is an exact product ending in a tie bit
        assert_eq!(compute_float::<f64>(23, 1), None);
        // exactly halfway between 2^53 and 2^53 + 2
        assert_eq!(compute_float::<f64>(0, 9007199254740993), None);
        assert_eq!(compute_float::<f64>(0, 0), Some(AdjustedMantissa::zero_pow2(0)));
    }

    #[test]
    fn test_exact_decimals_decide() {
        // 1.5 written with 2..=20 significant digits
        for q in 1..=19_i64 {
            let w = 15 * 10_u64.pow(q as u32 - 1);
            let am = compute_float::<f64>(-q, w).unwrap();
            assert_eq!(to_f64(am), 1.5, "q = -{}", q);
            let am = compute_float::<f32>(-q, w).unwrap();
            assert_eq!(f32::from_bits((am.mantissa | (am.power2 as u64) << 23) as u32), 1.5);
        }
        for w in 1..10_000 {
            assert!(compute_float::<f64>(-1, w).is_some(), "{}e-1", w);
        }
    }

    #[test]
    fn test_power_of_five_table() {
        // rows for q >= 0 are 5^q normalized to 128 bits, truncated
        for q in 0..=55 {
            let p = 5_u128.pow(q as u32);
            let norm = p << p.leading_zeros();
            let (hi, lo) = POWER_OF_FIVE_128[(q - SMALLEST_POWER_OF_FIVE) as usize];
            assert_eq!(((hi as u128) << 64) | lo as u128, norm, "5^{}", q);
        }
        // rows for q < 0 round 2^b / 5^-q up, so row * 5^-q just exceeds a power of two
        let mut p = 5_u128;
        for q in 1..=27 {
            let (hi, lo) = POWER_OF_FIVE_128[(-q - SMALLEST_POWER_OF_FIVE) as usize];
            let row = ((hi as u128) << 64) | lo as u128;
            let (prod_lo, prod_hi) = wide_mul(row, p);
            let (less_lo, less_hi) = wide_mul(row - 1, p);
            assert!(prod_lo != 0 && prod_hi.is_power_of_two(), "5^-{}", q);
            assert!(less_hi < prod_hi || (less_hi == prod_hi && less_lo == 0), "5^-{}", q);
            p *= 5;
        }
    }

    /// `a * b` for `b < 2^64` as `(low 128 bits, high 128 bits)`.
    fn wide_mul(a: u128, b: u128) -> (u128, u128) {
        let lo = (a as u64 as u128) * b;
        let hi = (a >> 64) * b + (lo >> 64);
        ((hi << 64) | (lo as u64 as u128), hi >> 64)
    }

    #[test]
    fn test_compute_float_f32() {
        let am = compute_float::<f32>(-1, 15).unwrap();
        assert_eq!(f32::from_bits((am.mantissa | (am.power2 as u64) << 23) as u32), 1.5);
        let am = compute_float::<f32>(31, 34028234).unwrap();
        let v = f32::from_bits((am.mantissa | (am.power2 as u64) << 23) as u32);
        assert_eq!(v, f32::MAX);
        assert_eq!(compute_float::<f32>(39, 1), None);
    }
}
