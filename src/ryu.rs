//! Shortest round-trip decimal digits (Ryū), generic over the binary
//! format. The 128-bit tables are wide enough for both `f64` and `f32`.

use crate::float::Float;
use crate::table::{POW5_BITCOUNT, POW5_INV_BITCOUNT, POW5_INV_SPLIT, POW5_SPLIT};

/// `mantissa * 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingDecimal {
    pub mantissa: u64,
    pub exponent: i32,
}

/// `ceil(log2(5^e))` for `e` in `0..=3528`; 1 for `e == 0`.
#[inline]
fn pow5bits(e: i32) -> i32 {
    (((e as u32) * 1_217_359) >> 19) as i32 + 1
}

/// `floor(log10(2^e))` for `e` in `0..=1650`.
#[inline]
fn log10_pow2(e: i32) -> u32 {
    ((e as u32) * 78_913) >> 18
}

/// `floor(log10(5^e))` for `e` in `0..=2620`.
#[inline]
fn log10_pow5(e: i32) -> u32 {
    ((e as u32) * 732_923) >> 20
}

#[inline]
fn pow5_factor(mut value: u64) -> u32 {
    let mut count = 0;
    while value != 0 && value % 5 == 0 {
        value /= 5;
        count += 1;
    }
    count
}

#[inline]
fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    pow5_factor(value) >= p
}

#[inline]
fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    p < 64 && value & ((1_u64 << p) - 1) == 0
}

#[inline]
fn mul_shift(m: u64, mul: (u64, u64), j: u32) -> u64 {
    let b0 = m as u128 * mul.0 as u128;
    let b2 = m as u128 * mul.1 as u128;
    (((b0 >> 64) + b2) >> (j - 64)) as u64
}

/// Shortest digits that parse back to the finite, non-zero value with
/// the given biased exponent and explicit mantissa bits. Among equally
/// short candidates the one closest to the exact value wins.
pub fn shortest<F: Float>(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal {
    let mbits = F::MANTISSA_EXPLICIT_BITS as i32;
    let bias = (1_i32 << (F::EXPONENT_BITS - 1)) - 1;

    // two extra bits for the interval bounds
    let (e2, m2) = if ieee_exponent == 0 {
        (1 - bias - mbits - 2, ieee_mantissa)
    } else {
        (
            ieee_exponent as i32 - bias - mbits - 2,
            (1_u64 << mbits) | ieee_mantissa,
        )
    };
    debug_assert!(m2 != 0);
    let accept_bounds = m2 & 1 == 0;

    let mv = 4 * m2;
    // the lower neighbor is closer at a binade boundary
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u64;
    let mp = mv + 2;
    let mm = mv - 1 - mm_shift;

    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let e10;
    let mut vr;
    let mut vp;
    let mut vm;
    if e2 >= 0 {
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = (-e2 + q as i32 + k) as u32;
        let mul = POW5_INV_SPLIT[q as usize];
        vr = mul_shift(mv, mul, i);
        vp = mul_shift(mp, mul, i);
        vm = mul_shift(mm, mul, i);
        if q <= 21 {
            // at most one of mp, mv, mm is a multiple of 5
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mm, q);
            } else {
                vp -= multiple_of_power_of_5(mp, q) as u64;
            }
        }
    } else {
        let q = log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - POW5_BITCOUNT;
        let j = (q as i32 - k) as u32;
        let mul = POW5_SPLIT[i as usize];
        vr = mul_shift(mv, mul, j);
        vp = mul_shift(mp, mul, j);
        vm = mul_shift(mm, mul, j);
        if q <= 1 {
            // mv has at least two trailing zero bits
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp -= 1;
            }
        } else if q < 63 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q - 1);
        }
    }

    let mut removed = 0_i32;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        let mut last_removed_digit = 0_u64;
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr % 10;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = vr % 10;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // exactly halfway, round to even
            last_removed_digit = 4;
        }
        let outside = vr == vm && (!accept_bounds || !vm_is_trailing_zeros);
        vr + (outside || last_removed_digit >= 5) as u64
    } else {
        let mut round_up = false;
        if vp / 100 > vm / 100 {
            round_up = vr % 100 >= 50;
            vr /= 100;
            vp /= 100;
            vm /= 100;
            removed += 2;
        }
        while vp / 10 > vm / 10 {
            round_up = vr % 10 >= 5;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        vr + (vr == vm || round_up) as u64
    };

    FloatingDecimal {
        mantissa: output,
        exponent: e10 + removed,
    }
}

/// Number of decimal digits in `v`, at least 1.
#[inline]
pub fn decimal_length(mut v: u64) -> usize {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
