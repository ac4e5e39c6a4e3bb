use crate::float::Float;

/// Exact scalar conversion of `mantissa * 10^exp10`, Go's `atof64exact`:
/// one correctly rounded multiply or divide by an exactly representable
/// power of ten, with the integer fitting in the explicit mantissa bits.
#[inline]
pub fn exact<F: Float>(mantissa: u64, exp10: i64, negative: bool) -> Option<F> {
    if mantissa >> F::MANTISSA_EXPLICIT_BITS != 0 {
        return None;
    }
    scale(mantissa, exp10, negative)
}

/// Widened exact conversion: trailing zero digits of a mantissa beyond
/// `2^(mantissa_bits + 1)` are folded into the exponent first. Declines
/// unless the reduction drops only zeros and the result is a single
/// exact scaling.
#[inline]
pub fn extended<F: Float>(
    mut mantissa: u64,
    mut exp10: i64,
    negative: bool,
    many_digits: bool,
) -> Option<F> {
    if many_digits || mantissa == 0 {
        return None;
    }
    while mantissa > F::MAX_MANTISSA_FAST_PATH {
        let (q, r) = (mantissa / 10, mantissa % 10);
        if r != 0 {
            // rounding would be inexact, leave it to the slower tiers
            return None;
        }
        mantissa = q;
        exp10 += 1;
    }
    scale(mantissa, exp10, negative)
}

#[inline]
fn scale<F: Float>(mantissa: u64, mut exp10: i64, negative: bool) -> Option<F> {
    let mut f = F::from_u64(mantissa);
    if negative {
        f = -f;
    }
    if exp10 == 0 {
        return Some(f);
    }
    if exp10 > 0 && exp10 <= F::MAX_EXPONENT_DISGUISED_FAST_PATH {
        if exp10 > F::MAX_EXPONENT_FAST_PATH {
            f = f * F::pow10_fast_path((exp10 - F::MAX_EXPONENT_FAST_PATH) as _);
            exp10 = F::MAX_EXPONENT_FAST_PATH;
        }
        let bound = F::max_mantissa_disguised();
        if f > bound || f < -bound {
            return None;
        }
        return Some(f * F::pow10_fast_path(exp10 as _));
    }
    if exp10 < 0 && exp10 >= F::MIN_EXPONENT_FAST_PATH {
        return Some(f / F::pow10_fast_path((-exp10) as _));
    }
    None
}
