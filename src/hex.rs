use crate::float::Float;

/// Hex mantissa accumulation: the first 16 significant hex digits are
/// kept, anything non-zero after that only marks truncation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexAccumulator {
    pub mantissa: u64,
    pub mantissa_digits: i64,
    pub significant_digits: i64,
    /// Position of the hex point, in hex digits, relative to the first significant digit.
    pub decimal_point: i64,
    pub truncated: bool,
}

impl HexAccumulator {
    pub const MAX_MANTISSA_DIGITS: i64 = 16;

    #[inline]
    pub fn push(&mut self, digit: u8, fraction: bool) {
        if digit == 0 && self.significant_digits == 0 {
            if fraction {
                self.decimal_point -= 1;
            }
            return;
        }
        self.significant_digits += 1;
        if !fraction {
            self.decimal_point += 1;
        }
        if self.mantissa_digits < Self::MAX_MANTISSA_DIGITS {
            self.mantissa = (self.mantissa << 4) | digit as u64;
            self.mantissa_digits += 1;
        } else if digit != 0 {
            self.truncated = true;
        }
    }

    /// Power of two applied to `mantissa`, given the explicit `p` exponent.
    #[inline]
    pub fn exponent(&self, explicit: i64) -> i64 {
        if self.mantissa == 0 {
            0
        } else {
            4 * (self.decimal_point - self.mantissa_digits) + explicit
        }
    }
}

#[inline]
pub fn hex_digit_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Rounds `mantissa * 2^exp2` to `F`, half-to-even, with `truncated`
/// standing for non-zero bits below the mantissa. The flag is set when
/// the result overflowed to infinity.
pub fn hex_to_float<F: Float>(
    mut mantissa: u64,
    mut exp2: i64,
    negative: bool,
    truncated: bool,
) -> (F, bool) {
    let mbits = F::MANTISSA_EXPLICIT_BITS as u32;
    let ebits = F::EXPONENT_BITS as u32;
    let bias = -(F::EXPONENT_BIAS as i64);
    let max_exp = (1_i64 << ebits) + bias - 2;
    let min_exp = bias + 1;

    exp2 += mbits as i64;

    // leading one, mantissa bits, then two rounding bits
    while mantissa != 0 && mantissa >> (mbits + 2) == 0 {
        mantissa <<= 1;
        exp2 -= 1;
    }
    if truncated {
        mantissa |= 1;
    }
    while mantissa >> (mbits + 3) != 0 {
        mantissa = (mantissa >> 1) | (mantissa & 1);
        exp2 += 1;
    }

    // subnormal range
    while mantissa > 1 && exp2 < min_exp - 2 {
        mantissa = (mantissa >> 1) | (mantissa & 1);
        exp2 += 1;
    }

    let mut round = mantissa & 3;
    mantissa >>= 2;
    round |= mantissa & 1;
    exp2 += 2;
    if round == 3 {
        mantissa += 1;
        if mantissa == 1 << (mbits + 1) {
            mantissa >>= 1;
            exp2 += 1;
        }
    }

    if mantissa >> mbits == 0 {
        exp2 = bias;
    }
    let mut overflow = false;
    if exp2 > max_exp {
        mantissa = 1 << mbits;
        exp2 = max_exp + 1;
        overflow = true;
    }

    let mut bits = mantissa & ((1 << mbits) - 1);
    bits |= (((exp2 - bias) as u64) & ((1 << ebits) - 1)) << mbits;
    if negative {
        bits |= 1 << F::SIGN_INDEX;
    }
    (F::from_u64_bits(bits), overflow)
}
