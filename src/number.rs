use crate::classify::is_simple_decimal;
use crate::common::{is_8digits, parse_8digits, parse_digits, ByteSlice};
use crate::float::Float;

/// Longest pure-integer literal the direct converter looks at.
pub const MAX_DIRECT_LEN: usize = 16;
/// Most digits the direct converter accepts; keeps the value far below `2^24`.
pub const MAX_DIRECT_DIGITS: usize = 6;
/// Literal length range handled by the long-decimal converter.
pub const LONG_DECIMAL_LEN: core::ops::RangeInclusive<usize> = 25..=100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Number {
    pub exponent: i64,
    pub mantissa: u64,
    pub negative: bool,
    /// Non-zero digits beyond the first 19 significant ones were dropped.
    pub many_digits: bool,
}

impl Number {
    #[inline]
    fn is_fast_path<F: Float>(&self) -> bool {
        F::MIN_EXPONENT_FAST_PATH <= self.exponent
            && self.exponent <= F::MAX_EXPONENT_FAST_PATH
            && self.mantissa <= F::MAX_MANTISSA_FAST_PATH
            && !self.many_digits
    }

    #[inline]
    pub fn try_fast_path<F: Float>(&self) -> Option<F> {
        if self.is_fast_path::<F>() {
            let mut value = F::from_u64(self.mantissa);
            if self.exponent < 0 {
                value = value / F::pow10_fast_path((-self.exponent) as _);
            } else {
                value = value * F::pow10_fast_path(self.exponent as _);
            }
            if self.negative {
                value = -value;
            }
            Some(value)
        } else {
            None
        }
    }
}

/// Outcome of a cheap conversion tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conversion<F> {
    /// Final, correctly rounded value.
    Done(F),
    /// Digits were extracted but rounding is not guaranteed here.
    Retry(Number),
    /// The literal is not in this tier's grammar.
    Decline,
}

/// Running state of decimal mantissa accumulation, shared by the fast
/// tiers and the automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitAccumulator {
    pub mantissa: u64,
    pub mantissa_digits: usize,
    pub significant_digits: usize,
    /// Position of the decimal point relative to the first significant digit.
    pub decimal_point: i64,
    pub truncated: bool,
}

impl DigitAccumulator {
    pub const MAX_MANTISSA_DIGITS: usize = 19;

    /// Adds one digit; returns `false` for a leading zero, which only
    /// moves the decimal point.
    #[inline]
    pub fn push(&mut self, digit: u8, fraction: bool) -> bool {
        if digit == 0 && self.significant_digits == 0 {
            if fraction {
                self.decimal_point -= 1;
            }
            return false;
        }
        self.significant_digits += 1;
        if !fraction {
            self.decimal_point += 1;
        }
        if self.mantissa_digits < Self::MAX_MANTISSA_DIGITS {
            self.mantissa = self.mantissa * 10 + digit as u64;
            self.mantissa_digits += 1;
        } else if digit != 0 {
            self.truncated = true;
        }
        true
    }

    /// Adds eight fraction digits at once; only valid after the first
    /// significant digit and while they all fit in the mantissa.
    #[inline]
    fn push_fraction_8digits(&mut self, v: u64) {
        debug_assert!(self.significant_digits > 0);
        debug_assert!(self.mantissa_digits + 8 <= Self::MAX_MANTISSA_DIGITS);
        self.mantissa = self.mantissa * 1_0000_0000 + parse_8digits(v);
        self.mantissa_digits += 8;
        self.significant_digits += 8;
    }

    /// Power of ten applied to `mantissa`, given the explicit exponent.
    #[inline]
    pub fn exponent(&self, explicit: i64) -> i64 {
        if self.mantissa == 0 {
            0
        } else {
            self.decimal_point - self.mantissa_digits as i64 + explicit
        }
    }
}

/// Saturating accumulation of an exponent, same cap as Go's `readFloat`.
#[inline]
pub fn push_exponent_digit(exp: &mut i64, digit: u8) {
    if *exp < 10_000 {
        *exp = *exp * 10 + digit as i64;
    }
}

#[inline]
fn parse_fraction(s: &mut &[u8], acc: &mut DigitAccumulator) {
    if cfg!(target_endian = "little") {
        while acc.significant_digits > 0
            && acc.mantissa_digits + 8 <= DigitAccumulator::MAX_MANTISSA_DIGITS
        {
            match s.try_read_u64() {
                Some(v) if is_8digits(v) => {
                    acc.push_fraction_8digits(v);
                    *s = s.advance(8);
                }
                _ => break,
            }
        }
    }
    parse_digits(s, |digit| {
        acc.push(digit, true);
    });
}

/// Decomposes a literal matching the simple decimal pattern; `None` otherwise.
#[inline]
pub fn parse_number(s: &[u8]) -> Option<Number> {
    if !is_simple_decimal(s) {
        return None;
    }
    let mut s = s;
    let negative = s.check_first(b'-');
    if s.check_first2(b'-', b'+') {
        s = s.advance(1);
    }

    let mut acc = DigitAccumulator::default();
    parse_digits(&mut s, |digit| {
        acc.push(digit, false);
    });
    if s.check_first(b'.') {
        s = s.advance(1);
        parse_fraction(&mut s, &mut acc);
    }

    let mut exp_num = 0i64;
    if s.check_first2(b'e', b'E') {
        s = s.advance(1);
        let neg_exp = s.check_first(b'-');
        if s.check_first2(b'-', b'+') {
            s = s.advance(1);
        }
        parse_digits(&mut s, |digit| push_exponent_digit(&mut exp_num, digit));
        if neg_exp {
            exp_num = -exp_num;
        }
    }
    debug_assert!(s.is_empty());

    Some(Number {
        exponent: acc.exponent(exp_num),
        mantissa: acc.mantissa,
        negative,
        many_digits: acc.truncated,
    })
}

/// Direct converter: short pure integers, exact by construction.
#[inline]
pub fn parse_direct<F: Float>(s: &[u8]) -> Conversion<F> {
    if s.is_empty() || s.len() > MAX_DIRECT_LEN {
        return Conversion::Decline;
    }
    let negative = s.check_first(b'-');
    let digits = if s.check_first2(b'-', b'+') {
        s.advance(1)
    } else {
        s
    };
    if digits.is_empty()
        || digits.len() > MAX_DIRECT_DIGITS
        || !digits.iter().all(u8::is_ascii_digit)
    {
        return Conversion::Decline;
    }
    let v = digits
        .iter()
        .fold(0u64, |v, &c| v * 10 + (c - b'0') as u64);
    let value = F::from_u64(v);
    Conversion::Done(if negative { -value } else { value })
}

/// Simple and long-decimal converter: exact fast path, else hand the
/// extracted digits to Eisel-Lemire.
#[inline]
pub fn parse_simple<F: Float>(s: &[u8]) -> Conversion<F> {
    match parse_number(s) {
        Some(num) => match num.try_fast_path::<F>() {
            Some(value) => Conversion::Done(value),
            None => Conversion::Retry(num),
        },
        None => Conversion::Decline,
    }
}
