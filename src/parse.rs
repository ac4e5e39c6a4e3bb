use tracing::trace;

use crate::binary::compute_float;
use crate::classify::{classify, Pattern};
use crate::common::AdjustedMantissa;
use crate::exact::{exact, extended};
use crate::float::Float;
use crate::format::FloatFormat;
use crate::fsa::{parse_components, ParsedComponents, Special};
use crate::hex::hex_to_float;
use crate::number::{parse_direct, parse_simple, Conversion, Number, LONG_DECIMAL_LEN};
use crate::simple::parse_long_mantissa;

/// A successfully lexed prefix and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<F> {
    pub value: F,
    /// Bytes of input consumed.
    pub len: usize,
    /// The literal is finite but too large; `value` is the saturated infinity.
    pub overflow: bool,
}

/// Eisel-Lemire on the accumulated digits. With truncated digits the
/// true value lies between `mantissa` and `mantissa + 1`, so both must
/// round the same way.
#[inline]
fn lemire<F: Float>(num: &Number) -> Option<AdjustedMantissa> {
    let am = compute_float::<F>(num.exponent, num.mantissa)?;
    if num.many_digits && compute_float::<F>(num.exponent, num.mantissa + 1)? != am {
        return None;
    }
    Some(am)
}

#[inline]
fn to_float<F: Float>(am: AdjustedMantissa, negative: bool) -> F {
    let mut word = am.mantissa;
    word |= (am.power2 as u64) << F::MANTISSA_EXPLICIT_BITS;
    if negative {
        word |= 1_u64 << F::SIGN_INDEX;
    }
    F::from_u64_bits(word)
}

/// Cheap tiers; they only ever accept a whole-input decimal literal.
#[inline]
pub fn parse_fast<F: Float>(s: &[u8]) -> Option<F> {
    if let Conversion::Done(value) = parse_direct::<F>(s) {
        return Some(value);
    }
    let conversion = match classify(s) {
        Pattern::Simple => parse_simple::<F>(s),
        Pattern::Complex if LONG_DECIMAL_LEN.contains(&s.len()) => parse_simple::<F>(s),
        Pattern::Complex => Conversion::Decline,
    };
    match conversion {
        Conversion::Done(value) => Some(value),
        Conversion::Retry(num) => lemire::<F>(&num).map(|am| to_float(am, num.negative)),
        Conversion::Decline => None,
    }
}

/// Parses the longest valid prefix of `s`; `None` is a syntax error.
#[inline]
pub fn parse_float_fmt<F: Float>(s: &[u8], fmt: FloatFormat) -> Option<Parsed<F>> {
    if let Some(value) = parse_fast::<F>(s) {
        return Some(Parsed {
            value,
            len: s.len(),
            overflow: false,
        });
    }
    parse_slow(s, fmt)
}

#[cold]
fn parse_slow<F: Float>(s: &[u8], fmt: FloatFormat) -> Option<Parsed<F>> {
    trace!(len = s.len(), "fast tiers declined, running automaton");
    let (mut pc, len) = parse_components(s, fmt)?;
    let (value, overflow) = finalize::<F>(&mut pc);
    Some(Parsed {
        value,
        len,
        overflow,
    })
}

/// Converts lexed components to `F`; the flag reports overflow to infinity.
pub fn finalize<F: Float>(pc: &mut ParsedComponents) -> (F, bool) {
    let negative = pc.negative;
    let (zero, inf) = if negative {
        (F::NEG_ZERO, F::NEG_INFINITY)
    } else {
        (F::ZERO, F::INFINITY)
    };
    match pc.special {
        Special::Nan => return (F::NAN, false),
        Special::Inf => return (inf, false),
        Special::None => {}
    }
    if pc.is_hex {
        let (value, overflow) =
            hex_to_float::<F>(pc.mantissa, pc.exponent, negative, pc.many_digits);
        if overflow {
            trace!("hex literal out of range");
        }
        return (value, overflow);
    }
    if pc.mantissa == 0 {
        return (zero, false);
    }

    let sci = pc.scientific_exponent();
    if sci > F::MAX_DECIMAL_EXPONENT {
        trace!(exponent = sci, "decimal literal out of range");
        return (inf, true);
    }
    if sci < F::MIN_DECIMAL_EXPONENT {
        return (zero, false);
    }

    let num = Number {
        exponent: pc.exponent,
        mantissa: pc.mantissa,
        negative,
        many_digits: pc.many_digits,
    };
    if let Some(am) = lemire::<F>(&num) {
        return (to_float(am, negative), false);
    }
    if !num.many_digits {
        if let Some(value) = exact::<F>(num.mantissa, num.exponent, negative) {
            return (value, false);
        }
    }
    if let Some(value) = extended::<F>(num.mantissa, num.exponent, negative, num.many_digits) {
        return (value, false);
    }

    trace!(
        digits = pc.decimal.num_digits,
        truncated = pc.decimal.truncated,
        "decimal fallback"
    );
    let am = parse_long_mantissa::<F>(&mut pc.decimal);
    let overflow = am.power2 == F::INFINITE_POWER;
    if overflow {
        trace!(exponent = sci, "decimal literal out of range");
    }
    (to_float(am, negative), overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full<F: Float>(s: &str) -> Option<Parsed<F>> {
        parse_float_fmt::<F>(s.as_bytes(), FloatFormat::default())
    }

    #[test]
    fn test_fast_tiers() {
        assert_eq!(parse_fast::<f64>(b"42"), Some(42.0));
        assert_eq!(parse_fast::<f64>(b"1.25e-2"), Some(0.0125));
        assert_eq!(parse_fast::<f64>(b"1.5000000000000000000"), Some(1.5));
        assert_eq!(parse_fast::<f32>(b"0.5000000000000000000"), Some(0.5));
        // exact tie in the 128-bit product, left to the automaton
        assert_eq!(parse_fast::<f64>(b"1e23"), None);
        assert_eq!(full::<f64>("1e23").unwrap().value, 1e23);
        assert_eq!(parse_fast::<f32>(b"3.4028235e38"), Some(f32::MAX));
        let long = "1.2345678901234567890123456789";
        assert_eq!(parse_fast::<f64>(long.as_bytes()), long.parse::<f64>().ok());
        assert_eq!(parse_fast::<f64>(b"0x1p0"), None);
        assert_eq!(parse_fast::<f64>(b"1_0"), None);
        assert_eq!(parse_fast::<f64>(b"1e400"), None);
        assert_eq!(parse_fast::<f64>(b"5e-324"), None);
    }

    #[test]
    fn test_finalize_ranges() {
        let p = full::<f64>("1e400").unwrap();
        assert!(p.overflow);
        assert_eq!(p.value, f64::INFINITY);
        let p = full::<f64>("-1.7976931348623159e308").unwrap();
        assert!(p.overflow);
        assert_eq!(p.value, f64::NEG_INFINITY);
        let p = full::<f64>("1.7976931348623157e308").unwrap();
        assert!(!p.overflow);
        assert_eq!(p.value, f64::MAX);
        let p = full::<f64>("-1e-400").unwrap();
        assert!(!p.overflow);
        assert!(p.value == 0.0 && p.value.is_sign_negative());
        assert_eq!(full::<f64>("4.9e-324").unwrap().value, 5e-324);
        assert_eq!(full::<f64>("2e-324").unwrap().value, 0.0);
        assert!(full::<f32>("3.5e38").unwrap().overflow);
        assert_eq!(full::<f32>("1e-46").unwrap().value, 0.0);
        assert_eq!(full::<f32>("1e-45").unwrap().value, f32::from_bits(1));
    }

    #[test]
    fn test_slow_paths_agree() {
        for s in &[
            "1.5",
            "123456789012345678901234567890",
            "0.1",
            "2.2250738585072011e-308",
            "9007199254740993",
            "9007199254740993.0000000000000000001",
            "4.9406564584124654e-324",
        ] {
            let fast = full::<f64>(s).unwrap().value;
            let slow = parse_slow::<f64>(s.as_bytes(), FloatFormat::default())
                .unwrap()
                .value;
            assert_eq!(fast.to_bits(), slow.to_bits(), "{}", s);
            assert_eq!(fast, s.parse::<f64>().unwrap(), "{}", s);
        }
    }

    #[quickcheck_macros::quickcheck]
    fn fast_tiers_agree_with_automaton(mantissa: u64, frac: u16, exponent: i16) -> bool {
        let s = format!("{}.{}e{}", mantissa, frac, exponent % 400);
        let slow64 = parse_slow::<f64>(s.as_bytes(), FloatFormat::default()).map(|p| p.value);
        let slow32 = parse_slow::<f32>(s.as_bytes(), FloatFormat::default()).map(|p| p.value);
        let ok64 = parse_fast::<f64>(s.as_bytes()).map_or(true, |v| Some(v) == slow64);
        let ok32 = parse_fast::<f32>(s.as_bytes()).map_or(true, |v| Some(v) == slow32);
        ok64 && ok32
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(full::<f64>("1.5abc").unwrap().len, 3);
        assert_eq!(full::<f64>("0x1p-2").unwrap().value, 0.25);
        assert!(full::<f64>("abc").is_none());
        assert!(full::<f64>("0x1p99999").unwrap().overflow);
    }
}
