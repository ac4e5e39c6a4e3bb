use crate::error::NumError;
use crate::format::FloatFormat;
use crate::parse::parse_float_fmt;

/// A float prefix of `s` widened to `f64`: value, bytes consumed, overflow.
fn float_prefix(s: &[u8], single: bool) -> Option<(f64, usize, bool)> {
    let fmt = FloatFormat::default();
    if single {
        parse_float_fmt::<f32>(s, fmt)
            .map(|p| (f64::from(p.value), p.len, p.overflow))
    } else {
        parse_float_fmt::<f64>(s, fmt).map(|p| (p.value, p.len, p.overflow))
    }
}

/// Go's `strconv.ParseComplex`: `N`, `Ni` or `N±Ni`, optionally in
/// parentheses, where each `N` is a float literal.
///
/// `bit_size == 64` parses both parts at `f32` precision; any other size
/// uses `f64`. A part that overflows yields a range error carrying the
/// saturated value, unless the input is also malformed.
pub fn parse_complex(s: &str, bit_size: u32) -> Result<(f64, f64), NumError> {
    let single = bit_size == 64;
    let orig = s.as_bytes();
    let mut s = orig;
    if s.len() >= 2 && s[0] == b'(' && s[s.len() - 1] == b')' {
        s = &s[1..s.len() - 1];
    }
    let syntax = || NumError::complex_syntax(orig);
    let finish = |re: f64, im: f64, overflow: bool| {
        if overflow {
            Err(NumError::complex_range(orig, re, im))
        } else {
            Ok((re, im))
        }
    };

    let (re, n, re_overflow) = float_prefix(s, single).ok_or_else(syntax)?;
    let s = &s[n..];
    let imag = match s.split_first() {
        None => return finish(re, 0.0, re_overflow),
        Some((b'i', [])) => return finish(0.0, re, re_overflow),
        // skip the '+' so that "+NaNi" parses, but keep "++" an error
        Some((b'+', rest)) if rest.first().map_or(false, |&c| c != b'+') => rest,
        Some((b'+', _)) | Some((b'-', _)) => s,
        Some(_) => return Err(syntax()),
    };

    let (im, n, im_overflow) = float_prefix(imag, single).ok_or_else(syntax)?;
    if &imag[n..] != b"i" {
        return Err(syntax());
    }
    finish(re, im, re_overflow || im_overflow)
}

/// Go's `strconv.FormatComplex`: `(re±imi)` with both parts formatted
/// as by [`format_float`](crate::format_float).
///
/// # Panics
///
/// If `bit_size` is neither 64 nor 128.
pub fn format_complex(re: f64, im: f64, fmt: char, prec: i32, bit_size: u32) -> String {
    assert!(
        bit_size == 64 || bit_size == 128,
        "invalid bit size {} for a complex number",
        bit_size
    );
    let bits = bit_size >> 1;
    let mut out = vec![b'('];
    crate::append_float(&mut out, re, fmt, prec, bits);
    let start = out.len();
    crate::append_float(&mut out, im, fmt, prec, bits);
    if !matches!(out.get(start), Some(b'+') | Some(b'-')) {
        out.insert(start, b'+');
    }
    out.extend_from_slice(b"i)");
    String::from_utf8(out).unwrap_or_default()
}
