use std::fmt::Write;

use thiserror::Error;

/// Why a conversion failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a valid literal.
    #[error("invalid syntax")]
    Syntax,
    /// The literal is valid but its magnitude is not representable.
    #[error("value out of range")]
    Range,
}

/// A failed conversion, mirroring Go's `strconv.NumError`.
///
/// Range errors carry the saturated result (`±Inf`); syntax errors carry `0`.
/// Errors from [`parse_complex`](crate::parse_complex) carry both parts.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("strconv.{func}: parsing {}: {kind}", quote(.input))]
pub struct NumError {
    func: &'static str,
    input: String,
    #[source]
    kind: ErrorKind,
    value: f64,
    imag: f64,
}

pub(crate) const FN_PARSE_FLOAT: &str = "ParseFloat";
pub(crate) const FN_PARSE_COMPLEX: &str = "ParseComplex";

impl NumError {
    pub(crate) fn syntax(input: &[u8]) -> Self {
        Self {
            func: FN_PARSE_FLOAT,
            input: String::from_utf8_lossy(input).into_owned(),
            kind: ErrorKind::Syntax,
            value: 0.0,
            imag: 0.0,
        }
    }

    pub(crate) fn range(input: &[u8], value: f64) -> Self {
        Self {
            func: FN_PARSE_FLOAT,
            input: String::from_utf8_lossy(input).into_owned(),
            kind: ErrorKind::Range,
            value,
            imag: 0.0,
        }
    }

    pub(crate) fn complex_syntax(input: &[u8]) -> Self {
        Self {
            func: FN_PARSE_COMPLEX,
            ..Self::syntax(input)
        }
    }

    pub(crate) fn complex_range(input: &[u8], re: f64, im: f64) -> Self {
        Self {
            func: FN_PARSE_COMPLEX,
            imag: im,
            ..Self::range(input, re)
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The input that failed to convert.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the failing function, e.g. `ParseFloat`.
    #[inline]
    pub fn func(&self) -> &'static str {
        self.func
    }

    /// Result that accompanies the error: `±Inf` for range errors, `0` otherwise.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `(real, imaginary)` result of a failed `ParseComplex`.
    #[inline]
    pub fn complex_value(&self) -> (f64, f64) {
        (self.value, self.imag)
    }
}

/// Double-quoted, with Go's escapes for quotes, backslashes and
/// non-printable characters.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if (c as u32) < 0x80 && c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = NumError::syntax(b"1x");
        assert_eq!(err.to_string(), r#"strconv.ParseFloat: parsing "1x": invalid syntax"#);
        let err = NumError::range(b"1e400", f64::INFINITY);
        assert_eq!(
            err.to_string(),
            r#"strconv.ParseFloat: parsing "1e400": value out of range"#
        );
        assert_eq!(err.value(), f64::INFINITY);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.func(), "ParseFloat");
        assert_eq!(err.input(), "1e400");
    }

    #[test]
    fn test_complex() {
        let err = NumError::complex_range(b"1e400i", 0.0, f64::INFINITY);
        assert_eq!(
            err.to_string(),
            r#"strconv.ParseComplex: parsing "1e400i": value out of range"#
        );
        assert_eq!(err.complex_value(), (0.0, f64::INFINITY));
        let err = NumError::complex_syntax(b"(");
        assert_eq!(err.func(), "ParseComplex");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.complex_value(), (0.0, 0.0));
    }

    #[test]
    fn test_source() {
        let err = NumError::syntax(b"");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "invalid syntax");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote(""), r#""""#);
        assert_eq!(quote("a\"b\\"), r#""a\"b\\""#);
        assert_eq!(quote("\n\t\0"), r#""\n\t\x00""#);
        assert_eq!(quote("é"), "\"é\"");
    }
}
