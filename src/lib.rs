//! Float parsing and formatting with the semantics of Go's `strconv`.
//!
//! Parsing accepts decimal literals, hexadecimal floats (`0x1.8p3`), `inf`,
//! `infinity` and `nan` (case-insensitive) and `_` digit separators, exactly
//! as Go's `ParseFloat` does, and returns the correctly rounded value.
//! Common inputs are resolved by cheap tiers (direct integers, short
//! decimals, Eisel-Lemire); everything else goes through a table-driven
//! lexer and an exact decimal fallback.
//!
//! Formatting reproduces `FormatFloat` / `AppendFloat` for the `b e E f g G
//! x X` modes. Shortest output (`prec < 0`) uses Ryū. Complex numbers in
//! the `(a+bi)` form are handled by [`parse_complex`] and [`format_complex`].
//!
//! ```
//! use fast_strconv::FastFloat;
//!
//! assert_eq!(f64::parse_float("1.5e3").unwrap(), 1500.0);
//! assert_eq!(f64::parse_float("0x1p-2").unwrap(), 0.25);
//! assert_eq!(f64::parse_float_partial("12.5kg").unwrap(), (12.5, 4));
//! assert_eq!(0.1_f64.format_float('e', -1), "1e-01");
//!
//! let err = fast_strconv::parse_float("1e400", 64).unwrap_err();
//! assert_eq!(err.to_string(), r#"strconv.ParseFloat: parsing "1e400": value out of range"#);
//! ```

mod binary;
mod classify;
mod common;
mod complex;
mod decimal;
mod error;
mod exact;
mod float;
mod format;
mod fsa;
mod ftoa;
mod hex;
mod number;
mod parse;
mod ryu;
mod simple;
mod table;

pub use complex::{format_complex, parse_complex};
pub use error::{ErrorKind, NumError};
pub use format::FloatFormat;

/// Result type alias for the parsing functions.
pub type Result<T> = std::result::Result<T, NumError>;

/// Trait for numerical float types that can be parsed from and formatted to text.
pub trait FastFloat: float::Float {
    /// Parse a float number from string (full).
    ///
    /// This method parses the entire string, returning a syntax error either if the
    /// string doesn't start with a valid float number, or if any characters are left
    /// remaining unparsed, and a range error if the number overflows.
    #[inline]
    fn parse_float<S: AsRef<[u8]>>(s: S) -> Result<Self> {
        Self::parse_float_fmt(s, FloatFormat::default())
    }

    /// Parse a float number from string (partial).
    ///
    /// This method parses the string greedily while it can and in case of success returns
    /// the parsed number along with the number of characters consumed. Returns an error if
    /// the string doesn't start with a valid float number or the number overflows.
    #[inline]
    fn parse_float_partial<S: AsRef<[u8]>>(s: S) -> Result<(Self, usize)> {
        Self::parse_float_partial_fmt(s, FloatFormat::default())
    }

    /// Parse a float number from string (full, custom format).
    ///
    /// Same as [`parse_float`](crate::FastFloat::parse_float), but allows specifying the
    /// accepted float number format.
    #[inline]
    fn parse_float_fmt<S: AsRef<[u8]>>(s: S, fmt: FloatFormat) -> Result<Self> {
        let s = s.as_ref();
        match parse::parse_float_fmt::<Self>(s, fmt) {
            Some(p) if p.len != s.len() => Err(NumError::syntax(s)),
            Some(p) if p.overflow => Err(NumError::range(s, p.value.into_f64())),
            Some(p) => Ok(p.value),
            None => Err(NumError::syntax(s)),
        }
    }

    /// Parse a float number from string (partial, custom format).
    ///
    /// Same as [`parse_float_partial`](crate::FastFloat::parse_float_partial), but allows
    /// specifying the accepted float number format.
    #[inline]
    fn parse_float_partial_fmt<S: AsRef<[u8]>>(s: S, fmt: FloatFormat) -> Result<(Self, usize)> {
        let s = s.as_ref();
        match parse::parse_float_fmt::<Self>(s, fmt) {
            Some(p) if p.overflow => Err(NumError::range(s, p.value.into_f64())),
            Some(p) => Ok((p.value, p.len)),
            None => Err(NumError::syntax(s)),
        }
    }

    /// Append the text form of the number to `dst`.
    ///
    /// `fmt` is one of `b e E f g G x X`; a negative `prec` selects the shortest
    /// representation that parses back to the same value.
    #[inline]
    fn append_float(self, dst: &mut Vec<u8>, fmt: char, prec: i32) {
        ftoa::append_float(dst, self, fmt, prec)
    }

    /// Format the number as a string, see [`append_float`](crate::FastFloat::append_float).
    #[inline]
    fn format_float(self, fmt: char, prec: i32) -> String {
        ftoa::format_float(self, fmt, prec)
    }
}

impl FastFloat for f32 {}
impl FastFloat for f64 {}

#[inline]
pub fn parse<T: FastFloat, S: AsRef<[u8]>>(s: S) -> Result<T> {
    T::parse_float(s)
}

#[inline]
pub fn parse_fmt<T: FastFloat, S: AsRef<[u8]>>(s: S, fmt: FloatFormat) -> Result<T> {
    T::parse_float_fmt(s, fmt)
}

#[inline]
pub fn parse_partial<T: FastFloat, S: AsRef<[u8]>>(s: S) -> Result<(T, usize)> {
    T::parse_float_partial(s)
}

#[inline]
pub fn parse_partial_fmt<T: FastFloat, S: AsRef<[u8]>>(
    s: S,
    fmt: FloatFormat,
) -> Result<(T, usize)> {
    T::parse_float_partial_fmt(s, fmt)
}

/// Go's `strconv.ParseFloat`.
///
/// With `bit_size == 32` the result is rounded to `f32` precision (once, from the
/// exact decimal value) and widened; any other size parses at `f64` precision.
#[inline]
pub fn parse_float(s: &str, bit_size: u32) -> Result<f64> {
    if bit_size == 32 {
        f32::parse_float(s).map(f64::from)
    } else {
        f64::parse_float(s)
    }
}

/// Go's `strconv.FormatFloat`.
///
/// With `bit_size == 32` the value is first rounded to `f32` and printed with
/// the `f32` shortest digits.
#[inline]
pub fn format_float(v: f64, fmt: char, prec: i32, bit_size: u32) -> String {
    if bit_size == 32 {
        (v as f32).format_float(fmt, prec)
    } else {
        v.format_float(fmt, prec)
    }
}

/// Go's `strconv.AppendFloat`.
#[inline]
pub fn append_float(dst: &mut Vec<u8>, v: f64, fmt: char, prec: i32, bit_size: u32) {
    if bit_size == 32 {
        (v as f32).append_float(dst, fmt, prec)
    } else {
        v.append_float(dst, fmt, prec)
    }
}
