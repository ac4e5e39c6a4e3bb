use crate::common::ByteSlice;

/// Longest literal the classifier will tag as [`Pattern::Simple`].
pub const MAX_SIMPLE_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `[-+]?[0-9]+(\.[0-9]*)?([eE][-+]?[0-9]+)?`, at most `MAX_SIMPLE_LEN` bytes.
    Simple,
    /// Anything else: hex, underscores, inf/nan, stray bytes, long inputs.
    Complex,
}

#[inline]
pub fn classify(s: &[u8]) -> Pattern {
    if s.is_empty() || s.len() > MAX_SIMPLE_LEN || !is_simple_decimal(s) {
        Pattern::Complex
    } else {
        Pattern::Simple
    }
}

#[inline]
fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Whether the whole input is a plain decimal literal with a leading digit.
#[inline]
pub fn is_simple_decimal(mut s: &[u8]) -> bool {
    if s.check_first2(b'+', b'-') {
        s = s.advance(1);
    }
    let n = count_digits(s);
    if n == 0 {
        return false;
    }
    s = s.advance(n);
    if s.check_first(b'.') {
        s = s.advance(1);
        s = s.advance(count_digits(s));
    }
    if s.check_first2(b'e', b'E') {
        s = s.advance(1);
        if s.check_first2(b'+', b'-') {
            s = s.advance(1);
        }
        let n = count_digits(s);
        if n == 0 {
            return false;
        }
        s = s.advance(n);
    }
    s.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        for s in &[
            "0",
            "1",
            "-1",
            "+12",
            "1.",
            "1.5",
            "-0.25",
            "1e5",
            "1E+5",
            "12.5e-10",
            "123456789012345678901234",
        ] {
            assert_eq!(classify(s.as_bytes()), Pattern::Simple, "{}", s);
        }
    }

    #[test]
    fn test_complex() {
        for s in &[
            "",
            "+",
            "-",
            ".5",
            "1.2.3",
            "1_000",
            "0x1p0",
            "inf",
            "-Infinity",
            "nan",
            "1e",
            "1e+",
            "1ee5",
            " 1",
            "1 ",
            "1,5",
            "1.5x",
            "1234567890123456789012345",
        ] {
            assert_eq!(classify(s.as_bytes()), Pattern::Complex, "{:?}", s);
        }
    }
}
