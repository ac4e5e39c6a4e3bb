//! Table-driven lexer for the full literal grammar: decimal and hex
//! mantissas, exponents, `_` digit separators, `inf`/`infinity`/`nan`.

use crate::decimal::Decimal;
use crate::format::FloatFormat;
use crate::hex::{hex_digit_value, HexAccumulator};
use crate::number::{push_exponent_digit, DigitAccumulator};

mod state {
    pub const START: u8 = 0;
    pub const SIGN: u8 = 1;
    pub const ZERO: u8 = 2;
    pub const INTEGER: u8 = 3;
    pub const LEAD_DOT: u8 = 4;
    pub const FRACTION: u8 = 5;
    pub const EXPONENT: u8 = 6;
    pub const EXP_SIGN: u8 = 7;
    pub const EXP_DIGITS: u8 = 8;
    pub const HEX_PREFIX: u8 = 9;
    pub const HEX_INTEGER: u8 = 10;
    pub const HEX_LEAD_DOT: u8 = 11;
    pub const HEX_FRACTION: u8 = 12;
    pub const HEX_EXPONENT: u8 = 13;
    pub const HEX_EXP_SIGN: u8 = 14;
    pub const HEX_EXP_DIGITS: u8 = 15;
    pub const I: u8 = 16;
    pub const IN: u8 = 17;
    pub const INF: u8 = 18;
    pub const INFI: u8 = 19;
    pub const INFIN: u8 = 20;
    pub const INFINI: u8 = 21;
    pub const INFINIT: u8 = 22;
    pub const INFINITY: u8 = 23;
    pub const N: u8 = 24;
    pub const NA: u8 = 25;
    pub const NAN: u8 = 26;
    pub const ERROR: u8 = 27;

    pub const COUNT: usize = 28;

    #[inline]
    pub fn is_accepting(s: u8) -> bool {
        matches!(
            s,
            ZERO | INTEGER | FRACTION | EXP_DIGITS | HEX_EXP_DIGITS | INF | INFINITY | NAN
        )
    }
}

mod action {
    pub const NONE: u8 = 0;
    pub const NEGATIVE: u8 = 1;
    pub const INT_DIGIT: u8 = 2;
    pub const FRAC_DIGIT: u8 = 3;
    pub const EXP_NEGATIVE: u8 = 4;
    pub const EXP_DIGIT: u8 = 5;
    pub const HEX_MARKER: u8 = 6;
    pub const HEX_INT_DIGIT: u8 = 7;
    pub const HEX_FRAC_DIGIT: u8 = 8;
    pub const SPECIAL: u8 = 9;
    pub const UNDERSCORE: u8 = 10;
}

struct Tables {
    next: [[u8; 256]; state::COUNT],
    action: [[u8; 256]; state::COUNT],
}

static TABLES: Tables = build_tables();

const fn build_tables() -> Tables {
    use self::action::*;
    use self::state::*;

    let mut next = [[ERROR; 256]; COUNT];
    let mut act = [[NONE; 256]; COUNT];

    macro_rules! on {
        ($from:expr, $byte:expr, $to:expr, $action:expr) => {
            next[$from as usize][$byte as usize] = $to;
            act[$from as usize][$byte as usize] = $action;
        };
    }
    macro_rules! on_range {
        ($from:expr, $lo:expr, $hi:expr, $to:expr, $action:expr) => {
            let mut c = $lo;
            while c <= $hi {
                on!($from, c, $to, $action);
                c += 1;
            }
        };
    }
    macro_rules! on_letter {
        ($from:expr, $lower:expr, $to:expr, $action:expr) => {
            on!($from, $lower, $to, $action);
            on!($from, $lower - 32, $to, $action);
        };
    }
    macro_rules! on_hex_digit {
        ($from:expr, $to:expr, $action:expr) => {
            on_range!($from, b'0', b'9', $to, $action);
            on_range!($from, b'a', b'f', $to, $action);
            on_range!($from, b'A', b'F', $to, $action);
        };
    }

    // mantissa start, optionally signed
    on!(START, b'+', SIGN, NONE);
    on!(START, b'-', SIGN, NEGATIVE);
    let mut s = START;
    while s <= SIGN {
        on!(s, b'0', ZERO, INT_DIGIT);
        on_range!(s, b'1', b'9', INTEGER, INT_DIGIT);
        on!(s, b'.', LEAD_DOT, NONE);
        on_letter!(s, b'i', I, SPECIAL);
        s += 1;
    }
    // only unsigned nan
    on_letter!(START, b'n', N, SPECIAL);

    // decimal mantissa
    on_range!(ZERO, b'0', b'9', INTEGER, INT_DIGIT);
    on!(ZERO, b'.', FRACTION, NONE);
    on_letter!(ZERO, b'e', EXPONENT, NONE);
    on_letter!(ZERO, b'x', HEX_PREFIX, HEX_MARKER);
    on!(ZERO, b'_', INTEGER, UNDERSCORE);
    on_range!(INTEGER, b'0', b'9', INTEGER, INT_DIGIT);
    on!(INTEGER, b'.', FRACTION, NONE);
    on_letter!(INTEGER, b'e', EXPONENT, NONE);
    on!(INTEGER, b'_', INTEGER, UNDERSCORE);
    on_range!(LEAD_DOT, b'0', b'9', FRACTION, FRAC_DIGIT);
    on_range!(FRACTION, b'0', b'9', FRACTION, FRAC_DIGIT);
    on_letter!(FRACTION, b'e', EXPONENT, NONE);
    on!(FRACTION, b'_', FRACTION, UNDERSCORE);

    // decimal exponent
    on!(EXPONENT, b'+', EXP_SIGN, NONE);
    on!(EXPONENT, b'-', EXP_SIGN, EXP_NEGATIVE);
    on_range!(EXPONENT, b'0', b'9', EXP_DIGITS, EXP_DIGIT);
    on_range!(EXP_SIGN, b'0', b'9', EXP_DIGITS, EXP_DIGIT);
    on_range!(EXP_DIGITS, b'0', b'9', EXP_DIGITS, EXP_DIGIT);
    on!(EXP_DIGITS, b'_', EXP_DIGITS, UNDERSCORE);

    // hex mantissa
    on_hex_digit!(HEX_PREFIX, HEX_INTEGER, HEX_INT_DIGIT);
    on!(HEX_PREFIX, b'.', HEX_LEAD_DOT, NONE);
    on!(HEX_PREFIX, b'_', HEX_INTEGER, UNDERSCORE);
    on_hex_digit!(HEX_INTEGER, HEX_INTEGER, HEX_INT_DIGIT);
    on!(HEX_INTEGER, b'.', HEX_FRACTION, NONE);
    on_letter!(HEX_INTEGER, b'p', HEX_EXPONENT, NONE);
    on!(HEX_INTEGER, b'_', HEX_INTEGER, UNDERSCORE);
    on_hex_digit!(HEX_LEAD_DOT, HEX_FRACTION, HEX_FRAC_DIGIT);
    on_hex_digit!(HEX_FRACTION, HEX_FRACTION, HEX_FRAC_DIGIT);
    on_letter!(HEX_FRACTION, b'p', HEX_EXPONENT, NONE);
    on!(HEX_FRACTION, b'_', HEX_FRACTION, UNDERSCORE);

    // binary exponent, mandatory for hex
    on!(HEX_EXPONENT, b'+', HEX_EXP_SIGN, NONE);
    on!(HEX_EXPONENT, b'-', HEX_EXP_SIGN, EXP_NEGATIVE);
    on_range!(HEX_EXPONENT, b'0', b'9', HEX_EXP_DIGITS, EXP_DIGIT);
    on_range!(HEX_EXP_SIGN, b'0', b'9', HEX_EXP_DIGITS, EXP_DIGIT);
    on_range!(HEX_EXP_DIGITS, b'0', b'9', HEX_EXP_DIGITS, EXP_DIGIT);
    on!(HEX_EXP_DIGITS, b'_', HEX_EXP_DIGITS, UNDERSCORE);

    // inf, infinity, nan
    on_letter!(I, b'n', IN, NONE);
    on_letter!(IN, b'f', INF, NONE);
    on_letter!(INF, b'i', INFI, NONE);
    on_letter!(INFI, b'n', INFIN, NONE);
    on_letter!(INFIN, b'i', INFINI, NONE);
    on_letter!(INFINI, b't', INFINIT, NONE);
    on_letter!(INFINIT, b'y', INFINITY, NONE);
    on_letter!(N, b'a', NA, NONE);
    on_letter!(NA, b'n', NAN, NONE);

    Tables { next, action: act }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Special {
    None,
    Nan,
    Inf,
}

/// Normalized form of a literal accepted by the automaton.
#[derive(Clone, Debug)]
pub struct ParsedComponents {
    pub negative: bool,
    pub is_hex: bool,
    pub special: Special,
    /// First 19 significant decimal digits, or first 16 significant hex digits.
    pub mantissa: u64,
    /// A non-zero digit past the mantissa window was seen.
    pub many_digits: bool,
    /// Power of ten (decimal) or of two (hex) applied to `mantissa`.
    pub exponent: i64,
    pub hex_int_digits: usize,
    pub hex_frac_digits: usize,
    /// Every significant decimal digit, up to the buffer capacity.
    pub decimal: Decimal,
}

impl Default for ParsedComponents {
    fn default() -> Self {
        Self {
            negative: false,
            is_hex: false,
            special: Special::None,
            mantissa: 0,
            many_digits: false,
            exponent: 0,
            hex_int_digits: 0,
            hex_frac_digits: 0,
            decimal: Decimal::default(),
        }
    }
}

impl ParsedComponents {
    /// Decimal exponent of the first significant digit (`d.ddd * 10^e`).
    #[inline]
    pub fn scientific_exponent(&self) -> i64 {
        self.decimal.decimal_point as i64 - 1
    }
}

// keeps `decimal_point` arithmetic inside i32 for arbitrarily long inputs
const DECIMAL_POINT_LIMIT: i64 = 1 << 30;

/// Runs the automaton over the longest prefix it accepts. Returns the
/// components and the number of bytes consumed, or `None` when no prefix
/// of `s` is a valid literal under `fmt`.
pub fn parse_components(s: &[u8], fmt: FloatFormat) -> Option<(ParsedComponents, usize)> {
    let mut pc = ParsedComponents::default();
    let mut acc = DigitAccumulator::default();
    let mut hex = HexAccumulator::default();
    let mut exp_num = 0_i64;
    let mut exp_negative = false;
    let mut saw_digits = false;
    let mut saw_underscore = false;

    let mut st = state::START;
    let mut consumed = 0;
    for &c in s {
        let next = TABLES.next[st as usize][c as usize];
        if next == state::ERROR {
            break;
        }
        match TABLES.action[st as usize][c as usize] {
            action::NEGATIVE => pc.negative = true,
            action::INT_DIGIT | action::FRAC_DIGIT => {
                let digit = c - b'0';
                let fraction = next == state::FRACTION;
                saw_digits = true;
                if acc.push(digit, fraction) {
                    pc.decimal.try_add_digit(digit);
                }
            }
            action::EXP_NEGATIVE => exp_negative = true,
            action::EXP_DIGIT => push_exponent_digit(&mut exp_num, c - b'0'),
            action::HEX_MARKER => {
                if !fmt.hex {
                    break;
                }
                pc.is_hex = true;
                saw_digits = false;
            }
            action::HEX_INT_DIGIT => {
                saw_digits = true;
                pc.hex_int_digits += 1;
                hex.push(hex_digit_value(c), false);
            }
            action::HEX_FRAC_DIGIT => {
                saw_digits = true;
                pc.hex_frac_digits += 1;
                hex.push(hex_digit_value(c), true);
            }
            action::SPECIAL => {
                if !fmt.special {
                    break;
                }
            }
            action::UNDERSCORE => {
                if !fmt.underscores {
                    break;
                }
                saw_underscore = true;
            }
            _ => {}
        }
        st = next;
        consumed += 1;
    }

    let sign_len = if s.first().map_or(false, |&c| c == b'+' || c == b'-') {
        1
    } else {
        0
    };
    match st {
        state::INFI..=state::INFINIT => {
            // "inf" followed by an incomplete "inity"
            st = state::INF;
            consumed = sign_len + 3;
        }
        state::HEX_PREFIX if consumed == s.len() => {
            // a bare "0x" is the number zero followed by 'x'
            st = state::ZERO;
            consumed = sign_len + 1;
            pc.is_hex = false;
            saw_digits = true;
        }
        _ => {}
    }
    if !state::is_accepting(st) {
        return None;
    }

    match st {
        state::INF | state::INFINITY => {
            pc.special = Special::Inf;
            return Some((pc, consumed));
        }
        state::NAN => {
            pc.special = Special::Nan;
            return Some((pc, consumed));
        }
        _ => {}
    }
    if !saw_digits || (saw_underscore && !underscore_ok(&s[..consumed])) {
        return None;
    }

    if exp_negative {
        exp_num = -exp_num;
    }
    if pc.is_hex {
        pc.mantissa = hex.mantissa;
        pc.many_digits = hex.truncated;
        pc.exponent = hex.exponent(exp_num);
    } else {
        pc.mantissa = acc.mantissa;
        pc.many_digits = acc.truncated;
        pc.exponent = acc.exponent(exp_num);
        let dp = acc.decimal_point + exp_num;
        let dp = dp.clamp(-DECIMAL_POINT_LIMIT, DECIMAL_POINT_LIMIT);
        pc.decimal.decimal_point = dp as i32;
        pc.decimal.trim();
        if pc.decimal.num_digits == 0 {
            pc.decimal.decimal_point = 0;
        }
    }
    Some((pc, consumed))
}

/// Go's rule for digit separators: every `_` sits between two digits, a
/// `0x` prefix counting as a digit; an optional leading sign is ignored.
pub fn underscore_ok(s: &[u8]) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut s = s;
    if matches!(s.first(), Some(b'+') | Some(b'-')) {
        s = &s[1..];
    }
    let mut saw = Saw::Start;
    let mut hex = false;
    if s.len() >= 2 && s[0] == b'0' && (s[1] | 0x20) == b'x' {
        s = &s[2..];
        saw = Saw::Digit;
        hex = true;
    }
    for &c in s {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if c == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }
    saw != Saw::Underscore
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(s: &str) -> Option<(ParsedComponents, usize)> {
        parse_components(s.as_bytes(), FloatFormat::default())
    }

    fn consumed(s: &str) -> Option<usize> {
        lex(s).map(|(_, n)| n)
    }

    #[test]
    fn test_tables() {
        assert_eq!(TABLES.next[state::START as usize][b'7' as usize], state::INTEGER);
        assert_eq!(TABLES.next[state::SIGN as usize][b'n' as usize], state::ERROR);
        assert_eq!(TABLES.next[state::HEX_INTEGER as usize][b'e' as usize], state::HEX_INTEGER);
        assert_eq!(TABLES.next[state::INTEGER as usize][b'p' as usize], state::ERROR);
        assert_eq!(TABLES.action[state::ZERO as usize][b'X' as usize], action::HEX_MARKER);
        assert_eq!(TABLES.next[state::INFINIT as usize][b'Y' as usize], state::INFINITY);
    }

    #[test]
    fn test_decimal_components() {
        let (pc, n) = lex("-0012.3400e-2").unwrap();
        assert_eq!(n, 13);
        assert!(pc.negative && !pc.is_hex);
        assert_eq!((pc.mantissa, pc.exponent), (123400, -6));
        assert_eq!(pc.decimal.num_digits, 4);
        assert_eq!(pc.decimal.decimal_point, 0);
        assert_eq!(pc.scientific_exponent(), -1);

        let (pc, _) = lex("1_000.000_1").unwrap();
        assert_eq!((pc.mantissa, pc.exponent), (10000001, -4));

        let (pc, _) = lex("0.000").unwrap();
        assert_eq!((pc.mantissa, pc.exponent), (0, 0));
        assert_eq!(pc.decimal.num_digits, 0);
    }

    #[test]
    fn test_long_decimal() {
        let s = format!("0.{}1{}", "0".repeat(400), "7".repeat(900));
        let (pc, n) = lex(&s).unwrap();
        assert_eq!(n, s.len());
        assert!(pc.many_digits);
        assert!(pc.decimal.truncated);
        assert_eq!(pc.decimal.num_digits, Decimal::MAX_DIGITS);
        assert_eq!(pc.decimal.decimal_point, -400);
        assert_eq!(pc.exponent, -400 - 19);
    }

    #[test]
    fn test_hex_components() {
        let (pc, n) = lex("0x1.8p1").unwrap();
        assert_eq!(n, 7);
        assert!(pc.is_hex);
        assert_eq!((pc.mantissa, pc.exponent), (0x18, -3));
        assert_eq!((pc.hex_int_digits, pc.hex_frac_digits), (1, 1));

        let (pc, _) = lex("-0X_1F.Ap-0_1").unwrap();
        assert!(pc.negative);
        assert_eq!((pc.mantissa, pc.exponent), (0x1fa, -5));

        assert_eq!(consumed("0x1"), None);
        assert_eq!(consumed("0x1p"), None);
        assert_eq!(consumed("0x.p1"), None);
        assert_eq!(consumed("0xg"), None);
        assert_eq!(consumed("0x_.p1"), None);
    }

    #[test]
    fn test_special() {
        for &(s, n) in &[
            ("inf", 3),
            ("-Inf", 4),
            ("+INFINITY", 9),
            ("infinit", 3),
            ("-infin", 4),
            ("infinityx", 8),
            ("nan", 3),
            ("NaNx", 3),
        ] {
            assert_eq!(consumed(s), Some(n), "{}", s);
        }
        assert_eq!(lex("-inf").unwrap().0.special, Special::Inf);
        assert_eq!(lex("nAn").unwrap().0.special, Special::Nan);
        for s in &["", "i", "in", "na", "+nan", "-nan"] {
            assert_eq!(consumed(s), None, "{:?}", s);
        }
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(consumed("1.5x"), Some(3));
        assert_eq!(consumed("1.e5"), Some(4));
        assert_eq!(consumed("0x"), Some(1));
        assert_eq!(consumed("-0x"), Some(2));
        assert_eq!(consumed("1p5"), Some(1));
        assert_eq!(consumed("1e"), None);
        assert_eq!(consumed("1e+"), None);
        assert_eq!(consumed("."), None);
        assert_eq!(consumed("+"), None);
        assert_eq!(consumed(""), None);
        assert_eq!(consumed(" 1"), None);
    }

    #[test]
    fn test_underscores() {
        assert_eq!(consumed("1_000"), Some(5));
        assert_eq!(consumed("0x_1p0"), Some(6));
        for s in &["1__000", "_1000", "1000_", "1_.5", "1._5", "1_e5", "1e_5", "+_1", "0x1_p0"] {
            assert_eq!(consumed(s), None, "{}", s);
        }
        assert!(underscore_ok(b"-1_2.3_4e5_6"));
        assert!(!underscore_ok(b"1_"));
    }

    #[test]
    fn test_format_gates() {
        let dec = FloatFormat::DECIMAL;
        assert_eq!(parse_components(b"1_000", dec).map(|r| r.1), Some(1));
        assert_eq!(parse_components(b"0x1p0", dec).map(|r| r.1), Some(1));
        assert!(parse_components(b"inf", dec).is_none());
        assert!(parse_components(b"nan", FloatFormat::HEX).is_none());
        assert_eq!(parse_components(b"nan", FloatFormat::SPECIAL).map(|r| r.1), Some(3));
    }
}
