//! Binary to text: Go's `FormatFloat` / `AppendFloat` output formats.

use crate::decimal::Decimal;
use crate::float::Float;
use crate::ryu::{decimal_length, shortest};

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Decimal digits (values `0..=9`) with the decimal point `dp` digits
/// from the left: `0.d1d2... * 10^dp`.
struct Digits<'a> {
    d: &'a [u8],
    dp: i32,
}

impl<'a> Digits<'a> {
    #[inline]
    fn nd(&self) -> i32 {
        self.d.len() as i32
    }
}

/// Appends `value` formatted as Go's `strconv.AppendFloat` would.
///
/// `fmt` is one of `b e E f g G x X`; a negative `prec` requests the
/// shortest representation that parses back to `value`.
pub fn append_float<F: Float>(dst: &mut Vec<u8>, value: F, fmt: char, prec: i32) {
    let mbits = F::MANTISSA_EXPLICIT_BITS as u32;
    let ebits = F::EXPONENT_BITS as u32;
    let bits = value.to_u64_bits();
    let neg = value.is_sign_negative_bits();
    let ieee_exponent = ((bits >> mbits) & ((1 << ebits) - 1)) as u32;
    let ieee_mantissa = bits & ((1 << mbits) - 1);

    if ieee_exponent == (1 << ebits) - 1 {
        let s: &[u8] = if ieee_mantissa != 0 {
            b"NaN"
        } else if neg {
            b"-Inf"
        } else {
            b"+Inf"
        };
        dst.extend_from_slice(s);
        return;
    }

    let mut mant = ieee_mantissa;
    let mut exp = ieee_exponent as i32;
    if exp == 0 {
        // subnormal
        exp += 1;
    } else {
        mant |= 1 << mbits;
    }
    exp -= F::EXPONENT_BIAS;

    match fmt {
        'b' => return fmt_b::<F>(dst, neg, mant, exp),
        'x' | 'X' => return fmt_x::<F>(dst, prec, fmt, neg, mant, exp),
        _ => {}
    }

    let mut prec = prec;
    if prec < 0 {
        let mut buf = [0_u8; 20];
        let digits = if mant == 0 {
            Digits { d: &buf[..0], dp: 0 }
        } else {
            let fd = shortest::<F>(ieee_mantissa, ieee_exponent);
            let (mut m, mut e) = (fd.mantissa, fd.exponent);
            while m % 10 == 0 {
                m /= 10;
                e += 1;
            }
            let nd = decimal_length(m);
            for i in (0..nd).rev() {
                buf[i] = (m % 10) as u8;
                m /= 10;
            }
            Digits {
                d: &buf[..nd],
                dp: nd as i32 + e,
            }
        };
        match fmt {
            'e' | 'E' => prec = (digits.nd() - 1).max(0),
            'f' => prec = (digits.nd() - digits.dp).max(0),
            'g' | 'G' => prec = digits.nd(),
            _ => {}
        }
        format_digits(dst, true, neg, &digits, prec, fmt);
    } else {
        let mut d = Decimal::default();
        d.assign(mant);
        d.shift(exp - mbits as i32);
        match fmt {
            'e' | 'E' => d.round_to(prec.saturating_add(1)),
            'f' => d.round_to(d.decimal_point.saturating_add(prec)),
            'g' | 'G' => {
                if prec == 0 {
                    prec = 1;
                }
                d.round_to(prec);
            }
            _ => {}
        }
        let digits = Digits {
            d: &d.digits[..d.num_digits],
            dp: if d.num_digits == 0 { 0 } else { d.decimal_point },
        };
        format_digits(dst, false, neg, &digits, prec, fmt);
    }
}

fn format_digits(
    dst: &mut Vec<u8>,
    shortest: bool,
    neg: bool,
    d: &Digits,
    prec: i32,
    fmt: char,
) {
    match fmt {
        'e' | 'E' => fmt_e(dst, neg, d, prec, fmt as u8),
        'f' => fmt_f(dst, neg, d, prec),
        'g' | 'G' => {
            let mut eprec = prec;
            if eprec > d.nd() && d.nd() >= d.dp {
                eprec = d.nd();
            }
            // shortest output switches to %e like %g with precision 6
            if shortest {
                eprec = 6;
            }
            let exp = d.dp - 1;
            let e = if fmt == 'g' { b'e' } else { b'E' };
            if exp < -4 || exp >= eprec {
                fmt_e(dst, neg, d, prec.min(d.nd()) - 1, e);
            } else {
                let prec = if prec > d.dp { d.nd() } else { prec };
                fmt_f(dst, neg, d, (prec - d.dp).max(0));
            }
        }
        _ => {
            dst.push(b'%');
            let mut buf = [0_u8; 4];
            dst.extend_from_slice(fmt.encode_utf8(&mut buf).as_bytes());
        }
    }
}

/// `-d.ddddde±dd`
fn fmt_e(dst: &mut Vec<u8>, neg: bool, d: &Digits, prec: i32, fmt: u8) {
    if neg {
        dst.push(b'-');
    }
    dst.push(b'0' + d.d.first().copied().unwrap_or(0));
    if prec > 0 {
        dst.push(b'.');
        let m = d.nd().min(prec.saturating_add(1)).max(1) as usize;
        if m > 1 {
            dst.extend(d.d[1..m].iter().map(|&c| b'0' + c));
        }
        for _ in m..=prec as usize {
            dst.push(b'0');
        }
    }
    dst.push(fmt);
    let mut exp = if d.d.is_empty() { 0 } else { d.dp - 1 };
    if exp < 0 {
        dst.push(b'-');
        exp = -exp;
    } else {
        dst.push(b'+');
    }
    if exp < 10 {
        dst.extend_from_slice(&[b'0', b'0' + exp as u8]);
    } else if exp < 100 {
        dst.extend_from_slice(&[b'0' + (exp / 10) as u8, b'0' + (exp % 10) as u8]);
    } else {
        dst.extend_from_slice(&[
            b'0' + (exp / 100) as u8,
            b'0' + (exp / 10 % 10) as u8,
            b'0' + (exp % 10) as u8,
        ]);
    }
}

/// `-ddddd.dddd`
fn fmt_f(dst: &mut Vec<u8>, neg: bool, d: &Digits, prec: i32) {
    if neg {
        dst.push(b'-');
    }
    if d.dp > 0 {
        let m = d.nd().min(d.dp) as usize;
        dst.extend(d.d[..m].iter().map(|&c| b'0' + c));
        for _ in m..d.dp as usize {
            dst.push(b'0');
        }
    } else {
        dst.push(b'0');
    }
    if prec > 0 {
        dst.push(b'.');
        for i in 1..=prec {
            let j = d.dp as i64 + i as i64 - 1;
            let c = if 0 <= j && j < d.nd() as i64 {
                d.d[j as usize]
            } else {
                0
            };
            dst.push(b'0' + c);
        }
    }
}

/// `-ddddp±ddd`: the integer mantissa and its binary exponent.
fn fmt_b<F: Float>(dst: &mut Vec<u8>, neg: bool, mant: u64, exp: i32) {
    if neg {
        dst.push(b'-');
    }
    dst.extend_from_slice(mant.to_string().as_bytes());
    dst.push(b'p');
    let exp = exp - F::MANTISSA_EXPLICIT_BITS as i32;
    if exp >= 0 {
        dst.push(b'+');
    }
    dst.extend_from_slice(exp.to_string().as_bytes());
}

/// `-0x1.yyyyp±dd`, or `-0x0p+00` for zero.
fn fmt_x<F: Float>(
    dst: &mut Vec<u8>,
    prec: i32,
    fmt: char,
    neg: bool,
    mut mant: u64,
    mut exp: i32,
) {
    if mant == 0 {
        exp = 0;
    }
    // leading one at bit 60
    mant <<= 60 - F::MANTISSA_EXPLICIT_BITS as u32;
    while mant != 0 && mant & (1 << 60) == 0 {
        mant <<= 1;
        exp -= 1;
    }

    if (0..15).contains(&prec) {
        let shift = prec as u32 * 4;
        let extra = (mant << shift) & ((1 << 60) - 1);
        mant >>= 60 - shift;
        if extra | (mant & 1) > 1 << 59 {
            mant += 1;
        }
        mant <<= 60 - shift;
        if mant & (1 << 61) != 0 {
            // carried into the next power of two
            mant >>= 1;
            exp += 1;
        }
    }

    let (hex, p) = if fmt == 'X' {
        (UPPER_HEX, b'P')
    } else {
        (LOWER_HEX, b'p')
    };
    if neg {
        dst.push(b'-');
    }
    dst.extend_from_slice(&[b'0', fmt as u8, b'0' + ((mant >> 60) & 1) as u8]);

    mant <<= 4;
    if prec < 0 && mant != 0 {
        dst.push(b'.');
        while mant != 0 {
            dst.push(hex[((mant >> 60) & 15) as usize]);
            mant <<= 4;
        }
    } else if prec > 0 {
        dst.push(b'.');
        for _ in 0..prec {
            dst.push(hex[((mant >> 60) & 15) as usize]);
            mant <<= 4;
        }
    }

    dst.push(p);
    if exp < 0 {
        dst.push(b'-');
        exp = -exp;
    } else {
        dst.push(b'+');
    }
    let exp = exp as u32;
    if exp < 100 {
        dst.extend_from_slice(&[b'0' + (exp / 10) as u8, b'0' + (exp % 10) as u8]);
    } else if exp < 1000 {
        dst.extend_from_slice(&[
            b'0' + (exp / 100) as u8,
            b'0' + (exp / 10 % 10) as u8,
            b'0' + (exp % 10) as u8,
        ]);
    } else {
        dst.extend_from_slice(&[
            b'0' + (exp / 1000) as u8,
            b'0' + (exp / 100 % 10) as u8,
            b'0' + (exp / 10 % 10) as u8,
            b'0' + (exp % 10) as u8,
        ]);
    }
}

/// Same as [`append_float`], into a fresh `String`.
pub fn format_float<F: Float>(value: F, fmt: char, prec: i32) -> String {
    let mut dst = Vec::with_capacity(24);
    append_float(&mut dst, value, fmt, prec);
    // only ASCII is emitted, plus the caller's own mode character
    String::from_utf8(dst).unwrap_or_default()
}
