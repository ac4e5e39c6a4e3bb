pub trait ByteSlice: AsRef<[u8]> {
    #[inline]
    fn check_first(&self, c: u8) -> bool {
        self.as_ref().first() == Some(&c)
    }

    #[inline]
    fn check_first2(&self, c1: u8, c2: u8) -> bool {
        matches!(self.as_ref().first(), Some(&c) if c == c1 || c == c2)
    }

    #[inline]
    fn advance(&self, n: usize) -> &[u8] {
        &self.as_ref()[n..]
    }

    /// Little-endian load of the first 8 bytes, `None` if there are fewer.
    #[inline]
    fn try_read_u64(&self) -> Option<u64> {
        let s = self.as_ref();
        if s.len() < 8 {
            return None;
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&s[..8]);
        Some(u64::from_le_bytes(buf))
    }
}

impl ByteSlice for [u8] {}

#[inline]
pub fn is_8digits(v: u64) -> bool {
    let a = v.wrapping_add(0x4646_4646_4646_4646);
    let b = v.wrapping_sub(0x3030_3030_3030_3030);
    (a | b) & 0x8080_8080_8080_8080 == 0
}

#[inline]
pub fn parse_8digits(mut v: u64) -> u64 {
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 0x000F_4240_0000_0064;
    const MUL2: u64 = 0x0000_2710_0000_0001;
    v -= 0x3030_3030_3030_3030;
    v = (v * 10) + (v >> 8); // will not overflow, fits in 63 bits
    let v1 = (v & MASK).wrapping_mul(MUL1);
    let v2 = ((v >> 16) & MASK).wrapping_mul(MUL2);
    ((v1.wrapping_add(v2) >> 32) as u32) as u64
}

#[inline]
pub fn parse_digits(s: &mut &[u8], mut f: impl FnMut(u8)) {
    while let Some((&c, rest)) = s.split_first() {
        let c = c.wrapping_sub(b'0');
        if c < 10 {
            f(c);
            *s = rest;
        } else {
            break;
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AdjustedMantissa {
    pub mantissa: u64,
    pub power2: i32,
}

impl AdjustedMantissa {
    #[inline]
    pub const fn zero_pow2(power2: i32) -> Self {
        Self {
            mantissa: 0,
            power2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u64() {
        let bytes = b"01234567";
        let int = bytes.try_read_u64();
        assert_eq!(int, Some(0x3736353433323130));
        assert_eq!(b"0123456".try_read_u64(), None);
        assert!(b"-1".check_first2(b'+', b'-'));
        assert_eq!(b"123".advance(1), b"23");
    }

    #[test]
    fn test_parse_8digits() {
        let v = b"12345678".try_read_u64().unwrap();
        assert!(is_8digits(v));
        assert_eq!(parse_8digits(v), 12345678);
        assert!(!is_8digits(b"1234567a".try_read_u64().unwrap()));
        assert!(!is_8digits(b"1234.678".try_read_u64().unwrap()));
    }

    #[test]
    fn test_parse_digits() {
        let mut s = &b"7890x"[..];
        let mut x = 0_u64;
        parse_digits(&mut s, |d| x = x * 10 + d as u64);
        assert_eq!(x, 7890);
        assert_eq!(s, b"x");
    }
}
