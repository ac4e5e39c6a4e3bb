use std::ops::BitOr;

/// Grammar accepted by the parser on top of plain decimal literals.
///
/// The default is the full Go `ParseFloat` grammar: `_` digit separators,
/// `0x` hex mantissas with a `p` exponent, and `inf`/`infinity`/`nan`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    pub underscores: bool,
    pub hex: bool,
    pub special: bool,
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self {
            underscores: true,
            hex: true,
            special: true,
        }
    }
}

impl FloatFormat {
    /// Plain `[-+]?digits[.digits][e[-+]digits]` literals only.
    pub const DECIMAL: Self = Self {
        underscores: false,
        hex: false,
        special: false,
    };
    pub const UNDERSCORES: Self = Self {
        underscores: true,
        hex: false,
        special: false,
    };
    pub const HEX: Self = Self {
        underscores: false,
        hex: true,
        special: false,
    };
    pub const SPECIAL: Self = Self {
        underscores: false,
        hex: false,
        special: true,
    };
}

impl BitOr for FloatFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            underscores: self.underscores || rhs.underscores,
            hex: self.hex || rhs.hex,
            special: self.special || rhs.special,
        }
    }
}
