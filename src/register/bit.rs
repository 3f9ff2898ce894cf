//! Single binary digit and the full-adder rule used by ripple-carry addition.

use std::fmt;

/// One binary digit of a register.
///
/// Registers store `Bit`s rather than characters or booleans so that no symbol
/// other than `0` or `1` can ever be held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Parses a `'0'` or `'1'` character.
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Adds two operand bits and an incoming carry, returning `(sum, carry_out)`.
    pub fn full_add(x: Self, y: Self, carry: Self) -> (Self, Self) {
        use Bit::{One, Zero};
        match (x, y, carry) {
            (Zero, Zero, Zero) => (Zero, Zero),
            (Zero, Zero, One) | (Zero, One, Zero) | (One, Zero, Zero) => (One, Zero),
            (Zero, One, One) | (One, Zero, One) | (One, One, Zero) => (Zero, One),
            (One, One, One) => (One, One),
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for u32 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
