//! Fixed-width register representation and construction.

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{Bounded, ToPrimitive, Zero};
use tracing::debug;

use super::bit::Bit;
use super::error::{InvalidInput, RegisterError};

/// Unsigned value held as exactly `WIDTH` bits, most-significant bit first.
///
/// Registers are immutable: every arithmetic operation returns a new register.
/// The stored value is `sum(bits[i] * 2^(WIDTH - 1 - i))`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedWidthRegister<const WIDTH: usize> {
    bits: [Bit; WIDTH],
}

impl<const WIDTH: usize> FixedWidthRegister<WIDTH> {
    /// Number of bits held by every register of this type.
    pub const WIDTH: usize = WIDTH;

    const NONZERO_WIDTH: () = assert!(WIDTH > 0, "register width must be at least one bit");

    pub(super) fn from_bit_array(bits: [Bit; WIDTH]) -> Self {
        let () = Self::NONZERO_WIDTH;
        Self { bits }
    }

    pub fn zero() -> Self {
        Self::from_bit_array([Bit::Zero; WIDTH])
    }

    pub fn one() -> Self {
        let mut bits = [Bit::Zero; WIDTH];
        bits[WIDTH - 1] = Bit::One;
        Self::from_bit_array(bits)
    }

    /// The register with every bit set, `2^WIDTH - 1`.
    pub fn max_value() -> Self {
        Self::from_bit_array([Bit::One; WIDTH])
    }

    /// Builds a register from a string of `0`/`1` characters, left-padding with zeros.
    ///
    /// The empty string yields zero. Strings longer than `WIDTH` are rejected.
    pub fn from_bit_str(text: &str) -> Result<Self, RegisterError> {
        let length = text.chars().count();
        if length > WIDTH {
            debug!(length, width = WIDTH, "rejected over-length bit string");
            return Err(InvalidInput::BitStringTooLong { length, width: WIDTH }.into());
        }

        let offset = WIDTH - length;
        let mut bits = [Bit::Zero; WIDTH];
        for (index, found) in text.chars().enumerate() {
            let Some(bit) = Bit::from_char(found) else {
                debug!(index, ?found, "rejected bit string with non-binary symbol");
                return Err(InvalidInput::InvalidBitCharacter { index, found }.into());
            };
            bits[offset + index] = bit;
        }
        Ok(Self::from_bit_array(bits))
    }

    /// Builds a register from an integer, failing if it needs more than `WIDTH` bits.
    pub fn from_u64(value: u64) -> Result<Self, RegisterError> {
        Self::from_binary_digits(&format!("{value:b}"))
    }

    /// Builds a register from an arbitrary-precision integer, failing if it needs
    /// more than `WIDTH` bits.
    pub fn from_biguint(value: &BigUint) -> Result<Self, RegisterError> {
        Self::from_binary_digits(&value.to_str_radix(2))
    }

    /// Pads a minimal binary representation, treating excess digits as an
    /// integer that is too wide rather than a malformed bit string.
    fn from_binary_digits(digits: &str) -> Result<Self, RegisterError> {
        if digits.len() > WIDTH {
            debug!(bits = digits.len(), width = WIDTH, "rejected integer wider than register");
            return Err(InvalidInput::IntegerTooWide {
                bits: digits.len() as u64,
                width: WIDTH,
            }
            .into());
        }
        Self::from_bit_str(digits)
    }

    pub fn bits(&self) -> &[Bit; WIDTH] {
        &self.bits
    }

    /// Returns the bit at `index`, counting from the most-significant bit.
    pub fn bit(&self, index: usize) -> Option<Bit> {
        self.bits.get(index).copied()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| !bit.is_one())
    }

    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|bit| bit.to_char()).collect()
    }

    /// Returns the unsigned integer value of the register.
    pub fn value(&self) -> BigUint {
        self.bits
            .iter()
            .fold(BigUint::zero(), |acc, bit| acc * 2u32 + u32::from(*bit))
    }

    /// Returns the value as a `u64`, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.value().to_u64()
    }
}

impl<const WIDTH: usize> Default for FixedWidthRegister<WIDTH> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const WIDTH: usize> Bounded for FixedWidthRegister<WIDTH> {
    fn min_value() -> Self {
        Self::zero()
    }

    fn max_value() -> Self {
        FixedWidthRegister::<WIDTH>::max_value()
    }
}

impl<const WIDTH: usize> FromStr for FixedWidthRegister<WIDTH> {
    type Err = RegisterError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_bit_str(text)
    }
}

impl<const WIDTH: usize> TryFrom<&str> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_bit_str(text)
    }
}

impl<const WIDTH: usize> TryFrom<u64> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value)
    }
}

impl<const WIDTH: usize> TryFrom<u32> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u64(u64::from(value))
    }
}

impl<const WIDTH: usize> TryFrom<i64> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let unsigned = u64::try_from(value).map_err(|_| InvalidInput::NegativeInteger)?;
        Self::from_u64(unsigned)
    }
}

impl<const WIDTH: usize> TryFrom<&BigUint> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Self::from_biguint(value)
    }
}

/// Floating-point values are never accepted, even when integral.
impl<const WIDTH: usize> TryFrom<f64> for FixedWidthRegister<WIDTH> {
    type Error = RegisterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        debug!(value, "rejected floating-point register input");
        Err(InvalidInput::UnsupportedKind { kind: "floating point" }.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::register::Word;
    use crate::test_utils::word;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn bit_string_is_left_padded() {
        let value = Word::from_bit_str("1100").expect("valid bit string");
        assert_eq!(value.to_bit_string(), format!("{}1100", "0".repeat(28)));
        assert_eq!(value.to_u64(), Some(12));
    }

    #[test]
    fn full_width_bit_string_passes_through() {
        let text = "10000000000000000000000000000001";
        let value = Word::from_bit_str(text).expect("valid bit string");
        assert_eq!(value.to_bit_string(), text);
        assert_eq!(value.to_u64(), Some((1u64 << 31) + 1));
    }

    #[test]
    fn empty_bit_string_is_zero() {
        let value = Word::from_bit_str("").expect("empty string pads to zero");
        assert!(value.is_zero());
        assert_eq!(value, Word::zero());
    }

    #[test]
    fn over_length_bit_string_is_rejected() {
        let text = "1".repeat(33);
        assert_eq!(
            Word::from_bit_str(&text),
            Err(RegisterError::InvalidInput(InvalidInput::BitStringTooLong {
                length: 33,
                width: 32,
            }))
        );
    }

    #[test]
    fn non_binary_symbol_is_rejected() {
        assert_eq!(
            "10201".parse::<Word>(),
            Err(RegisterError::InvalidInput(InvalidInput::InvalidBitCharacter {
                index: 2,
                found: '2',
            }))
        );
        assert!(Word::from_bit_str("0b101").is_err_and(|err| err.is_invalid_input()));
    }

    #[test]
    fn integer_round_trips_through_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut samples: Vec<u64> = (0..1000).map(|_| rng.gen_range(0..=u64::from(u32::MAX))).collect();
        samples.extend([0, 1, 2, u64::from(u32::MAX) - 1, u64::from(u32::MAX)]);
        for sample in samples {
            let register = word(sample);
            assert_eq!(register.to_u64(), Some(sample));
            assert_eq!(register.value(), BigUint::from(sample));
        }
    }

    #[test]
    fn integer_wider_than_register_is_rejected() {
        assert_eq!(
            Word::from_u64(1u64 << 32),
            Err(RegisterError::InvalidInput(InvalidInput::IntegerTooWide {
                bits: 33,
                width: 32,
            }))
        );
        let huge = BigUint::from(1u32) << 100u32;
        assert!(Word::from_biguint(&huge).is_err_and(|err| err.is_invalid_input()));
    }

    #[test]
    fn biguint_construction_matches_u64() {
        let value = BigUint::from(123_456_789u32);
        assert_eq!(Word::try_from(&value), Ok(word(123_456_789)));
        assert_eq!(Word::from_biguint(&BigUint::zero()), Ok(Word::zero()));
    }

    #[test]
    fn signed_and_float_inputs() {
        assert_eq!(Word::try_from(42i64), Ok(word(42)));
        assert_eq!(
            Word::try_from(-1i64),
            Err(RegisterError::InvalidInput(InvalidInput::NegativeInteger))
        );
        assert_eq!(
            Word::try_from(3.0f64),
            Err(RegisterError::InvalidInput(InvalidInput::UnsupportedKind {
                kind: "floating point",
            }))
        );
        assert_eq!(Word::try_from(7u32), Ok(word(7)));
    }

    #[test]
    fn constants_and_bounds() {
        assert_eq!(Word::WIDTH, 32);
        assert_eq!(Word::one().to_u64(), Some(1));
        assert_eq!(Word::max_value().to_u64(), Some(u64::from(u32::MAX)));
        assert_eq!(<Word as Bounded>::min_value(), Word::zero());
        assert_eq!(Word::default(), Word::zero());
    }

    #[test]
    fn bit_accessor_counts_from_most_significant() {
        let value = word(1);
        assert_eq!(value.bit(31), Some(Bit::One));
        assert_eq!(value.bit(0), Some(Bit::Zero));
        assert_eq!(value.bit(32), None);
        assert_eq!(value.bits().len(), 32);
    }

    #[test]
    fn ordering_follows_unsigned_value() {
        assert!(word(3) < word(12));
        assert!(word(1u64 << 31) > word(u64::from(u32::MAX >> 1)));
        assert_eq!(word(5).cmp(&word(5)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn other_widths_follow_the_same_rules() {
        let byte = FixedWidthRegister::<8>::from_u64(255).expect("fits in eight bits");
        assert_eq!(byte, FixedWidthRegister::<8>::max_value());
        assert!(FixedWidthRegister::<8>::from_u64(256).is_err());
        assert_eq!(FixedWidthRegister::<1>::one().to_bit_string(), "1");
    }
}
