//! Error types for register construction and arithmetic.
//!
//! - `InvalidInput`: why a construction or exponent argument was rejected
//! - `RegisterError`: the error returned by every fallible register operation

use std::fmt;

/// Reasons a value cannot become a register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// A bit string contained a symbol other than `0` or `1`.
    InvalidBitCharacter { index: usize, found: char },
    /// A bit string had more digits than the register width.
    BitStringTooLong { length: usize, width: usize },
    /// An integer needs more bits than the register width.
    IntegerTooWide { bits: u64, width: usize },
    /// Registers hold unsigned values only.
    NegativeInteger,
    /// The input kind is never accepted (e.g. floating point).
    UnsupportedKind { kind: &'static str },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitCharacter { index, found } => {
                write!(f, "invalid bit character {found:?} at index {index}")
            }
            Self::BitStringTooLong { length, width } => {
                write!(f, "bit string of length {length} exceeds register width {width}")
            }
            Self::IntegerTooWide { bits, width } => {
                write!(f, "integer needs {bits} bits but register width is {width}")
            }
            Self::NegativeInteger => write!(f, "cannot create register from negative integer"),
            Self::UnsupportedKind { kind } => write!(f, "cannot create register from {kind}"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// The arithmetic operation an overflow is reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Power,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "addition"),
            Self::Multiply => write!(f, "multiplication"),
            Self::Power => write!(f, "exponentiation"),
        }
    }
}

/// Errors that can occur during register operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The input could not be represented as a register.
    InvalidInput(InvalidInput),
    /// The true result does not fit in the register width.
    Overflow { operation: Operation },
}

impl RegisterError {
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Reports an overflow against the enclosing operation.
    pub(super) fn within(self, operation: Operation) -> Self {
        match self {
            Self::Overflow { .. } => Self::Overflow { operation },
            other => other,
        }
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::Overflow { operation } => write!(f, "overflow during {operation}"),
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Overflow { .. } => None,
        }
    }
}

impl From<InvalidInput> for RegisterError {
    fn from(error: InvalidInput) -> Self {
        Self::InvalidInput(error)
    }
}
