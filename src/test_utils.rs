//! Shared test utilities for register tests.

use crate::register::Word;

/// Creates a 32-bit register from an integer.
///
/// # Panics
/// Panics if `value` does not fit in 32 bits.
pub fn word(value: u64) -> Word {
    match Word::from_u64(value) {
        Ok(register) => register,
        Err(err) => panic!("{value} is not a valid word: {err}"),
    }
}
