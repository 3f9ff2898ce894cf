#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Fixed-width unsigned binary registers.
//!
//! Values are held as exactly `WIDTH` bits and combined with a ripple-carry
//! adder, shift-and-add multiplication and repeated-multiplication powers.
//! Results that do not fit are reported as [`RegisterError::Overflow`], never
//! truncated.
//!
//! ```
//! use bitword::Word;
//!
//! let three = Word::from_u64(3)?;
//! let twelve = three.multiply(&Word::from_u64(4)?)?;
//! assert_eq!(twelve.to_string(), "00000000 00000000 00000000 00001100 = 12");
//! # Ok::<(), bitword::RegisterError>(())
//! ```

mod register;

#[cfg(test)]
mod test_utils;

pub use register::{
    Bit, FixedWidthRegister, InvalidInput, Operation, RegisterError, WORD_WIDTH, Word,
};
