//! Fixed-width unsigned registers with bit-level arithmetic.
//!
//! - [`FixedWidthRegister`]: the register value type, generic over its width
//! - [`Word`]: the 32-bit register
//! - [`Bit`]: a single binary digit
//! - [`RegisterError`] / [`InvalidInput`]: construction and arithmetic failures

mod arithmetic;
mod bit;
mod display;
mod error;
mod register_impl;

pub use bit::Bit;
pub use error::{InvalidInput, Operation, RegisterError};
pub use register_impl::FixedWidthRegister;

/// Width of a [`Word`] in bits.
pub const WORD_WIDTH: usize = 32;

/// The 32-bit register.
pub type Word = FixedWidthRegister<WORD_WIDTH>;
