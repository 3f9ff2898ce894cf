//! Display formatting for registers.
//!
//! `Display` shows the bits in 8-bit clusters followed by the decimal value,
//! e.g. "00000000 00000000 00000000 00001100 = 12".

use std::fmt;

use super::bit::Bit;
use super::register_impl::FixedWidthRegister;

/// Number of bits per space-separated cluster.
const GROUP_SIZE: usize = 8;

/// Writes bits most-significant first, a space between each cluster.
fn format_grouped_bits(f: &mut fmt::Formatter<'_>, bits: &[Bit]) -> fmt::Result {
    for (index, group) in bits.chunks(GROUP_SIZE).enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        for bit in group {
            write!(f, "{bit}")?;
        }
    }
    Ok(())
}

impl<const WIDTH: usize> fmt::Display for FixedWidthRegister<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grouped_bits(f, self.bits())?;
        write!(f, " = {}", self.value())
    }
}

impl<const WIDTH: usize> fmt::Debug for FixedWidthRegister<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedWidthRegister")
            .field(&format_args!("{}", self.to_bit_string()))
            .finish()
    }
}

/// Raw `WIDTH`-digit bit string; `{:#b}` adds the `0b` prefix.
impl<const WIDTH: usize> fmt::Binary for FixedWidthRegister<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_bit_string())
    }
}
