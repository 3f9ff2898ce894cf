//! Bit-level arithmetic for registers.
//!
//! None of these operations use native integer arithmetic on the register value:
//! - addition ripples a single carry bit from the least- to the most-significant bit
//! - multiplication sums left-shifted copies of the multiplicand, one per set bit
//! - exponentiation multiplies the running result by the base `n - 1` times
//!
//! Every operation either returns a complete register or reports an error. Results
//! are never truncated to fit.

use num_traits::Pow;
use tracing::{debug, trace};

use super::bit::Bit;
use super::error::{Operation, RegisterError};
use super::register_impl::FixedWidthRegister;

impl<const WIDTH: usize> FixedWidthRegister<WIDTH> {
    /// Adds two registers with a ripple-carry adder.
    ///
    /// Fails with `Overflow` if a carry leaves the most-significant bit.
    pub fn add(&self, other: &Self) -> Result<Self, RegisterError> {
        let lhs = self.bits();
        let rhs = other.bits();
        let mut sum = [Bit::Zero; WIDTH];
        let mut carry = Bit::Zero;
        for index in (0..WIDTH).rev() {
            let (bit, carry_out) = Bit::full_add(lhs[index], rhs[index], carry);
            sum[index] = bit;
            carry = carry_out;
        }

        if carry.is_one() {
            debug!(width = WIDTH, "carry out of most significant bit");
            return Err(RegisterError::Overflow {
                operation: Operation::Add,
            });
        }
        trace!(lhs = %self, rhs = %other, "added registers");
        Ok(Self::from_bit_array(sum))
    }

    /// Multiplies two registers by summing shifted partial products.
    ///
    /// For each set bit of `self` at position `i` (0 is the most-significant bit),
    /// `other` shifted left by `WIDTH - i - 1` is one partial product. A partial
    /// product that would push a set bit out of the register overflows.
    pub fn multiply(&self, other: &Self) -> Result<Self, RegisterError> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut product = Self::zero();
        for (index, bit) in self.bits().iter().enumerate().rev() {
            if !bit.is_one() {
                continue;
            }
            let partial = other.shifted_left(WIDTH - index - 1)?;
            product = product
                .add(&partial)
                .map_err(|err| err.within(Operation::Multiply))?;
        }
        trace!(lhs = %self, rhs = %other, "multiplied registers");
        Ok(product)
    }

    /// Raises the register to `exponent` by repeated multiplication.
    ///
    /// `power(0)` is the multiplicative identity, including for a zero base.
    pub fn power(&self, exponent: u32) -> Result<Self, RegisterError> {
        if exponent == 0 {
            return Ok(Self::one());
        }
        // 0 and 1 are fixed points; any other base overflows within WIDTH steps.
        if self.is_zero() || *self == Self::one() {
            return Ok(*self);
        }

        let mut result = *self;
        for step in 1..exponent {
            result = result.multiply(self).map_err(|err| {
                debug!(exponent, step, "power aborted on overflow");
                err.within(Operation::Power)
            })?;
        }
        Ok(result)
    }

    /// Drops the `shift` high-order bits and appends `shift` zero bits.
    fn shifted_left(&self, shift: usize) -> Result<Self, RegisterError> {
        let bits = self.bits();
        let kept = WIDTH.saturating_sub(shift);
        if bits[..WIDTH - kept].iter().any(|bit| bit.is_one()) {
            debug!(shift, width = WIDTH, "partial product shifted a set bit out");
            return Err(RegisterError::Overflow {
                operation: Operation::Multiply,
            });
        }

        let mut shifted = [Bit::Zero; WIDTH];
        shifted[..kept].copy_from_slice(&bits[WIDTH - kept..]);
        Ok(Self::from_bit_array(shifted))
    }
}

impl<const WIDTH: usize> Pow<u32> for FixedWidthRegister<WIDTH> {
    type Output = Result<Self, RegisterError>;

    fn pow(self, exponent: u32) -> Self::Output {
        self.power(exponent)
    }
}

impl<const WIDTH: usize> Pow<u32> for &FixedWidthRegister<WIDTH> {
    type Output = Result<FixedWidthRegister<WIDTH>, RegisterError>;

    fn pow(self, exponent: u32) -> Self::Output {
        self.power(exponent)
    }
}
