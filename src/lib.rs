//! Software addition of IEEE-754 single-precision floats.
//!
//! This crate adds two `f32` bit patterns using nothing but integer
//! arithmetic: the operands are split into sign, exponent and significand,
//! aligned, summed as signed integers and renormalized. It is meant as a
//! readable reference for how a floating-point adder works, not as a
//! replacement for the hardware one.
//!
//! The algorithm deliberately keeps a few simplifications:
//!
//! * Bits shifted out during alignment are truncated, there is no
//!   round-to-nearest-even.
//! * Subnormal operands are read as if their implicit integer bit were set.
//! * NaN operands are not detected.
//! * Exact zero results (from cancellation or underflow) are always `+0.0`.
//!
//! Values are passed around as raw bit patterns. Use [`add`] on `u32`s,
//! [`add_f32`] on host floats (the bits are reinterpreted, never converted),
//! or the [`sf32`] type, which also offers [`sf32::add_checked`] to find out
//! whether a result was truncated or out of range.

#![doc(html_root_url = "https://docs.rs/sfadd/0.1.0")]
#![warn(missing_debug_implementations)]

#[macro_use] extern crate log;

mod command;
mod decomposed;
mod format;
mod sf32_algo;
mod sf32_mod;
mod sf32_ops;
mod sign_mag;

pub use crate::command::{Command, ParseError};
pub use crate::format::BitTable;
pub use crate::sf32_mod::*;

/// Adds two single-precision floats given as raw bit patterns and returns the
/// bit pattern of the sum.
///
/// This never touches the host FPU.
pub fn add(a_bits: u32, b_bits: u32) -> u32 {
    (sf32::from_bits(a_bits) + sf32::from_bits(b_bits)).to_bits()
}

/// Adds two host floats in software.
///
/// Both operands are reinterpreted bit-for-bit, as is the result.
pub fn add_f32(a: f32, b: f32) -> f32 {
    f32::from_bits(add(a.to_bits(), b.to_bits()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_bits() {
        assert_eq!(add(0x3f80_0000, 0x4000_0000), 0x4040_0000);
        assert_eq!(add(0x3f80_0000, 0xbf80_0000), 0x0000_0000);
    }

    #[test]
    fn add_host_floats() {
        assert_eq!(add_f32(1.5, 0.25).to_bits(), 1.75f32.to_bits());
        assert_eq!(add_f32(3.4e38, 3.4e38).to_bits(), std::f32::INFINITY.to_bits());
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<sf32>();
        assert_send_sync::<FloatResult<sf32>>();
    }
}
