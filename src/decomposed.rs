//! Provides a decomposed representation of single-precision bit patterns
//! during addition.

use crate::sf32_mod::sf32;
use crate::sign_mag::SignMagnitude;
use std::fmt;

/// An `sf32` operand decomposed into its components.
///
/// The significand always carries the integer bit, so a subnormal operand is
/// read as if it were normal.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Decomposed {
    pub sign: bool,
    /// Biased exponent. Starts out as the 8-bit field and may grow while
    /// aligning or renormalizing.
    exponent: i16,
    /// The significand. Bit 23 is the integer bit, the low 23 bits are the
    /// fraction. A sum can carry into bit 24.
    significand: u32,
    /// Whether a 1-bit has been shifted out of the significand.
    truncated: bool,
}

impl Decomposed {
    /// Splits `f` into sign, biased exponent and significand (with the
    /// implicit integer bit set).
    pub fn new(f: sf32) -> Self {
        Self {
            sign: f.sign_bit(),
            exponent: i16::from(f.biased_exponent()),
            significand: f.significand(),
            truncated: false,
        }
    }

    /// Creates a decomposed value from a sign-magnitude sum and the working
    /// exponent of the aligned operands.
    pub fn with_sign_magnitude_exponent(sign_mag: SignMagnitude, exponent: i16) -> Self {
        Self {
            sign: sign_mag.sign(),
            exponent,
            significand: sign_mag.magnitude(),
            truncated: false,
        }
    }

    pub fn exponent(&self) -> i16 {
        self.exponent
    }

    /// Returns `true` if the significand is zero.
    pub fn is_zero(&self) -> bool {
        self.significand == 0
    }

    /// Returns `true` if any 1-bit was lost by `shift_right`.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the sign and significand as a `SignMagnitude` value.
    pub fn to_sign_magnitude(&self) -> SignMagnitude {
        SignMagnitude::new(self.sign, self.significand)
    }

    /// Increments the exponent and shifts the significand right by one bit,
    /// dropping the least significant bit.
    pub fn shift_right(&mut self) {
        self.truncated |= self.significand & 1 != 0;
        self.significand >>= 1;
        self.exponent += 1;
    }

    /// Decrements the exponent and shifts the significand left by one bit.
    pub fn shift_left(&mut self) {
        self.significand <<= 1;
        self.exponent -= 1;
    }

    /// Returns `true` if the sum carried out of the 24-bit significand.
    pub fn has_carry(&self) -> bool {
        self.significand & (sf32::INTEGER_BIT << 1) != 0
    }

    /// Returns `true` if the integer bit (bit 23) is set.
    pub fn is_normalized(&self) -> bool {
        self.significand & sf32::INTEGER_BIT != 0
    }

    /// Packs sign, exponent and fraction into an `sf32`.
    ///
    /// The integer bit is dropped and the exponent is truncated to 8 bits, so
    /// callers have to range-check the exponent first.
    pub fn pack(&self) -> sf32 {
        let sign = if self.sign { sf32::SIGN_MASK } else { 0 };
        let raw_exp = ((self.exponent as u32) << sf32::FRACTION_BITS) & sf32::EXPONENT_MASK;
        let fraction = self.significand & sf32::FRACTION_MASK;
        sf32(sign | raw_exp | fraction)
    }
}

impl fmt::Debug for Decomposed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign {
            write!(f, "-")?;
        }

        let int_part = self.significand >> sf32::FRACTION_BITS;  // up to 2 bits after a carry
        let frac_part = self.significand & sf32::FRACTION_MASK;
        let frac = format!("{:023b}", frac_part);
        let frac = frac.trim_end_matches('0');
        let frac = if frac.is_empty() { "0" } else { frac };
        write!(f, "{:#b}.{}*2^({}-127)", int_part, frac, self.exponent)
    }
}
