use std::ops::Add;
use std::fmt;

/// A significand together with the sign of the float it came from.
///
/// Addition goes through a wide two's complement integer, which has plenty of
/// headroom for the at most 25-bit magnitude of a sum of two 24-bit
/// significands.
#[derive(Copy, Clone)]
pub struct SignMagnitude {
    sign: bool,
    magnitude: u32,
}

impl SignMagnitude {
    pub fn new(sign: bool, magnitude: u32) -> Self {
        Self { sign, magnitude }
    }

    /// Returns the sign of the integer.
    ///
    /// Returns `true` when the represented number is `<=0`, `false` is the
    /// number is `>=0`.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Returns the magnitude (or absolute value) of the stored number.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Promotes `self` to a signed 64-bit integer, negating it if the sign is
    /// set.
    pub fn to_twos_complement(&self) -> i64 {
        let wide = i64::from(self.magnitude);
        if self.sign {
            -wide
        } else {
            wide
        }
    }
}

impl Add for SignMagnitude {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from(self.to_twos_complement() + rhs.to_twos_complement())
    }
}

impl fmt::Debug for SignMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:#X}", if self.sign { "-" } else { "" }, self.magnitude)
    }
}

/// Splits a two's complement sum back into sign and magnitude.
///
/// Only sums of two 24-bit significands are ever converted, so the magnitude
/// always fits in 32 bits. Zero is always positive.
impl From<i64> for SignMagnitude {
    fn from(v: i64) -> Self {
        Self {
            sign: v < 0,
            magnitude: v.abs() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_opposite_signs() {
        let sum = SignMagnitude::new(false, 0x80_0000) + SignMagnitude::new(true, 0xC0_0000);
        assert!(sum.sign());
        assert_eq!(sum.magnitude(), 0x40_0000);
    }

    #[test]
    fn add_carries_into_bit_24() {
        let max = SignMagnitude::new(true, 0xFF_FFFF);
        let sum = max + max;
        assert!(sum.sign());
        assert_eq!(sum.magnitude(), 0x1FF_FFFE);
    }

    #[test]
    fn cancel_is_positive_zero() {
        let sum = SignMagnitude::new(true, 0xAB_CDEF) + SignMagnitude::new(false, 0xAB_CDEF);
        assert!(!sum.sign());
        assert_eq!(sum.magnitude(), 0);
    }

    #[test]
    fn twos_complement() {
        assert_eq!(SignMagnitude::new(true, 5).to_twos_complement(), -5);
        assert_eq!(SignMagnitude::new(false, 5).to_twos_complement(), 5);

        let back = SignMagnitude::from(-7i64);
        assert!(back.sign());
        assert_eq!(back.magnitude(), 7);
    }
}
