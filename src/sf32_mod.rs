use std::fmt;

/// The raw bit pattern of an IEEE-754 single-precision float.
///
/// Unlike `f32`, this type never touches the host FPU. All operations on it
/// are implemented with integer arithmetic on the stored bits.
#[repr(transparent)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct sf32(pub(crate) u32);

impl sf32 {
    pub const ZERO: Self         = sf32(0x0000_0000);
    pub const NEG_ZERO: Self     = sf32(0x8000_0000);
    pub const INFINITY: Self     = sf32(0x7f80_0000);
    pub const NEG_INFINITY: Self = sf32(0xff80_0000);

    pub(crate) const SIGN_MASK: u32      = 0x8000_0000;
    pub(crate) const EXPONENT_MASK: u32  = 0x7f80_0000;
    pub(crate) const FRACTION_MASK: u32  = 0x007f_ffff;
    /// The implicit leading 1 of a normal number's significand.
    pub(crate) const INTEGER_BIT: u32    = 1 << 23;
    pub(crate) const FRACTION_BITS: u32  = 23;

    /// The all-ones biased exponent used by infinities and NaNs.
    pub(crate) const MAX_EXPONENT: i16 = 0xff;

    /// Creates an `sf32` from its raw bit pattern.
    pub const fn from_bits(bits: u32) -> Self {
        sf32(bits)
    }

    /// Returns the raw bit pattern.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Reinterprets the bits of a host `f32`. No numeric conversion happens,
    /// so every pattern (including NaN payloads) survives unchanged.
    pub fn from_f32(f: f32) -> Self {
        sf32(f.to_bits())
    }

    /// Reinterprets `self` as a host `f32`.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Returns the value of the sign bit (bit 31).
    pub fn sign_bit(self) -> bool {
        self.0 & Self::SIGN_MASK != 0
    }

    pub fn is_sign_negative(self) -> bool {
        self.sign_bit()
    }

    pub fn is_sign_positive(self) -> bool {
        !self.sign_bit()
    }

    /// The biased or "raw" 8-bit exponent stored in bits 30-23.
    pub fn biased_exponent(self) -> u8 {
        ((self.0 & Self::EXPONENT_MASK) >> Self::FRACTION_BITS) as u8
    }

    /// The 23 fraction bits stored in bits 22-0.
    pub fn fraction(self) -> u32 {
        self.0 & Self::FRACTION_MASK
    }

    /// Returns the 24-bit significand, with the implicit leading 1 at bit 23.
    ///
    /// The integer bit is set unconditionally, even for zero and subnormal
    /// patterns. The adder relies on this.
    pub fn significand(self) -> u32 {
        self.fraction() | Self::INTEGER_BIT
    }

    /// Returns `true` if `self` is `0.0` or `-0.0`.
    pub fn is_zero(self) -> bool {
        self.0 & !Self::SIGN_MASK == 0
    }

    pub fn is_nan(self) -> bool {
        match self.classify() {
            Classified::NaN { .. } => true,
            _ => false,
        }
    }

    pub fn is_infinite(self) -> bool {
        match self.classify() {
            Classified::Inf { .. } => true,
            _ => false,
        }
    }

    pub fn is_finite(self) -> bool {
        !(self.is_infinite() || self.is_nan())
    }

    /// Classifies `self` by the kind of value its bit pattern encodes.
    pub fn classify(self) -> Classified {
        let sign = self.sign_bit();
        let fraction = self.fraction();

        match self.biased_exponent() {
            0x00 => match fraction {
                0 => Classified::Zero { sign },
                _ => Classified::Subnormal { sign, fraction },
            },
            0xff => match fraction {
                0 => Classified::Inf { sign },
                payload => Classified::NaN { sign, payload },
            },
            exponent => Classified::Normal { sign, exponent, fraction },
        }
    }

    /// Returns the infinity with the given sign.
    pub(crate) fn infinity(sign: bool) -> Self {
        if sign {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }
}

impl fmt::Debug for sf32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl fmt::Display for sf32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl From<f32> for sf32 {
    fn from(f: f32) -> Self {
        Self::from_f32(f)
    }
}

impl From<sf32> for f32 {
    fn from(f: sf32) -> Self {
        f.to_f32()
    }
}

impl From<u32> for sf32 {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<sf32> for u32 {
    fn from(f: sf32) -> Self {
        f.to_bits()
    }
}

/// The result of a floating-point operation with result `T`.
#[must_use = "the result may have been truncated or out of range"]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FloatResult<T> {
    /// No bits were lost, the result is exact.
    Exact(T),
    /// One or more 1-bits were shifted out of a significand, so the result is
    /// the exact sum truncated towards zero.
    Truncated(T),
    /// The exponent left the finite range. The result is the infinity with
    /// the given sign.
    Overflow { sign: bool },
    /// Normalization pushed the exponent down to zero. The result is `+0.0`,
    /// regardless of the sign of the exact sum.
    Underflow,
}

impl<T> FloatResult<T> {
    /// Returns `true` if the result is `FloatResult::Exact`.
    pub fn is_exact(&self) -> bool {
        match self {
            FloatResult::Exact(_) => true,
            _ => false,
        }
    }
}

impl<T: fmt::Debug> FloatResult<T> {
    /// Returns the exact result, panicking if the result isn't a
    /// `FloatResult::Exact`.
    pub fn unwrap_exact(self) -> T {
        if let FloatResult::Exact(f) = self {
            f
        } else {
            panic!("called `unwrap_exact` on a {:?}", self);
        }
    }
}

impl FloatResult<sf32> {
    /// Extracts the (possibly truncated) result.
    pub fn into_inner(self) -> sf32 {
        match self {
            FloatResult::Exact(f) => f,
            FloatResult::Truncated(f) => f,
            FloatResult::Overflow { sign } => sf32::infinity(sign),
            FloatResult::Underflow => sf32::ZERO,
        }
    }
}

/// An `sf32` separated by the kind of value it represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classified {
    /// All-zero exponent and fraction.
    Zero {
        sign: bool,
    },
    /// All-zero exponent, nonzero fraction.
    ///
    /// The adder does not support these and treats them as if the implicit
    /// integer bit were set.
    Subnormal {
        sign: bool,
        fraction: u32,
    },
    /// Any exponent that is neither all-zero nor all-one.
    Normal {
        sign: bool,
        /// The biased exponent (1 to 254).
        exponent: u8,
        /// The 23 explicit fraction bits.
        fraction: u32,
    },
    /// All-one exponent, zero fraction.
    Inf {
        sign: bool,
    },
    /// All-one exponent, nonzero fraction.
    NaN {
        sign: bool,
        payload: u32,
    },
}

impl Classified {
    /// Converts this classified representation back into the equivalent
    /// `sf32`.
    pub fn pack(&self) -> sf32 {
        let (sign, raw_exponent, fraction): (bool, u32, u32) = match *self {
            Classified::Zero { sign } => (sign, 0, 0),
            Classified::Subnormal { sign, fraction } => (sign, 0, fraction),
            Classified::Normal { sign, exponent, fraction } => (sign, u32::from(exponent), fraction),
            Classified::Inf { sign } => (sign, 0xff, 0),
            Classified::NaN { sign, payload } => (sign, 0xff, payload),
        };

        let sign = if sign { sf32::SIGN_MASK } else { 0 };
        let raw_exp = (raw_exponent << sf32::FRACTION_BITS) & sf32::EXPONENT_MASK;
        sf32(sign | raw_exp | (fraction & sf32::FRACTION_MASK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        match sf32::ZERO.classify() {
            Classified::Zero { sign: false } => {},
            e => panic!("sf32::ZERO ({:?}) is {:?}", sf32::ZERO, e),
        }
        match sf32::NEG_ZERO.classify() {
            Classified::Zero { sign: true } => {},
            e => panic!("sf32::NEG_ZERO ({:?}) is {:?}", sf32::NEG_ZERO, e),
        }
        assert!(sf32::NEG_ZERO.is_zero());
    }

    #[test]
    fn infinity() {
        assert_eq!(sf32::INFINITY.to_f32(), std::f32::INFINITY);
        assert_eq!(sf32::NEG_INFINITY.to_f32(), std::f32::NEG_INFINITY);
        assert_eq!(sf32::NEG_INFINITY.classify(), Classified::Inf { sign: true });
    }

    #[test]
    fn fields() {
        let f = sf32::from(-1.5f32);
        assert!(f.sign_bit());
        assert!(f.is_sign_negative());
        assert!((-f).is_sign_positive());
        assert_eq!(f.biased_exponent(), 127);
        assert_eq!(f.fraction(), 0x40_0000);
        assert_eq!(f.significand(), 0xC0_0000);
        assert_eq!(f.classify(), Classified::Normal { sign: true, exponent: 127, fraction: 0x40_0000 });
    }

    #[test]
    fn nan_keeps_payload() {
        let bits = 0x7fc0_1234;
        let f = sf32::from_bits(bits);
        assert!(f.is_nan());
        assert_eq!(f.classify().pack().to_bits(), bits);
        assert_eq!(sf32::from_f32(f.to_f32()).to_bits(), bits);
    }

    #[test]
    fn into_inner() {
        let one = sf32::from(1.0f32);
        assert!(FloatResult::Exact(one).is_exact());
        assert!(!FloatResult::Truncated(one).is_exact());
        assert_eq!(FloatResult::Exact(one).into_inner(), one);
        assert_eq!(FloatResult::Truncated(one).into_inner(), one);
        assert_eq!(FloatResult::Overflow { sign: true }.into_inner(), sf32::NEG_INFINITY);
        assert_eq!(FloatResult::<sf32>::Underflow.into_inner(), sf32::ZERO);
    }

    #[test]
    #[should_panic(expected = "unwrap_exact")]
    fn unwrap_exact_truncated() {
        FloatResult::Truncated(sf32::ZERO).unwrap_exact();
    }
}
