//! Implementation of single-precision addition on raw bit patterns.
//!
//! Every step works on integers: the operands are split into sign, exponent
//! and significand, the smaller operand is shifted until the exponents match,
//! the signed significands are summed and the result is renormalized.
//!
//! Shifting truncates. There is no guard, round or sticky bit, so results can
//! be up to one ULP below what an IEEE round-to-nearest adder returns.

use crate::{sf32, FloatResult};
use crate::decomposed::Decomposed;
use std::cmp::Ordering;

/// Outcome of aligning the exponents of two decomposed operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Alignment {
    /// Both operands now share the same exponent.
    Aligned,
    /// The left operand was shifted out entirely and does not contribute to
    /// the sum.
    LeftOperandNegligible,
    /// The right operand was shifted out entirely.
    RightOperandNegligible,
}

/// A 24-bit significand is zero after 24 right shifts, so alignment either
/// matches the exponents or drops an operand within this many steps.
const MAX_ALIGN_STEPS: u32 = 25;

/// A nonzero magnitude below `1 << 24` reaches bit 23 in at most 23 shifts.
const MAX_NORMALIZE_STEPS: u32 = 24;

impl sf32 {
    /// Adds `self` and `rhs`, reporting whether bits were lost or the result
    /// left the finite range.
    ///
    /// `self.add_checked(rhs).into_inner()` is the value returned by `+`.
    pub fn add_checked(self, rhs: Self) -> FloatResult<Self> {
        let lhs = self;

        // Zero has no implicit integer bit, so it can't go through the
        // decomposition below.
        if lhs.is_zero() {
            return FloatResult::Exact(rhs);
        }
        if rhs.is_zero() {
            return FloatResult::Exact(lhs);
        }

        let (mut l, mut r) = (Decomposed::new(lhs), Decomposed::new(rhs));
        trace!("l bits: {:?}; decomp: {:?}", lhs, l);
        trace!("r bits: {:?}; decomp: {:?}", rhs, r);

        match align(&mut l, &mut r) {
            Alignment::Aligned => {}
            Alignment::LeftOperandNegligible => {
                trace!("lhs negligible, sum is rhs");
                return FloatResult::Truncated(rhs);
            }
            Alignment::RightOperandNegligible => {
                trace!("rhs negligible, sum is lhs");
                return FloatResult::Truncated(lhs);
            }
        }
        let exact = !(l.is_truncated() || r.is_truncated());
        let exp = l.exponent();
        trace!("adj exp={}; lhs={:?}; rhs={:?}", exp, l, r);

        let sum = l.to_sign_magnitude() + r.to_sign_magnitude();
        trace!("sum={:?}", sum);

        normalize(Decomposed::with_sign_magnitude_exponent(sum, exp), exact)
    }
}

/// Shifts the operand with the smaller exponent right until both exponents
/// are equal.
fn align(lhs: &mut Decomposed, rhs: &mut Decomposed) -> Alignment {
    for _ in 0..MAX_ALIGN_STEPS {
        match lhs.exponent().cmp(&rhs.exponent()) {
            Ordering::Equal => return Alignment::Aligned,
            Ordering::Less => {
                lhs.shift_right();
                if lhs.is_zero() {
                    return Alignment::LeftOperandNegligible;
                }
            }
            Ordering::Greater => {
                rhs.shift_right();
                if rhs.is_zero() {
                    return Alignment::RightOperandNegligible;
                }
            }
        }
    }

    unreachable!("alignment of {:?} and {:?} did not terminate", lhs, rhs)
}

/// Brings the integer bit of `sum` back to bit 23 and packs the result.
///
/// `exact` is `false` if alignment already discarded bits.
fn normalize(mut sum: Decomposed, exact: bool) -> FloatResult<sf32> {
    let finish = |value: sf32, exact: bool| {
        if exact {
            FloatResult::Exact(value)
        } else {
            FloatResult::Truncated(value)
        }
    };

    if sum.is_zero() {
        // The operands cancelled. The sign of zero is not kept.
        return finish(sf32::ZERO, exact);
    }

    if sum.has_carry() {
        sum.shift_right();
        trace!("carry out, shifted to {:?}", sum);

        // 255 is reserved for Inf/NaN, anything at or above it is out of
        // range.
        if sum.exponent() >= sf32::MAX_EXPONENT {
            debug!("exponent overflow: {:?}", sum);
            return FloatResult::Overflow { sign: sum.sign };
        }
    }

    for _ in 0..MAX_NORMALIZE_STEPS {
        if sum.is_normalized() {
            trace!("normalized: {:?}", sum);
            let exact = exact && !sum.is_truncated();
            return finish(sum.pack(), exact);
        }

        sum.shift_left();
        if sum.exponent() <= 0 {
            debug!("exponent underflow: {:?}", sum);
            return FloatResult::Underflow;
        }
    }

    unreachable!("normalization of {:?} did not terminate", sum)
}
