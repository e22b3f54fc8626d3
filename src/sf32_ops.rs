//! Arithmetic operation implementations for `sf32`.

use crate::sf32;

use std::ops;

impl ops::Neg for sf32 {
    type Output = sf32;

    fn neg(self) -> sf32 {
        sf32(self.0 ^ sf32::SIGN_MASK)
    }
}

impl<'a> ops::Neg for &'a sf32 {
    type Output = sf32;

    fn neg(self) -> sf32 {
        -(*self)
    }
}

// `+` silently truncates and saturates. Use `add_checked` to find out what
// happened.

impl ops::Add for sf32 {
    type Output = sf32;

    fn add(self, rhs: sf32) -> sf32 {
        self.add_checked(rhs).into_inner()
    }
}

impl<'a> ops::Add<&'a sf32> for sf32 {
    type Output = sf32;

    fn add(self, rhs: &'a sf32) -> sf32 {
        self + *rhs
    }
}

impl ops::AddAssign for sf32 {
    fn add_assign(&mut self, rhs: sf32) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::sf32;

    #[test]
    fn neg_flips_sign_only() {
        let f = sf32::from(2.5f32);
        assert_eq!((-f).to_bits(), 0xc020_0000);
        assert_eq!(-(-f), f);
        assert_eq!(-&sf32::ZERO, sf32::NEG_ZERO);
    }

    #[test]
    fn add_assign() {
        let mut acc = sf32::ZERO;
        for _ in 0..4 {
            acc += sf32::from(0.5f32);
        }
        assert_eq!(acc, sf32::from(2.0f32));
        assert_eq!(acc + &sf32::from(-2.0f32), sf32::ZERO);
    }
}
