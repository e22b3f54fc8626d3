//! Human-readable rendering of `sf32` bit patterns.

use crate::sf32;
use std::fmt;

/// Displays the sign, exponent and fraction fields of an `sf32` as a table.
///
/// ```notrust
/// | Sign | Exponent | Mantissa                |
/// |------|----------|-------------------------|
/// | 0    | 01111111 | 00000000000000000000000 |
/// ```
///
/// The table is followed by an empty line.
#[derive(Debug, Copy, Clone)]
pub struct BitTable(pub sf32);

impl fmt::Display for BitTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bits = self.0;
        writeln!(f, "| Sign | Exponent | Mantissa                |")?;
        writeln!(f, "|------|----------|-------------------------|")?;
        writeln!(
            f,
            "| {}    | {:08b} | {:023b} |",
            bits.sign_bit() as u8,
            bits.biased_exponent(),
            bits.fraction(),
        )?;
        writeln!(f)
    }
}

impl From<sf32> for BitTable {
    fn from(f: sf32) -> Self {
        BitTable(f)
    }
}

impl From<f32> for BitTable {
    fn from(f: f32) -> Self {
        BitTable(sf32::from(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one() {
        let table = BitTable::from(1.0f32).to_string();
        assert_eq!(
            table,
            "| Sign | Exponent | Mantissa                |\n\
             |------|----------|-------------------------|\n\
             | 0    | 01111111 | 00000000000000000000000 |\n\
             \n"
        );
    }

    #[test]
    fn negative_infinity() {
        let table = BitTable(sf32::NEG_INFINITY).to_string();
        assert!(table.contains("| 1    | 11111111 | 00000000000000000000000 |"), "{}", table);
    }

    #[test]
    fn fraction_is_zero_padded() {
        let table = BitTable(sf32::from_bits(0x0000_0001)).to_string();
        assert!(table.contains("| 0    | 00000000 | 00000000000000000000001 |"), "{}", table);
    }
}
