use core::fmt;

use crate::e24::StandardValue;

/// A resistor color band, bound to the digit it encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
}

impl ColorBand {
    /// Every color, indexed by its digit.
    pub const ALL: [ColorBand; 10] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Gray,
        ColorBand::White,
    ];

    /// Returns the color for `digit`, or `None` if it is not a single
    /// decimal digit.
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(digit)).copied()
    }

    pub fn digit(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Gray => "Gray",
            ColorBand::White => "White",
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three bands of a resistor: two significant digits and a
/// power-of-ten multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandTriple {
    pub first: ColorBand,
    pub second: ColorBand,
    pub multiplier: ColorBand,
}

impl BandTriple {
    /// Returns the resistance the bands stand for, in ohms.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::{BandTriple, ColorBand};
    ///
    /// let bands = BandTriple {
    ///     first: ColorBand::Yellow,
    ///     second: ColorBand::Violet,
    ///     multiplier: ColorBand::Red,
    /// };
    ///
    /// assert_eq!(bands.ohms(), 4700);
    /// ```
    pub fn ohms(&self) -> u32 {
        let significand = u32::from(self.first.digit()) * 10 + u32::from(self.second.digit());
        significand * 10u32.pow(u32::from(self.multiplier.digit()))
    }
}

impl fmt::Display for BandTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.first, self.second, self.multiplier)
    }
}

/// Returns the color bands for `value`.
///
/// # Examples
///
/// ```
/// use resistor_bands::{e24, ColorBand};
///
/// let bands = e24::nearest(10_000.0).bands();
///
/// assert_eq!(bands.first, ColorBand::Brown);
/// assert_eq!(bands.second, ColorBand::Black);
/// assert_eq!(bands.multiplier, ColorBand::Orange);
/// ```
pub fn decode(value: StandardValue) -> BandTriple {
    let (first, second, exponent) = digits(value.ohms());

    BandTriple {
        first: band(first),
        second: band(second),
        multiplier: band(exponent),
    }
}

// Below 1 kΩ the digits come from tenths of an ohm, so the exponent is one
// lower than the decade count.
fn digits(ohms: f32) -> (i32, i32, i32) {
    let (value, offset) = if ohms < 1_000.0 {
        ((ohms * 10.0) as i32, -1)
    } else {
        (ohms as i32, 0)
    };

    let (significand, decades) = significand(value);
    (significand / 10, significand % 10, decades + offset)
}

fn significand(mut value: i32) -> (i32, i32) {
    let mut decades = 0;

    while value >= 100 {
        value /= 10;
        decades += 1;
    }

    (value, decades)
}

// Every table value decodes to digits and exponents in 0..=9.
fn band(digit: i32) -> ColorBand {
    ColorBand::ALL[digit.clamp(0, 9) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e24::{nearest, values};
    use ColorBand::*;

    fn bands(ohms: f32) -> (ColorBand, ColorBand, ColorBand) {
        let bands = decode(nearest(ohms));
        (bands.first, bands.second, bands.multiplier)
    }

    #[test]
    fn digits_map_to_colors() {
        for digit in 0..10u8 {
            assert_eq!(ColorBand::from_digit(digit).unwrap().digit(), digit);
        }
        assert_eq!(ColorBand::from_digit(10), None);
        assert_eq!(Violet.name(), "Violet");
    }

    #[test]
    fn reconstructs_every_table_value() {
        for value in values() {
            assert_eq!(value.bands().ohms(), value.whole_ohms(), "{value}");
        }
    }

    #[test]
    fn above_one_kilohm() {
        assert_eq!(bands(10_000.0), (Brown, Black, Orange));
        assert_eq!(bands(4_700.0), (Yellow, Violet, Red));
        assert_eq!(bands(100_000.0), (Brown, Black, Yellow));
        assert_eq!(bands(91_000.0), (White, Brown, Orange));
    }

    #[test]
    fn below_one_kilohm() {
        assert_eq!(bands(510.0), (Green, Brown, Brown));
        assert_eq!(bands(560.0), (Green, Blue, Brown));
        assert_eq!(bands(910.0), (White, Brown, Brown));
    }

    #[test]
    fn one_kilohm_boundary() {
        assert_eq!(digits(1_000.0), (1, 0, 2));
        assert_eq!(digits(999.0), (9, 9, 1));
        assert_eq!(bands(1_000.0), (Brown, Black, Red));
    }

    #[test]
    fn sub_ten_ohm_exponent_is_negative() {
        assert_eq!(digits(56.0), (5, 6, 0));
        assert_eq!(digits(5.0), (5, 0, -1));
    }

    #[test]
    fn display() {
        assert_eq!(
            std::format!("{}", decode(nearest(4_700.0))),
            "Yellow, Violet, Red"
        );
    }
}
