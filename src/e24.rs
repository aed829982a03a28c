use core::fmt::{self, Write};

use heapless::String;

use crate::color::{decode, BandTriple};

/// E24 values from 510 Ω to 100 kΩ, in ascending order.
pub static E24: [f32; 56] = [
    510.0, 560.0, 620.0, 680.0, 750.0, 820.0, 910.0, //
    1_000.0, 1_100.0, 1_200.0, 1_300.0, 1_500.0, 1_600.0, 1_800.0, 2_000.0, 2_200.0, 2_400.0,
    2_700.0, 3_000.0, 3_300.0, 3_600.0, 3_900.0, 4_300.0, 4_700.0, //
    5_100.0, 5_600.0, 6_200.0, 6_800.0, 7_500.0, 8_200.0, 9_100.0, //
    10_000.0, 11_000.0, 12_000.0, 13_000.0, 15_000.0, 16_000.0, 18_000.0, 20_000.0, 22_000.0,
    24_000.0, 27_000.0, 30_000.0, 33_000.0, 36_000.0, 39_000.0, 43_000.0, 47_000.0, //
    51_000.0, 56_000.0, 62_000.0, 68_000.0, 75_000.0, 82_000.0, 91_000.0, //
    100_000.0,
];

/// Smallest resistance the table can represent (Ω).
pub const MIN_OHMS: f32 = 510.0;

/// Largest resistance the table can represent (Ω).
pub const MAX_OHMS: f32 = 100_000.0;

/// Enough room for the widest table value.
pub const LABEL_CAPACITY: usize = 8;

/// One entry of the [`E24`] table.
///
/// The only ways to obtain one are [`nearest`] and [`values`], so a
/// `StandardValue` is always a part that can actually be bought.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StandardValue(f32);

impl StandardValue {
    pub fn ohms(self) -> f32 {
        self.0
    }

    pub fn whole_ohms(self) -> u32 {
        self.0 as u32
    }

    /// Returns the color bands printed on a resistor of this value.
    pub fn bands(self) -> BandTriple {
        decode(self)
    }

    /// Renders the value in whole ohms, eg. `"4700"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_bands::e24;
    ///
    /// assert_eq!(e24::nearest(99_000.0).label().as_str(), "100000");
    /// ```
    pub fn label(self) -> String<LABEL_CAPACITY> {
        let mut label = String::new();
        // Six digits at most, so this cannot overflow.
        let _ = write!(label, "{}", self.whole_ohms());
        label
    }
}

impl fmt::Display for StandardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ω", self.whole_ohms())
    }
}

/// Returns true if `ohms` lies within the span of the [`E24`] table.
pub fn covers(ohms: f32) -> bool {
    (MIN_OHMS..=MAX_OHMS).contains(&ohms)
}

/// Returns the entry of `table` closest to `ohms`, or `None` if the table is
/// empty.
///
/// The table must be in ascending order. When two entries are equally close,
/// the smaller one wins.
///
/// # Examples
///
/// ```
/// use resistor_bands::e24::closest;
///
/// assert_eq!(closest(1_049.0, &[1_000.0, 1_100.0]), Some(1_000.0));
/// assert_eq!(closest(1_050.0, &[1_000.0, 1_100.0]), Some(1_000.0));
/// assert_eq!(closest(1_051.0, &[1_000.0, 1_100.0]), Some(1_100.0));
/// ```
pub fn closest(ohms: f32, table: &[f32]) -> Option<f32> {
    debug_assert!(
        table.windows(2).all(|w| w[0] <= w[1]),
        "The values in table must be in ascending order"
    );

    let (&first, rest) = table.split_first()?;
    let mut best = first;
    let mut best_distance = distance(ohms, first);

    for &candidate in rest {
        let candidate_distance = distance(ohms, candidate);
        if candidate_distance < best_distance {
            best = candidate;
            best_distance = candidate_distance;
        }
    }

    Some(best)
}

/// Returns the [`E24`] value closest to `ohms`.
///
/// Values outside the table's span snap to its nearest end; check
/// [`covers`] first if that should be treated as a failed reading.
pub fn nearest(ohms: f32) -> StandardValue {
    StandardValue(closest(ohms, &E24).unwrap_or(MIN_OHMS))
}

/// Iterates over every [`E24`] value in ascending order.
pub fn values() -> impl Iterator<Item = StandardValue> {
    E24.iter().copied().map(StandardValue)
}

fn distance(a: f32, b: f32) -> f32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn panics_if_unsorted_table() {
        closest(1_000.0, &[1_100.0, 1_000.0]);
    }

    #[test]
    fn table_is_ascending() {
        assert!(E24.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(E24[0], MIN_OHMS);
        assert_eq!(E24[E24.len() - 1], MAX_OHMS);
    }

    #[test]
    fn empty_table() {
        assert_eq!(closest(1_000.0, &[]), None);
    }

    #[test]
    fn tie_keeps_first() {
        assert_eq!(closest(1_050.0, &[1_000.0, 1_100.0]), Some(1_000.0));
        assert_eq!(nearest(1_050.0).ohms(), 1_000.0);
        assert_eq!(nearest(535.0).ohms(), 510.0);
    }

    #[test]
    fn matching_exact_values() {
        for value in values() {
            assert_eq!(nearest(value.ohms()), value);
        }
    }

    #[test]
    fn snaps_to_nearest() {
        assert_eq!(nearest(10_004.9).ohms(), 10_000.0);
        assert_eq!(nearest(4_650.0).ohms(), 4_700.0);
        assert_eq!(nearest(1_249.0).ohms(), 1_200.0);
        assert_eq!(nearest(1_251.0).ohms(), 1_300.0);
        assert_eq!(nearest(96_000.0).ohms(), 100_000.0);
    }

    #[test]
    fn outside_span_snaps_to_ends() {
        assert_eq!(nearest(0.0).ohms(), 510.0);
        assert_eq!(nearest(250_000.0).ohms(), 100_000.0);
    }

    #[test]
    fn covered_span() {
        assert!(covers(510.0));
        assert!(covers(100_000.0));
        assert!(!covers(509.9));
        assert!(!covers(100_000.5));
        assert!(!covers(0.0));
    }

    #[test]
    fn labels() {
        assert_eq!(nearest(510.0).label().as_str(), "510");
        assert_eq!(nearest(4_700.0).label().as_str(), "4700");
        assert_eq!(nearest(100_000.0).label().as_str(), "100000");
    }

    #[test]
    fn display() {
        assert_eq!(std::format!("{}", nearest(4_700.0)), "4700 Ω");
    }
}
