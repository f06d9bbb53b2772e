//! Accumulated query reports and the belief estimate derived from them.

use serde::{Deserialize, Serialize};

use super::cell::Color;
use crate::core::config::MAX_ESTIMATE_PRECISION;

/// Per-cell tally of noisy color reports received by one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evidence {
    /// Reports that said "white".
    pub white: u32,
    /// Reports that said "black".
    pub black: u32,
}

impl Evidence {
    #[must_use]
    pub const fn new(white: u32, black: u32) -> Self {
        Self { white, black }
    }

    /// Count one more report of `color`.
    pub fn record(&mut self, color: Color) {
        match color {
            Color::White => self.white = self.white.saturating_add(1),
            Color::Black => self.black = self.black.saturating_add(1),
        }
    }

    /// Total number of reports received.
    #[must_use]
    pub(crate) fn total(&self) -> u64 {
        u64::from(self.white) + u64::from(self.black)
    }

    /// Belief that the cell is black, see [`estimate`].
    #[must_use]
    pub fn estimate(&self) -> f64 {
        estimate(self.white, self.black)
    }
}

/// Belief in `[0, 1]` that a cell is black given its report counts.
///
/// Equal counts give `0.5`. A black margin `d` gives
/// `0.5 + (1 - e^(-d/(1+d))) / 2`; a white margin is the mirror image
/// `1 - (0.5 + (1 - e^(-d/(1+d))) / 2)`. The exponent is bounded by 1, so
/// the result stays within roughly `[0.184, 0.816]` for any counts.
#[must_use]
pub fn estimate(white: u32, black: u32) -> f64 {
    if white == black {
        return 0.5;
    }
    let margin = f64::from(white.abs_diff(black));
    let lean = 0.5 + (1.0 - (-margin / (1.0 + margin)).exp()) / 2.0;
    if black > white {
        lean
    } else {
        1.0 - lean
    }
}

/// Round to a fixed number of decimal digits, at most
/// [`MAX_ESTIMATE_PRECISION`].
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let digits = digits.min(MAX_ESTIMATE_PRECISION) as i32;
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_balanced_is_uncertain() {
        assert_eq!(estimate(0, 0), 0.5);
        assert_eq!(estimate(4, 4), 0.5);
        assert_eq!(estimate(u32::MAX, u32::MAX), 0.5);
    }

    #[test]
    fn test_direction() {
        assert!(estimate(0, 5) > 0.5);
        assert!(estimate(5, 0) < 0.5);
    }

    #[test]
    fn test_known_values() {
        // d = 1: 0.5 + (1 - e^-0.5) / 2
        let expected = 0.5 + (1.0 - (-0.5f64).exp()) / 2.0;
        assert!((estimate(0, 1) - expected).abs() < 1e-12);
        assert!((estimate(1, 0) - (1.0 - expected)).abs() < 1e-12);
        assert_eq!(round_to(estimate(7, 0), 3), 0.208);
    }

    #[test]
    fn test_symmetry() {
        for d in 0..20 {
            assert!((estimate(d, 0) + estimate(0, d) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_large_counts_are_stable() {
        let high = estimate(0, u32::MAX);
        let low = estimate(u32::MAX, 0);
        assert!(high.is_finite() && high < 1.0);
        assert!(low.is_finite() && low > 0.0);
    }

    #[test]
    fn test_evidence_record() {
        let mut evidence = Evidence::default();
        evidence.record(Color::Black);
        evidence.record(Color::Black);
        evidence.record(Color::White);

        assert_eq!(evidence, Evidence::new(1, 2));
        assert_eq!(evidence.total(), 3);
        assert_eq!(evidence.estimate(), estimate(1, 2));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.20845, 3), 0.208);
        assert_eq!(round_to(0.5, 3), 0.5);
        assert_eq!(round_to(0.7916, 2), 0.79);
    }

    #[test]
    fn test_round_to_caps_digits() {
        let p = estimate(7, 0);
        assert_eq!(round_to(p, 400), round_to(p, 15));
        assert_eq!(round_to(p, u32::MAX), round_to(p, 15));
        assert!((0.0..=1.0).contains(&round_to(p, u32::MAX)));
    }

    proptest! {
        #[test]
        fn prop_estimate_in_unit_interval(white in 0u32..10_000, black in 0u32..10_000) {
            let p = estimate(white, black);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn prop_monotone_in_black(white in 0u32..1_000, black in 0u32..1_000) {
            prop_assert!(estimate(white, black + 1) >= estimate(white, black));
        }

        #[test]
        fn prop_antitone_in_white(white in 0u32..1_000, black in 0u32..1_000) {
            prop_assert!(estimate(white + 1, black) <= estimate(white, black));
        }
    }
}
