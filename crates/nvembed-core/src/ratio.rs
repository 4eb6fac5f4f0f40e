//! Aspect-ratio math.

use std::fmt;
use std::str::FromStr;

use crate::ParseRatioError;

/// Largest value allowed on either side of a reduced ratio.
const MAX_SIDE: u32 = 99;

/// An aspect ratio as an ordered pair of positive integers.
///
/// Both sides are kept in lowest terms and never exceed 99 when the
/// ratio is produced by [`Ratio::reduce`] or
/// [`Ratio::nearest_for_percentage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ratio {
    pub width: u32,
    pub height: u32,
}

impl Ratio {
    /// Create a ratio without reduction. Both sides must be positive.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    /// Reduce `width:height` to lowest terms, then scale down so that
    /// neither side exceeds 99, flooring each side at 1.
    ///
    /// Total for all inputs: a zero side is treated as 1, since a
    /// ratio has positive sides by definition.
    pub fn reduce(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let g = gcd(width, height);
        let mut x = width / g;
        let mut y = height / g;

        let max_val = x.max(y);
        if max_val > MAX_SIDE {
            let scale = MAX_SIDE as f64 / max_val as f64;
            x = ((x as f64 * scale).round() as u32).max(1);
            y = ((y as f64 * scale).round() as u32).max(1);
        }

        Self { width: x, height: y }
    }

    /// Find the integer ratio closest to a padding-bottom percentage
    /// (`height / width * 100`).
    ///
    /// Scans widths 1..=99 ascending and keeps the first candidate with
    /// the smallest error, so ties resolve to the smallest width. Used
    /// when importing the legacy percentage-padding markup, which never
    /// stored an integer ratio.
    pub fn nearest_for_percentage(percentage: f64) -> Self {
        let mut best = Self::new(1, 1);
        let mut best_error = f64::INFINITY;

        for w in 1..=MAX_SIDE {
            let h = (percentage / 100.0 * w as f64).round();
            if h < 1.0 || h > MAX_SIDE as f64 {
                continue;
            }
            let error = (h / w as f64 * 100.0 - percentage).abs();
            if error < best_error {
                best_error = error;
                best = Self::new(w, h as u32);
            }
        }

        best
    }

    /// Padding-bottom percentage realizing this ratio in a responsive
    /// box: `height / width * 100`.
    pub fn padding_percentage(&self) -> f64 {
        self.height as f64 / self.width as f64 * 100.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for Ratio {
    type Err = ParseRatioError;

    /// Parse the serialized `"w:h"` form. Both parts must be positive
    /// decimal integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once(':').ok_or(ParseRatioError)?;
        if w.is_empty() || h.is_empty() {
            return Err(ParseRatioError);
        }
        if !w.bytes().all(|b| b.is_ascii_digit()) || !h.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseRatioError);
        }
        let width: u32 = w.parse().map_err(|_| ParseRatioError)?;
        let height: u32 = h.parse().map_err(|_| ParseRatioError)?;
        if width == 0 || height == 0 {
            return Err(ParseRatioError);
        }
        Ok(Self { width, height })
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
