//! Binary movement patterns.
//!
//! Several accuracy measures label each sample (or each step between samples)
//! with one bit, e.g. "inside the target" or "moving up", and then look for
//! changes in that bit. Raw labels flicker because of sensor noise, so a
//! pattern is smoothed before it is scanned:
//!
//! 1. one forward pass over every 3-wide window rewrites `101` to `111` and
//!    `010` to `000`;
//! 2. one forward pass over every 4-wide window rewrites `1001` to `1111` and
//!    `0110` to `0000`.
//!
//! Rewrites happen in place, so a window sees the bits written by earlier
//! windows of the same pass. Neither pass iterates to a fixed point, and the
//! final window of each pass is never examined. Historical results depend on
//! these details.
//!
//! ```
//! use fitts_analysis::pattern::Pattern;
//!
//! let smoothed: Pattern = "1101001111".parse::<Pattern>().unwrap().smoothed();
//! assert_eq!(smoothed.to_string(), "1111111111");
//! ```

use std::{fmt, str::FromStr};

/// A sequence of binary labels.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pattern {
    bits: Vec<bool>,
}

impl Pattern {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Applies the two smoothing passes described in the [module docs](self).
    #[must_use]
    pub fn smoothed(mut self) -> Self {
        let bits = &mut self.bits;

        for i in 0..bits.len().saturating_sub(3) {
            match (bits[i], bits[i + 1], bits[i + 2]) {
                (true, false, true) => bits[i + 1] = true,
                (false, true, false) => bits[i + 1] = false,
                _ => {}
            }
        }

        for i in 0..bits.len().saturating_sub(4) {
            match (bits[i], bits[i + 1], bits[i + 2], bits[i + 3]) {
                (true, false, false, true) => bits[i + 1..i + 3].fill(true),
                (false, true, true, false) => bits[i + 1..i + 3].fill(false),
                _ => {}
            }
        }

        self
    }

    /// Number of `0` -> `1` transitions.
    ///
    /// ```
    /// # use fitts_analysis::pattern::Pattern;
    /// let pattern: Pattern = "0011100111".parse().unwrap();
    /// assert_eq!(pattern.rising_edges(), 2);
    /// ```
    #[must_use]
    pub fn rising_edges(&self) -> usize {
        self.bits.windows(2).filter(|w| !w[0] && w[1]).count()
    }

    /// Pairs of consecutive run starts `(previous, next)`.
    ///
    /// The first run starts at index 0. A pair is produced for every run
    /// boundary except one at the final index, since a run of length one at
    /// the end of the pattern is not a sustained change of direction.
    ///
    /// ```
    /// # use fitts_analysis::pattern::Pattern;
    /// let pattern: Pattern = "1110000111".parse().unwrap();
    /// let pairs: Vec<_> = pattern.run_boundaries().collect();
    /// assert_eq!(pairs, [(0, 3), (3, 7)]);
    /// ```
    pub fn run_boundaries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let bits = &self.bits;
        let len = bits.len();
        let starts = move || (1..len).filter(move |&i| bits[i] != bits[i - 1]);
        std::iter::once(0)
            .chain(starts())
            .zip(starts())
            .filter(move |&(_, next)| next + 1 < len)
    }
}

impl FromIterator<bool> for Pattern {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A character other than `0` or `1` in a pattern literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid pattern symbol {symbol:?} at index {index}")]
pub struct ParsePatternError {
    pub symbol: char,
    pub index: usize,
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParsePatternError { symbol, index }),
            })
            .collect()
    }
}
