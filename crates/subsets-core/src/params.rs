//! Board parameters and their textual codec.
//!
//! Parameters are written as `<W>x<H>n<N>`, for example `4x4n4`. Decoding is
//! deliberately lenient (missing fields keep their defaults, so `4` and
//! `4x4` both parse); validation is strict and currently accepts only the
//! shipped 4x4 size with a 4-letter alphabet.

use std::fmt;
use std::str::FromStr;

use crate::value_set::ValueSet;

/// Size parameters of a board: width, height, and alphabet size.
///
/// A valid board places each of the `2^n` letter sets exactly once, so
/// `w * h` must equal `2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameParams {
    /// Board width in cells.
    pub w: u8,
    /// Board height in cells.
    pub h: u8,
    /// Number of letters in the alphabet.
    pub n: u8,
}

impl Default for GameParams {
    fn default() -> Self {
        Self { w: 4, h: 4, n: 4 }
    }
}

impl GameParams {
    /// Decodes a parameter string, keeping defaults for missing fields.
    ///
    /// The width comes first and also sets the height; an optional `x<H>`
    /// overrides the height and an optional `n<N>` the alphabet size.
    /// Decoding never fails; nonsense input produces parameters that
    /// [`validate`](Self::validate) will reject.
    #[must_use]
    pub fn decode(s: &str) -> Self {
        let mut params = Self::default();
        let mut rest = s;

        let (w, tail) = take_number(rest);
        params.w = w;
        params.h = w;
        rest = tail;

        if let Some(tail) = rest.strip_prefix('x') {
            let (h, tail) = take_number(tail);
            params.h = h;
            rest = tail;
        }
        if let Some(tail) = rest.strip_prefix('n') {
            let (n, _) = take_number(tail);
            params.n = n;
        }
        params
    }

    /// Checks that the parameters describe a supported board.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Unsupported`] for any size other than `4x4n4`.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.w != 4 || self.h != 4 || self.n != 4 {
            return Err(ParamsError::Unsupported);
        }
        Ok(())
    }

    /// Returns the named preset parameter sets offered to the player.
    #[must_use]
    pub fn presets() -> Vec<(String, Self)> {
        vec![("4x4 Size 4".to_owned(), Self::default())]
    }

    /// Returns the number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.w) * usize::from(self.h)
    }

    /// Returns the number of distinct cell values, `2^n`.
    #[must_use]
    pub fn value_count(&self) -> usize {
        1 << self.n
    }

    /// Returns the universal letter set for this alphabet.
    #[must_use]
    pub fn full_set(&self) -> ValueSet {
        ValueSet::full(self.n)
    }
}

impl fmt::Display for GameParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}n{}", self.w, self.h, self.n)
    }
}

impl FromStr for GameParams {
    type Err = ParamsError;

    /// Decodes and validates a parameter string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let params = Self::decode(s);
        params.validate()?;
        Ok(params)
    }
}

/// Splits a leading decimal number off a string, defaulting to zero.
fn take_number(s: &str) -> (u8, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let value = s[..end].parse().unwrap_or(0);
    (value, &s[end..])
}

/// Error produced by [`GameParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// The parameters name a board size this implementation does not support.
    Unsupported,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Unsupported => write!(f, "Currently only 4x4 puzzles are supported"),
        }
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full() {
        let params = GameParams::decode("4x4n4");
        assert_eq!(params, GameParams { w: 4, h: 4, n: 4 });
    }

    #[test]
    fn test_decode_partial() {
        // a bare width sets the height too and keeps the default alphabet
        assert_eq!(GameParams::decode("4"), GameParams { w: 4, h: 4, n: 4 });
        assert_eq!(GameParams::decode("5x3"), GameParams { w: 5, h: 3, n: 4 });
        assert_eq!(GameParams::decode("2n3"), GameParams { w: 2, h: 2, n: 3 });
    }

    #[test]
    fn test_decode_garbage() {
        let params = GameParams::decode("abc");
        assert_eq!(params.w, 0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(GameParams::default().validate().is_ok());
        assert!(GameParams { w: 3, h: 4, n: 4 }.validate().is_err());
        assert!(GameParams { w: 4, h: 4, n: 5 }.validate().is_err());
        assert_eq!(
            GameParams { w: 5, h: 5, n: 4 }.validate().unwrap_err().to_string(),
            "Currently only 4x4 puzzles are supported"
        );
    }

    #[test]
    fn test_display_round_trip() {
        let params = GameParams::default();
        assert_eq!(params.to_string(), "4x4n4");
        assert_eq!("4x4n4".parse::<GameParams>().unwrap(), params);
        assert!("5x5n4".parse::<GameParams>().is_err());
    }

    #[test]
    fn test_counts() {
        let params = GameParams::default();
        assert_eq!(params.cell_count(), 16);
        assert_eq!(params.value_count(), 16);
        assert_eq!(params.full_set().bits(), 0b1111);
    }

    #[test]
    fn test_presets() {
        let presets = GameParams::presets();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].0, "4x4 Size 4");
        assert!(presets[0].1.validate().is_ok());
    }
}
