//! The game-description codec.
//!
//! A description is a comma-separated list of exactly `w * h` cell entries
//! in row-major order. Each entry is either a decimal value (the cell is
//! given and immutable) or `_` (the cell is blank), followed by any number
//! of the letters `U`, `R`, `D`, `L` declaring containment arrows from the
//! cell toward its neighbours.
//!
//! Example for the 2x2 top-left corner of a board: `0,1L,2,3L,...` — cell 1
//! holds value 1 and points an arrow left at cell 0.

use std::fmt;

use crate::board::Board;
use crate::direction::Direction;
use crate::params::GameParams;
use crate::value_set::ValueSet;

/// Errors rejecting a malformed game description.
///
/// The `Display` text of each variant is the message surfaced to the
/// player, so the wording is part of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescError {
    /// More cell entries than the grid has cells.
    TooMuchData,
    /// A cell value outside `0..2^n`.
    OutOfRange,
    /// A cell entry starting with something other than a digit or `_`.
    ExpectingNumber,
    /// A letter other than `U`, `R`, `D`, `L` in flag position.
    ExpectingFlag,
    /// A cell entry not terminated by a comma.
    MissingSeparator,
    /// Fewer cell entries than the grid has cells.
    NotEnoughData,
    /// An arrow pointing past the edge of the grid.
    FlagsOffGrid,
    /// Two neighbouring cells pointing arrows at each other.
    FlagsContradict,
}

impl fmt::Display for DescError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DescError::TooMuchData => "Too much data to fill grid",
            DescError::OutOfRange => "Out-of-range number in game description",
            DescError::ExpectingNumber => "Expecting number in game description",
            DescError::ExpectingFlag => "Expecting flag URDL in game description",
            DescError::MissingSeparator => "Missing separator",
            DescError::NotEnoughData => "Not enough data to fill grid",
            DescError::FlagsOffGrid => "Flags go off grid",
            DescError::FlagsContradict => "Flags contradicting each other",
        };
        f.write_str(message)
    }
}

impl std::error::Error for DescError {}

impl Board {
    /// Parses a game description into a board.
    ///
    /// Given cells are loaded fully resolved and immutable; blank cells
    /// keep open bounds. After parsing, every arrow is checked to point at
    /// an existing neighbour and no two cells may claim arrows toward each
    /// other.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescError`] encountered; no partial board is
    /// retained.
    pub fn from_desc(params: GameParams, desc: &str) -> Result<Self, DescError> {
        let mut board = Self::new(params);
        let cells = params.cell_count();
        let bytes = desc.as_bytes();
        let mut p = 0;
        let mut cell = 0;

        while p < bytes.len() {
            if cell >= cells {
                return Err(DescError::TooMuchData);
            }

            match bytes[p] {
                b'0'..=b'9' => {
                    let start = p;
                    while p < bytes.len() && bytes[p].is_ascii_digit() {
                        p += 1;
                    }
                    let number: u32 = desc[start..p]
                        .parse()
                        .map_err(|_| DescError::OutOfRange)?;
                    if number > u32::from(params.full_set().bits()) {
                        return Err(DescError::OutOfRange);
                    }
                    board.fix(cell, ValueSet::from_bits(number as u16));
                }
                b'_' => p += 1,
                _ => return Err(DescError::ExpectingNumber),
            }

            while p < bytes.len() {
                match Direction::from_letter(bytes[p] as char) {
                    Some(dir) => {
                        board.insert_clue(cell, dir);
                        p += 1;
                    }
                    None => break,
                }
            }

            cell += 1;
            if cell < cells {
                match bytes.get(p) {
                    Some(b',') => {}
                    Some(c) if c.is_ascii_alphabetic() => return Err(DescError::ExpectingFlag),
                    _ => return Err(DescError::MissingSeparator),
                }
            }
            if bytes.get(p) == Some(&b',') {
                p += 1;
            }
        }
        if cell < cells {
            return Err(DescError::NotEnoughData);
        }

        for cell in board.cells() {
            for dir in board.clues(cell).iter() {
                match board.neighbour(cell, dir) {
                    None => return Err(DescError::FlagsOffGrid),
                    Some(other) => {
                        if board.arrow(other, dir.opposite()) {
                            return Err(DescError::FlagsContradict);
                        }
                    }
                }
            }
        }

        Ok(board)
    }

    /// Encodes the board as a game description.
    ///
    /// Only immutable cells emit their value; everything else is blank.
    /// This is the inverse of [`from_desc`](Self::from_desc) for boards in
    /// description form.
    #[must_use]
    pub fn to_desc(&self) -> String {
        let mut out = String::new();
        for cell in self.cells() {
            if cell > 0 {
                out.push(',');
            }
            if self.immutable(cell).is_empty() {
                out.push('_');
            } else {
                out.push_str(&self.known(cell).bits().to_string());
            }
            for dir in self.clues(cell).iter() {
                out.push(dir.letter());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Status;

    /// The fully-given identity puzzle: values 0..16 in row-major order with
    /// all of its containment arrows.
    const IDENTITY_DESC: &str = "0,1L,2,3L,4U,5UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";

    fn parse(desc: &str) -> Result<Board, DescError> {
        Board::from_desc(GameParams::default(), desc)
    }

    #[test]
    fn test_parse_identity_desc() {
        let board = parse(IDENTITY_DESC).unwrap();
        for cell in board.cells() {
            assert_eq!(board.immutable(cell), ValueSet::full(4));
            assert_eq!(board.value(cell), Some(ValueSet::from_bits(cell as u16)));
        }
        assert!(board.clues(0).is_empty());
        assert!(board.arrow(1, Direction::Left));
        assert!(board.arrow(5, Direction::Up));
        assert!(board.arrow(5, Direction::Left));
        assert_eq!(board.status(), Status::Complete);
    }

    #[test]
    fn test_round_trip() {
        let board = parse(IDENTITY_DESC).unwrap();
        assert_eq!(board.to_desc(), IDENTITY_DESC);

        let with_blank = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
        let board = parse(with_blank).unwrap();
        assert!(board.immutable(5).is_empty());
        assert!(!board.is_resolved(5));
        assert_eq!(board.to_desc(), with_blank);
    }

    #[test]
    fn test_out_of_range_number() {
        let err = parse("16,_,_,_,_,_,_,_,_,_,_,_,_,_,_,_").unwrap_err();
        assert_eq!(err, DescError::OutOfRange);
        assert_eq!(err.to_string(), "Out-of-range number in game description");

        // a number too large for any machine word is rejected the same way
        let err = parse("99999999999999999999,_,_,_,_,_,_,_,_,_,_,_,_,_,_,_").unwrap_err();
        assert_eq!(err, DescError::OutOfRange);
    }

    #[test]
    fn test_flags_off_grid() {
        let err = parse("0U,_,_,_,_,_,_,_,_,_,_,_,_,_,_,_").unwrap_err();
        assert_eq!(err, DescError::FlagsOffGrid);
        assert_eq!(err.to_string(), "Flags go off grid");
    }

    #[test]
    fn test_flags_contradicting() {
        let err = parse("0R,0L,_,_,_,_,_,_,_,_,_,_,_,_,_,_").unwrap_err();
        assert_eq!(err, DescError::FlagsContradict);
        assert_eq!(err.to_string(), "Flags contradicting each other");
    }

    #[test]
    fn test_expecting_number() {
        assert_eq!(parse(",_,_").unwrap_err(), DescError::ExpectingNumber);
        assert_eq!(parse("*0,_,_").unwrap_err(), DescError::ExpectingNumber);
    }

    #[test]
    fn test_expecting_flag() {
        assert_eq!(parse("0X,_,_").unwrap_err(), DescError::ExpectingFlag);
        assert_eq!(parse("0u,_,_").unwrap_err(), DescError::ExpectingFlag);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(parse("0 1,_,_").unwrap_err(), DescError::MissingSeparator);
        // a truncated description fails at the missing separator
        assert_eq!(parse("0").unwrap_err(), DescError::MissingSeparator);
    }

    #[test]
    fn test_cell_count_mismatch() {
        assert_eq!(
            parse("0,1,2,").unwrap_err(),
            DescError::NotEnoughData,
        );
        let seventeen = vec!["_"; 17].join(",");
        assert_eq!(parse(&seventeen).unwrap_err(), DescError::TooMuchData);
    }
}
