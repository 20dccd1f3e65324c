//! The textual move encoding.
//!
//! A player move is `<op><cell>,<bit>` where `<op>` is `K` (mark a letter
//! known), `C` (mark it contradicted), or `U` (back to unknown). A solve
//! move is `S` followed by `known,mask` pairs for every cell in row-major
//! order.

use std::fmt;

use subsets_core::{GameParams, ValueSet};

/// A player's bit-level operation on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOp {
    /// Mark the letter as present in the cell's set.
    Known,
    /// Mark the letter as absent from the cell's set.
    Contradict,
    /// Forget any marking of the letter.
    Unknown,
}

impl PlayerOp {
    /// Returns the letter encoding the operation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Known => 'K',
            Self::Contradict => 'C',
            Self::Unknown => 'U',
        }
    }

    /// Parses an encoded operation letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'K' => Some(Self::Known),
            'C' => Some(Self::Contradict),
            'U' => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// One move of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// A player operation on one bit of one cell.
    Player {
        /// The operation to perform.
        op: PlayerOp,
        /// Row-major index of the cell.
        cell: usize,
        /// Letter index within the cell's value.
        bit: u8,
    },
    /// Replace every cell's bounds, the payload of a solve.
    Solve(Vec<(ValueSet, ValueSet)>),
}

impl Move {
    /// Parses an encoded move.
    ///
    /// Returns `None` for anything malformed; the host treats that as a
    /// null move and ignores it. Range checks on the cell and bit are the
    /// job of [`Game::execute`](crate::Game::execute), not the parser.
    #[must_use]
    pub fn parse(s: &str, params: &GameParams) -> Option<Self> {
        let mut chars = s.chars();
        let head = chars.next()?;
        let rest = chars.as_str();

        if head == 'S' {
            let numbers: Vec<u16> = rest
                .split(',')
                .map(|field| field.parse().ok())
                .collect::<Option<_>>()?;
            if numbers.len() != 2 * params.cell_count() {
                return None;
            }
            let pairs = numbers
                .chunks_exact(2)
                .map(|pair| (ValueSet::from_bits(pair[0]), ValueSet::from_bits(pair[1])))
                .collect();
            return Some(Self::Solve(pairs));
        }

        let op = PlayerOp::from_letter(head)?;
        let (cell, bit) = rest.split_once(',')?;
        Some(Self::Player {
            op,
            cell: cell.parse().ok()?,
            bit: bit.parse().ok()?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Player { op, cell, bit } => write!(f, "{}{cell},{bit}", op.letter()),
            Move::Solve(pairs) => {
                f.write_str("S")?;
                for (index, (known, mask)) in pairs.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{},{}", known.bits(), mask.bits())?;
                }
                Ok(())
            }
        }
    }
}
