//! Grid adjacency: the four directions and per-cell arrow flag sets.

/// One of the four grid directions.
///
/// A containment arrow on a cell points in one of these directions; the cell
/// at the other end of the arrow holds a subset of the cell the arrow
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in the order used by the description codec.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the `(dx, dy)` grid offset of the direction.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the glyph used for an arrow in this direction by the text dump.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }

    /// Returns the letter encoding the direction in a game description.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Right => 'R',
            Self::Down => 'D',
            Self::Left => 'L',
        }
    }

    /// Parses a description letter back into a direction.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Up),
            'R' => Some(Self::Right),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 4,
            Self::Left => 8,
        }
    }
}

/// A set of directions attached to one cell.
///
/// Boards use this both for the arrow clues of a cell and for reporting
/// which of a cell's edges are in error after validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdjFlags(u8);

impl AdjFlags {
    /// The empty flag set.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` if the given direction is in the set.
    #[must_use]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Adds a direction to the set.
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Returns `true` if no direction is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the directions in the set.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_offsets_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_letter_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
        assert_eq!(Direction::from_letter('X'), None);
        assert_eq!(Direction::from_letter('u'), None);
    }

    #[test]
    fn test_flags() {
        let mut flags = AdjFlags::EMPTY;
        assert!(flags.is_empty());

        flags.insert(Direction::Up);
        flags.insert(Direction::Left);
        assert!(flags.contains(Direction::Up));
        assert!(flags.contains(Direction::Left));
        assert!(!flags.contains(Direction::Right));

        let dirs: Vec<_> = flags.iter().collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Left]);
    }
}
