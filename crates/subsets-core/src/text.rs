//! Plain-text dump of a board, for debugging and the standalone solver.
//!
//! Each cell is drawn as a small block of characters, one per alphabet
//! letter: the letter itself when it is known to be in the set, `.` when it
//! has been ruled out, `?` while it is undetermined. Arrow glyphs `^ > v <`
//! appear between cells; incomparability is implicit and not drawn.

use std::fmt::{self, Write as _};

use crate::board::Board;
use crate::direction::Direction;

/// Width of a cell block in characters.
const fn cell_width(_n: u8) -> usize {
    2
}

/// Height of a cell block: enough rows of [`cell_width`] characters to show
/// every letter.
const fn cell_height(n: u8) -> usize {
    (n as usize + cell_width(n) - 1) / cell_width(n)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = usize::from(self.params().w);
        let h = usize::from(self.params().h);
        let n = self.params().n;
        let cw = cell_width(n);
        let ch = cell_height(n);

        for y in 0..h {
            for cy in 0..ch {
                for x in 0..w {
                    let cell = y * w + x;
                    for cx in 0..cw {
                        let k = (cy * cw + cx) as u8;
                        let glyph = if k >= n {
                            ' '
                        } else if self.known(cell).contains(k) {
                            (b'A' + k) as char
                        } else if !self.mask(cell).contains(k) {
                            '.'
                        } else {
                            '?'
                        };
                        f.write_char(glyph)?;
                    }
                    if x < w - 1 {
                        let sep = if cy != 0 {
                            ' '
                        } else if self.arrow(cell, Direction::Right) {
                            Direction::Right.glyph()
                        } else if self.arrow(cell + 1, Direction::Left) {
                            Direction::Left.glyph()
                        } else {
                            ' '
                        };
                        f.write_char(sep)?;
                    }
                }
                f.write_char('\n')?;
            }
            if y < h - 1 {
                for x in 0..w {
                    let cell = y * w + x;
                    let glyph = if self.arrow(cell, Direction::Down) {
                        Direction::Down.glyph()
                    } else if self.arrow(cell + w, Direction::Up) {
                        Direction::Up.glyph()
                    } else {
                        ' '
                    };
                    f.write_char(glyph)?;
                    for _ in 1..cw {
                        f.write_char(' ')?;
                    }
                    if x < w - 1 {
                        f.write_char(' ')?;
                    }
                }
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
