use crate::error::Error;

/// A fixed rectangular button grid with exactly one gap cell.
///
/// For indexing operations on a keypad, `(0, 0)` is the top left corner,
/// addressed as `(row, col)`. The gap cell is in bounds but holds no button;
/// a pointer must never rest on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad<const WIDTH: usize, const HEIGHT: usize> {
    name: &'static str,
    keys: [[Option<char>; WIDTH]; HEIGHT],
}

/// The door keypad: `7 8 9 / 4 5 6 / 1 2 3 / gap 0 A`.
pub const NUMERIC: Keypad<3, 4> = Keypad {
    name: "numeric",
    keys: [
        [Some('7'), Some('8'), Some('9')],
        [Some('4'), Some('5'), Some('6')],
        [Some('1'), Some('2'), Some('3')],
        [None, Some('0'), Some('A')],
    ],
};

/// The robot remote: `gap ^ A / < v >`.
pub const DIRECTIONAL: Keypad<3, 2> = Keypad {
    name: "directional",
    keys: [
        [None, Some('^'), Some('A')],
        [Some('<'), Some('v'), Some('>')],
    ],
};

impl<const WIDTH: usize, const HEIGHT: usize> Keypad<WIDTH, HEIGHT> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < HEIGHT && col < WIDTH
    }

    pub fn is_gap(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.keys[row][col].is_none()
    }

    /// Get the position of `symbol` on this keypad.
    ///
    /// Failure means the caller fed a code character to the wrong keypad;
    /// it never happens for well-formed input.
    pub fn locate(&self, symbol: char) -> Result<(usize, usize), Error> {
        for (row, keys) in self.keys.iter().enumerate() {
            for (col, key) in keys.iter().enumerate() {
                if *key == Some(symbol) {
                    return Ok((row, col));
                }
            }
        }
        Err(Error::SymbolNotFound {
            keypad: self.name,
            symbol,
        })
    }
}
