use std::collections::HashMap;

use crate::{error::Error, keypad::DIRECTIONAL, paths::shortest_paths};

/// Computes minimum human keystroke counts for keystroke strings realized
/// through a chain of directional-keypad-controlled robots.
///
/// The memo table lives on the solver instance, keyed by
/// `(sequence, depth)`, so a solver can be reused across codes and depths
/// or dropped to discard the cache. Counts are `u64`: at chain depth 25
/// they overflow 32 bits.
#[derive(Debug, Default)]
pub struct Solver {
    memo: HashMap<(String, usize), u64>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of keystrokes a human must type, through `depth`
    /// chained robots, to get `sequence` typed on the keypad below.
    ///
    /// After every transition the controlling pointer is back on `A` (each
    /// segment ends with the press), so the cost splits into per-transition
    /// minima evaluated one level down. At depth 0 the human types the
    /// sequence directly and the cost is its length.
    pub fn minimal_cost(&mut self, sequence: &str, depth: usize) -> Result<u64, Error> {
        if depth == 0 {
            return Ok(sequence.len() as u64);
        }
        let key = (sequence.to_owned(), depth);
        if let Some(&cost) = self.memo.get(&key) {
            return Ok(cost);
        }

        let mut pointer = 'A';
        let mut total = 0;
        for target in sequence.chars() {
            let mut best = u64::MAX;
            for candidate in shortest_paths(&DIRECTIONAL, pointer, target)? {
                best = best.min(self.minimal_cost(&candidate, depth - 1)?);
            }
            total += best;
            pointer = target;
        }

        self.memo.insert(key, total);
        Ok(total)
    }
}
