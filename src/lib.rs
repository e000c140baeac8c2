mod complexity;
mod error;
mod keypad;
mod paths;
mod sequence;
mod solver;

pub use complexity::{minimal_keystrokes, numeric_value, total_complexity};
pub use error::Error;
pub use keypad::{Keypad, DIRECTIONAL, NUMERIC};
pub use paths::shortest_paths;
pub use sequence::expand;
pub use solver::Solver;
