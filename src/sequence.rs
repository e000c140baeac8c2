use std::collections::BTreeSet;

use crate::{error::Error, keypad::Keypad, paths::shortest_paths};

/// Expand a code into every candidate keystroke string a controller could
/// type on `keypad` to produce it.
///
/// The controller's pointer starts on `A`, so a code of length L has L
/// transitions; each contributes its set of minimal paths, and the result
/// is the in-order cartesian concatenation of those sets. With at most a
/// handful of paths per transition the product stays small for door codes.
pub fn expand<const WIDTH: usize, const HEIGHT: usize>(
    keypad: &Keypad<WIDTH, HEIGHT>,
    code: &str,
) -> Result<BTreeSet<String>, Error> {
    let mut candidates = BTreeSet::from([String::new()]);
    let mut pointer = 'A';

    for target in code.chars() {
        let segments = shortest_paths(keypad, pointer, target)?;
        candidates = candidates
            .iter()
            .flat_map(|prefix| {
                segments
                    .iter()
                    .map(move |segment| format!("{prefix}{segment}"))
            })
            .collect();
        pointer = target;
    }

    Ok(candidates)
}
