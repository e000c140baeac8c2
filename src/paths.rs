use std::collections::{BTreeSet, VecDeque};

use crate::{error::Error, keypad::Keypad};

/// Enumerate every minimal keystroke string that moves a pointer from
/// `source` to `destination` on `keypad`, each ending with the `A` press.
///
/// The search only takes steps toward the destination, so every recorded
/// string has Manhattan-distance length. Routes that would rest on the gap
/// cell are discarded. An empty result is a hard error: it can only mean
/// the keypad layout walls a button off behind its gap.
pub fn shortest_paths<const WIDTH: usize, const HEIGHT: usize>(
    keypad: &Keypad<WIDTH, HEIGHT>,
    source: char,
    destination: char,
) -> Result<BTreeSet<String>, Error> {
    let start = keypad.locate(source)?;
    let end = keypad.locate(destination)?;

    if start == end {
        return Ok(BTreeSet::from(["A".to_owned()]));
    }

    let mut queue = VecDeque::from([(start, String::new())]);
    let mut candidates = BTreeSet::new();

    while let Some(((row, col), moves)) = queue.pop_front() {
        if keypad.is_gap(row, col) {
            continue;
        }
        if (row, col) == end {
            candidates.insert(format!("{moves}A"));
            continue;
        }

        if row < end.0 {
            queue.push_back(((row + 1, col), format!("{moves}v")));
        } else if row > end.0 {
            queue.push_back(((row - 1, col), format!("{moves}^")));
        }
        if col < end.1 {
            queue.push_back(((row, col + 1), format!("{moves}>")));
        } else if col > end.1 {
            queue.push_back(((row, col - 1), format!("{moves}<")));
        }
    }

    if candidates.is_empty() {
        return Err(Error::NoPathExists {
            keypad: keypad.name(),
            from: source,
            to: destination,
        });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::keypad::{DIRECTIONAL, NUMERIC};

    fn set(candidates: &[&str]) -> BTreeSet<String> {
        candidates.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case('A')]
    #[case('0')]
    #[case('5')]
    #[case('7')]
    fn self_transition(#[case] symbol: char) {
        assert_eq!(shortest_paths(&NUMERIC, symbol, symbol).unwrap(), set(&["A"]));
    }

    #[rstest]
    #[case('A')]
    #[case('<')]
    #[case('v')]
    fn self_transition_directional(#[case] symbol: char) {
        assert_eq!(
            shortest_paths(&DIRECTIONAL, symbol, symbol).unwrap(),
            set(&["A"])
        );
    }

    #[test]
    fn single_step() {
        assert_eq!(shortest_paths(&NUMERIC, 'A', '0').unwrap(), set(&["<A"]));
        assert_eq!(shortest_paths(&DIRECTIONAL, 'A', '^').unwrap(), set(&["<A"]));
    }

    #[test]
    fn all_toward_orderings_are_kept() {
        assert_eq!(
            shortest_paths(&NUMERIC, '2', '9').unwrap(),
            set(&[">^^A", "^>^A", "^^>A"])
        );
    }

    #[test]
    fn numeric_gap_is_avoided() {
        // `<<^` would rest on the gap below `1`
        assert_eq!(
            shortest_paths(&NUMERIC, 'A', '1').unwrap(),
            set(&["<^<A", "^<<A"])
        );
    }

    #[test]
    fn directional_gap_is_avoided() {
        // `<<v` would rest on the gap above `<`
        assert_eq!(
            shortest_paths(&DIRECTIONAL, 'A', '<').unwrap(),
            set(&["<v<A", "v<<A"])
        );
    }

    #[test]
    fn long_diagonal() {
        let candidates = shortest_paths(&NUMERIC, '7', 'A').unwrap();
        // 10 interleavings of `vvv>>`, minus the one passing over the gap
        assert_eq!(candidates.len(), 9);
        assert!(candidates.contains(">>vvvA"));
        assert!(!candidates.contains("vvv>>A"));
        assert!(candidates.iter().all(|candidate| candidate.len() == 6));
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            shortest_paths(&DIRECTIONAL, 'A', '3'),
            Err(Error::SymbolNotFound {
                keypad: "directional",
                symbol: '3',
            })
        );
    }
}
