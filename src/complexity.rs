use crate::{error::Error, keypad::NUMERIC, sequence::expand, solver::Solver};

/// Numeric value of a door code: its digits with the trailing `A` stripped,
/// leading zeroes ignored.
///
/// Codes must match `[0-9]+A`; anything else is rejected here, before any
/// expansion work happens.
pub fn numeric_value(code: &str) -> Result<u64, Error> {
    code.strip_suffix('A')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| Error::MalformedDoorCode(code.to_owned()))
}

/// Fewest human keystrokes that get `code` typed on the numeric keypad
/// through `depth` chained robots.
pub fn minimal_keystrokes(solver: &mut Solver, code: &str, depth: usize) -> Result<u64, Error> {
    numeric_value(code)?;

    let mut best = u64::MAX;
    for candidate in expand(&NUMERIC, code)? {
        best = best.min(solver.minimal_cost(&candidate, depth)?);
    }
    Ok(best)
}

/// Sum over all door codes of minimal keystrokes × numeric value.
///
/// One solver is shared across the codes; memo keys are depth-qualified, so
/// reuse across calls at different depths would be just as correct.
pub fn total_complexity<S>(door_codes: &[S], depth: usize) -> Result<u64, Error>
where
    S: AsRef<str>,
{
    let mut solver = Solver::new();
    let mut total = 0;
    for code in door_codes {
        let code = code.as_ref();
        let value = numeric_value(code)?;
        total += minimal_keystrokes(&mut solver, code, depth)? * value;
    }
    Ok(total)
}
