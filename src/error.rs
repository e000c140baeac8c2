/// Everything that can go wrong while computing door-code complexities.
///
/// All of these indicate malformed input or a broken keypad layout, never a
/// transient condition, so callers are expected to abort the computation
/// that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the `{keypad}` keypad has no `{symbol}` button")]
    SymbolNotFound { keypad: &'static str, symbol: char },
    #[error("no gap-free route from `{from}` to `{to}` on the `{keypad}` keypad")]
    NoPathExists {
        keypad: &'static str,
        from: char,
        to: char,
    },
    #[error("door code `{0}` does not match `[0-9]+A`")]
    MalformedDoorCode(String),
}
