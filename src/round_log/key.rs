/// Parses a store key as a round index.
///
/// Only canonical decimal literals qualify: ASCII digits, no sign, no
/// whitespace, no decimal point and no leading zero except `"0"` itself.
/// Anything else (theme keys, `"01"`, `"+1"`, `"1.0"`) belongs to someone
/// else and is not a round.
pub fn parse_round_key(key: &str) -> Option<u64> {
    let bytes = key.as_bytes();
    let canonical = match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    };

    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

pub fn round_key(index: u64) -> String {
    index.to_string()
}
