/// Longest hostname kept in a parsed URL
pub const MAX_HOST_LEN: usize = 255;

/// Largest value accepted as a port
pub const MAX_PORT: i64 = 65535;

/// Check if a hostname length fits the host field
pub fn is_valid_host_len(len: usize) -> bool {
    len <= MAX_HOST_LEN
}

/// Parse the leading decimal integer of `input`, C `atoi` style.
///
/// Leading ASCII whitespace and one optional sign are accepted, digits are
/// read until the first non-digit and anything after is ignored. No digits
/// yields 0. The magnitude saturates instead of overflowing.
pub fn parse_int_prefix(input: &str) -> i64 {
    let bytes = input.as_bytes();
    let mut pos = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
        .unwrap_or(bytes.len());

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let magnitude = bytes[pos..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Parse a port the permissive way: leading integer, out of range is `None`.
///
/// Negative values count as out of range; an empty or non-numeric field is
/// port 0.
pub fn parse_port(input: &str) -> Option<u16> {
    let value = parse_int_prefix(input);
    if (0..=MAX_PORT).contains(&value) {
        u16::try_from(value).ok()
    } else {
        None
    }
}
