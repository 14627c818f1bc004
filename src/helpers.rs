/// Position of the first `needle` byte at or after `from`, as an absolute offset
pub fn find_byte(input: &str, from: usize, needle: u8) -> Option<usize> {
    let rest = input.as_bytes().get(from..)?;
    memchr::memchr(needle, rest).map(|pos| from + pos)
}

/// Position of the first occurrence of `needle` at or after `from`, as an absolute offset
/// Optimization: Uses SIMD-accelerated memmem for substring search
pub fn find_str(input: &str, from: usize, needle: &str) -> Option<usize> {
    let rest = input.as_bytes().get(from..)?;
    memchr::memmem::find(rest, needle.as_bytes()).map(|pos| from + pos)
}

/// Byte at `pos`, if any
pub fn byte_at(input: &str, pos: usize) -> Option<u8> {
    input.as_bytes().get(pos).copied()
}
