// functions for working with byte arrays

pub fn parse_bytes<T: std::str::FromStr>(b: &[u8]) -> Option<T> {
    std::str::from_utf8(b).ok()?.parse().ok()
}

pub(crate) fn trim_spaces_end(b: &[u8]) -> &[u8] {
    let space_count = b.iter().rev().take_while(|&&c| c == b' ').count();

    &b[..b.len() - space_count]
}

/// Strips a single trailing line terminator left over from the transport.
pub(crate) fn strip_terminator(b: &[u8]) -> &[u8] {
    match b {
        [rest @ .., b'\r', b'\n'] => rest,
        [rest @ .., b'\r'] | [rest @ .., b'\n'] => rest,
        _ => b,
    }
}
