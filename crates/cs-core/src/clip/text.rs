//! Text and file-list payload codecs.
//!
//! Wide text payloads are UTF-16LE code units, narrow text payloads are raw
//! bytes (decoded as UTF-8, lossy). Both may carry a trailing NUL terminator,
//! which is where decoding stops. File-drop payloads hold one UTF-8 path per line.

use std::path::PathBuf;

/// Decode a wide (UTF-16LE) payload up to the first NUL unit.
pub fn decode_wide(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|unit| *unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

/// Encode text as a NUL-terminated wide payload.
pub fn encode_wide(text: &str) -> Vec<u8> {
    text.encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

/// Narrow payload bytes up to the first NUL.
pub fn narrow_bytes(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

/// Decode a narrow payload up to the first NUL.
pub fn decode_narrow(bytes: &[u8]) -> String {
    String::from_utf8_lossy(narrow_bytes(bytes)).into_owned()
}

/// Encode text as a NUL-terminated narrow payload.
pub fn encode_narrow(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0);
    bytes
}

/// Wide payload without its terminator, as raw little-endian units.
pub fn wide_units_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(2)
        .take_while(|pair| pair[0] != 0 || pair[1] != 0)
        .flatten()
        .copied()
        .collect()
}

/// Paths carried by a file-drop payload.
pub fn decode_file_drop(bytes: &[u8]) -> Vec<PathBuf> {
    decode_narrow(bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub fn encode_file_drop<P: AsRef<std::path::Path>>(paths: &[P]) -> Vec<u8> {
    paths
        .iter()
        .map(|p| p.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_roundtrip_stops_at_terminator() {
        let mut bytes = encode_wide("Hello");
        bytes.extend_from_slice(&encode_wide("ignored"));
        assert_eq!(decode_wide(&bytes), "Hello");
    }

    #[test]
    fn wide_handles_non_ascii() {
        assert_eq!(decode_wide(&encode_wide("剪贴板 ✓")), "剪贴板 ✓");
    }

    #[test]
    fn wide_units_drop_terminator() {
        assert_eq!(wide_units_bytes(&encode_wide("Hi")), vec![b'H', 0, b'i', 0]);
    }

    #[test]
    fn narrow_stops_at_nul() {
        assert_eq!(decode_narrow(b"abc\0def"), "abc");
        assert_eq!(narrow_bytes(b"no terminator"), b"no terminator");
    }

    #[test]
    fn file_drop_skips_blank_lines() {
        let paths = decode_file_drop(b"/tmp/a.txt\n\n/tmp/b.txt\n");
        assert_eq!(paths, vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
