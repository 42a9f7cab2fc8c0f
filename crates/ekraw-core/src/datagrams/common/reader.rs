/// Decode a fixed-width Latin-1 field, stripping only trailing NUL padding.
/// Interior NULs are preserved as-is.
pub(crate) fn trim_trailing_nuls(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    bytes[..end].iter().map(|&b| b as char).collect()
}

/// Decode a fixed-width Latin-1 field, removing every NUL byte.
///
/// Quirk preserved from the reference decoder: the spare/version field of
/// the configuration datagram drops interior NULs as well, unlike every
/// other fixed string. Do not unify the two rules without checking real
/// capture files.
pub(crate) fn strip_all_nuls(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{strip_all_nuls, trim_trailing_nuls};

    #[test]
    fn trailing_nuls_are_stripped() {
        let mut field = [0u8; 128];
        field[..3].copy_from_slice(b"ABC");
        assert_eq!(trim_trailing_nuls(&field), "ABC");
    }

    #[test]
    fn all_nul_field_is_empty() {
        assert_eq!(trim_trailing_nuls(&[0u8; 128]), "");
        assert_eq!(strip_all_nuls(&[0u8; 128]), "");
    }

    #[test]
    fn interior_nuls_are_preserved() {
        let mut field = [0u8; 128];
        field[..4].copy_from_slice(b"AB\x00C");
        assert_eq!(trim_trailing_nuls(&field), "AB\u{0}C");
    }

    #[test]
    fn strip_all_removes_interior_nuls() {
        let mut field = [0u8; 128];
        field[..6].copy_from_slice(b"2\x00.2.0");
        assert_eq!(strip_all_nuls(&field), "2.2.0");
    }

    #[test]
    fn latin1_bytes_decode_one_to_one() {
        let field = [0xC5, 0x64, 0x00];
        assert_eq!(trim_trailing_nuls(&field), "\u{c5}d");
    }
}
