//! Text encoding helpers.

/// Hex-encodes the UTF-8 bytes of `text`: two lowercase digits per byte,
/// no separator.
pub fn string_to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii_bytes() {
        assert_eq!(string_to_hex("ab"), "6162");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(string_to_hex(""), "");
    }

    #[test]
    fn encodes_multibyte_utf8() {
        // "é" is 0xc3 0xa9 in UTF-8.
        assert_eq!(string_to_hex("é"), "c3a9");
    }

    #[test]
    fn output_is_lowercase_without_separators() {
        let encoded = string_to_hex("\u{7f}\u{0}");
        assert_eq!(encoded, "7f00");
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
