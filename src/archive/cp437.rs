// src/archive/cp437.rs

//! Filename transcoding for archive members.
//!
//! The zip format nominally stores member names in IBM code page 437, but
//! most producers write UTF-8 bytes into the field without setting the
//! UTF-8 flag. Decoding the bytes as cp437 unconditionally corrupts those
//! names, so decoding tries UTF-8 first and only falls back to the
//! code-page table when the bytes are not valid UTF-8.

/// Decode raw member-name bytes into text.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(name) => name.to_string(),
        Err(_) => bytes.iter().copied().map(cp437_char).collect(),
    }
}

fn cp437_char(byte: u8) -> char {
    match byte {
        0x00..=0x7f => byte as char,
        _ => HIGH_TABLE[(byte - 0x80) as usize],
    }
}

/// Code page 437, positions 0x80-0xFF. The low half is ASCII.
#[rustfmt::skip]
const HIGH_TABLE: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode(b"src/main.m"), "src/main.m");
    }

    #[test]
    fn valid_utf8_is_kept_as_utf8() {
        let name = "docs/\u{8aad}\u{3081}.txt"; // 読め
        assert_eq!(decode(name.as_bytes()), name);
    }

    #[test]
    fn invalid_utf8_falls_back_to_cp437() {
        // 0x82 is a bare continuation byte in UTF-8, 'é' in cp437.
        assert_eq!(decode(b"caf\x82/menu.txt"), "café/menu.txt");
    }

    #[test]
    fn high_range_maps_through_the_table() {
        assert_eq!(decode(&[0xe1, 0xf8]), "ß°");
    }

    #[test]
    fn decoding_is_stable_for_already_decoded_names() {
        let decoded = decode(b"caf\x82");
        assert_eq!(decode(decoded.as_bytes()), decoded);
    }
}
