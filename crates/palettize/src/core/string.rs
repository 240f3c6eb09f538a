use crate::error::ColorFormatError;

/// Determine whether the string is a hashed hexadecimal color, i.e., a `#`
/// followed by exactly six or eight hexadecimal digits and nothing else.
pub(crate) fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };

    (digits.len() == 6 || digits.len() == 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 24-bit color in hexadecimal format. The leading `#` is optional.
/// This function only consumes the first six digits; it tolerates but ignores
/// two trailing alpha digits.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            // from_str_radix also accepts a leading plus sign.
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Parse a hashed hexadecimal color with optional alpha. If successful, this
/// function returns the color's three coordinates and, if present, the alpha
/// digits exactly as written.
pub(crate) fn parse_hex_with_alpha(s: &str) -> Result<([u8; 3], Option<&str>), ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    }

    let rgb = parse_hex(s)?;
    let alpha = match s.get(7..) {
        Some("") | None => None,
        Some(alpha) => {
            if !alpha.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorFormatError::MalformedHex);
            }
            Some(alpha)
        }
    };

    Ok((rgb, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color in hashed hexadecimal notation with lowercase digits.
pub(crate) fn format_hex(rgb: &[u8; 3], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let [r, g, b] = *rgb;
    f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Format the color as a bracketed, comma-separated list of decimal
/// coordinates, e.g., `[255,0,0]`.
pub(crate) fn format_bracketed(
    rgb: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *rgb;
    f.write_fmt(format_args!("[{},{},{}]", r, g, b))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{is_hex_color, parse_hex, parse_hex_with_alpha, ColorFormatError};

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#1e1e2e"));
        assert!(is_hex_color("#1E1E2E"));
        assert!(is_hex_color("#1e1e2eff"));

        assert!(!is_hex_color("1e1e2e"));
        assert!(!is_hex_color("#1e1e2"));
        assert!(!is_hex_color("#1e1e2e0"));
        assert!(!is_hex_color("#1e1e2e000"));
        assert!(!is_hex_color("#1e1g2e"));
        assert!(!is_hex_color(" #1e1e2e"));
        assert!(!is_hex_color("#operator"));
        assert!(!is_hex_color("none"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#AbCdEf")?, [0xab_u8, 0xcd, 0xef]);
        assert_eq!(parse_hex("#11223380")?, [0x11_u8, 0x22, 0x33]);

        assert_eq!(parse_hex("#123"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#1122334"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#0g0000"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+10000"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::UnexpectedCharacters));

        Ok(())
    }

    #[test]
    fn test_parse_hex_with_alpha() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex_with_alpha("#ff0000")?, ([0xff_u8, 0, 0], None));
        assert_eq!(
            parse_hex_with_alpha("#ff000080")?,
            ([0xff_u8, 0, 0], Some("80"))
        );
        assert_eq!(
            parse_hex_with_alpha("#ff0000Cc")?,
            ([0xff_u8, 0, 0], Some("Cc"))
        );

        assert_eq!(
            parse_hex_with_alpha("ff000080"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_hex_with_alpha("#ff0000zz"),
            Err(ColorFormatError::MalformedHex)
        );

        Ok(())
    }
}
