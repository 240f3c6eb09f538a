//! Utility module rewriting the colors of XML theme documents.
//!
//! [`remap_value`] replaces a single attribute value with the nearest palette
//! color, and [`transform`] does so for every attribute value of a document.
//! The document is streamed event by event. Only the color values themselves
//! change; all other markup, including quotes, declarations, text, comments,
//! and CDATA sections, is copied byte for byte.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, trace};

use crate::color::{ColorFormat, HexColor};
use crate::core::is_hex_color;
use crate::error::{ColorFormatError, ThemeError, ThemeErrorKind};
use crate::palette::Palette;

/// Remap a single attribute value.
///
/// If the value is a hashed hexadecimal color with six or eight digits, this
/// function returns the nearest palette color in the given format, followed by
/// the original alpha digits if present. Otherwise, it returns the value
/// unchanged.
///
/// # Examples
///
/// ```
/// # use palettize::color::{ColorFormat, Rgb};
/// # use palettize::palette::Palette;
/// # use palettize::transform::remap_value;
/// let palette = Palette::with_colors([
///     ("red", Rgb::new(255, 0, 0)),
///     ("blue", Rgb::new(0, 0, 255)),
/// ]).unwrap();
///
/// assert_eq!(remap_value("#fe0101", &palette, ColorFormat::Bracketed)?, "[255,0,0]");
/// assert_eq!(remap_value("#ff000080", &palette, ColorFormat::Bracketed)?, "[255,0,0]80");
/// assert_eq!(remap_value("#0101fe", &palette, ColorFormat::Hex)?, "#0000ff");
/// assert_eq!(remap_value("none", &palette, ColorFormat::Bracketed)?, "none");
/// # Ok::<(), palettize::error::ColorFormatError>(())
/// ```
pub fn remap_value<'v>(
    value: &'v str,
    palette: &Palette,
    format: ColorFormat,
) -> Result<Cow<'v, str>, ColorFormatError> {
    if !is_hex_color(value) {
        return Ok(Cow::Borrowed(value));
    }

    let color = HexColor::parse(value)?;
    let entry = palette.nearest_entry(&color.rgb().to_lab());

    let mut result = entry.rgb().display(format).to_string();
    if let Some(alpha) = color.alpha() {
        result.push_str(alpha);
    }

    trace!(from = value, to = %result, role = entry.name(), "remapped color");
    Ok(Cow::Owned(result))
}

/// Remap the attributes of the element. This function returns `None` if no
/// attribute value changes.
///
/// Replacement values are spliced into the element's raw text. Names, quotes,
/// whitespace, and all other values are copied byte for byte.
fn remap_element<'e>(
    element: &BytesStart<'e>,
    palette: &Palette,
    format: ColorFormat,
) -> Result<Option<BytesStart<'e>>, ThemeError> {
    // Reader::from_str only yields UTF-8 markup.
    let raw = std::str::from_utf8(element)
        .map_err(|e| ThemeError::new(ThemeErrorKind::MalformedDocument, Box::new(e)))?;
    let base = raw.as_ptr() as usize;

    let mut spliced = String::new();
    let mut copied = 0;

    for attribute in element.attributes() {
        let attribute = attribute?;

        // Attribute values borrow from the element's buffer.
        let Cow::Borrowed(bytes) = attribute.value else {
            continue;
        };
        let Some(start) = (bytes.as_ptr() as usize).checked_sub(base) else {
            continue;
        };
        let end = start + bytes.len();
        let Some(value) = raw.get(start..end) else {
            continue;
        };

        if let Cow::Owned(remapped) = remap_value(value, palette, format)? {
            spliced.push_str(&raw[copied..start]);
            spliced.push_str(&remapped);
            copied = end;
        }
    }

    if copied == 0 {
        return Ok(None);
    }

    spliced.push_str(&raw[copied..]);
    let name_len = element.name().as_ref().len();
    Ok(Some(BytesStart::from_content(spliced, name_len)))
}

fn malformed(message: &'static str) -> ThemeError {
    ThemeError::new(ThemeErrorKind::MalformedDocument, message.into())
}

/// Remap all color-valued attributes of the XML document.
///
/// This function fails if the document is not well-formed or a color is
/// malformed. A well-formed document has exactly one root element and no text
/// outside of it other than whitespace. This function never returns a
/// partially transformed document.
pub fn transform(document: &str, palette: &Palette, format: ColorFormat) -> Result<String, ThemeError> {
    let mut reader = Reader::from_str(document);
    let mut writer = Writer::new(Vec::with_capacity(document.len()));
    let mut elements = 0_usize;
    let mut depth = 0_usize;
    let mut roots = 0_usize;

    loop {
        let event = match reader.read_event()? {
            Event::Eof => break,
            Event::Start(element) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;

                match remap_element(&element, palette, format)? {
                    Some(remapped) => {
                        elements += 1;
                        Event::Start(remapped)
                    }
                    None => Event::Start(element),
                }
            }
            Event::Empty(element) => {
                if depth == 0 {
                    roots += 1;
                }

                match remap_element(&element, palette, format)? {
                    Some(remapped) => {
                        elements += 1;
                        Event::Empty(remapped)
                    }
                    None => Event::Empty(element),
                }
            }
            Event::End(element) => {
                depth = depth.saturating_sub(1);
                Event::End(element)
            }
            Event::Text(text) if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(malformed("text outside of root element"));
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed("CDATA section outside of root element"));
            }
            event => event,
        };

        if roots > 1 {
            return Err(malformed("more than one root element"));
        }

        writer
            .write_event(event)
            .map_err(|e| ThemeError::new(ThemeErrorKind::WriteOutput, Box::new(e)))?;
    }

    if depth > 0 {
        return Err(malformed("document ends inside an element"));
    } else if roots == 0 {
        return Err(malformed("document has no root element"));
    }

    debug!(elements, "remapped colors of elements");
    String::from_utf8(writer.into_inner())
        .map_err(|e| ThemeError::new(ThemeErrorKind::MalformedDocument, Box::new(e)))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{remap_value, transform};
    use crate::color::{ColorFormat, Rgb};
    use crate::error::{ColorFormatError, ThemeError, ThemeErrorKind};
    use crate::palette::{Palette, PaletteData, Variant};

    fn red_and_blue() -> Palette {
        let palette = Palette::with_colors([
            ("red", Rgb::new(255, 0, 0)),
            ("blue", Rgb::new(0, 0, 255)),
        ]);
        let Some(palette) = palette else {
            panic!("palette with two colors should not be empty");
        };
        palette
    }

    #[test]
    fn test_remap_value() -> Result<(), ColorFormatError> {
        let palette = red_and_blue();
        let format = ColorFormat::Bracketed;

        assert_eq!(remap_value("#fe0101", &palette, format)?, "[255,0,0]");
        assert_eq!(remap_value("#ff000080", &palette, format)?, "[255,0,0]80");
        assert_eq!(remap_value("#0000FFcC", &palette, format)?, "[0,0,255]cC");
        assert_eq!(remap_value("#fe0101", &palette, ColorFormat::Hex)?, "#ff0000");

        for value in ["none", "", "#fe010", "#fe01010", "fe0101", "#operator", "12"] {
            assert_eq!(remap_value(value, &palette, format)?, value);
        }

        Ok(())
    }

    #[test]
    fn test_self_match_through_value() -> Result<(), ThemeError> {
        let palette = PaletteData::builtin().palette(Variant::Mocha)?;
        for entry in &palette {
            let hex = entry.rgb().to_string();
            assert_eq!(remap_value(&hex, &palette, ColorFormat::Hex)?, hex);
        }
        Ok(())
    }

    #[test]
    fn test_transform() -> Result<(), ThemeError> {
        let palette = red_and_blue();
        let document = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- A theme -->
<theme name="Test">
  <color name="error" value="#fe0101"/>
  <color name="selection" value="#0000fe40"></color>
  <option name="FONT" value="none" />
  <text><![CDATA[#fe0101]]> #fe0101 &amp; more</text>
</theme>
"##;

        let expected = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- A theme -->
<theme name="Test">
  <color name="error" value="[255,0,0]"/>
  <color name="selection" value="[0,0,255]40"></color>
  <option name="FONT" value="none" />
  <text><![CDATA[#fe0101]]> #fe0101 &amp; more</text>
</theme>
"##;

        assert_eq!(transform(document, &palette, ColorFormat::Bracketed)?, expected);
        Ok(())
    }

    #[test]
    fn test_transform_without_colors() -> Result<(), ThemeError> {
        let palette = red_and_blue();
        let document = "<scheme name='Plain' version=\"142\">\n  <option name='X' value='1'/>\n</scheme>";
        assert_eq!(transform(document, &palette, ColorFormat::Hex)?, document);
        Ok(())
    }

    #[test]
    fn test_transform_keeps_quotes() -> Result<(), ThemeError> {
        let palette = red_and_blue();
        let document = r##"<option title='say "hi"' value='#fe0101'/>"##;
        let expected = r##"<option title='say "hi"' value='[255,0,0]'/>"##;

        let once = transform(document, &palette, ColorFormat::Bracketed)?;
        assert_eq!(once, expected);
        assert_eq!(transform(&once, &palette, ColorFormat::Bracketed)?, expected);

        let document = "<scheme>\n  <color  a = \"#0000fe\"\tb='x' c=\"#fe0101\" />\n</scheme>";
        let expected = "<scheme>\n  <color  a = \"#0000ff\"\tb='x' c=\"#ff0000\" />\n</scheme>";
        assert_eq!(transform(document, &palette, ColorFormat::Hex)?, expected);
        Ok(())
    }

    #[test]
    fn test_transform_malformed() {
        let palette = red_and_blue();

        for document in [
            "<theme><color value=\"#ff0000\"></theme>",
            "<theme><color value=\"#ff0000/></theme>",
            "<theme a=\"1\" a=\"2\"/>",
            "<scheme name=\"Dark\"><option name=\"X\" value=\"#fe0101\"/>",
            "<a/><b value=\"#fe0101\"/>",
            "hello",
            "<a/>hello",
            "",
        ] {
            let result = transform(document, &palette, ColorFormat::Bracketed);
            assert_eq!(
                result.map_err(|e| e.kind()),
                Err(ThemeErrorKind::MalformedDocument),
                "{} should be rejected",
                document
            );
        }
    }
}
