//! Utility module with palettize's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::palette::Variant;

/// An erroneous color format.
///
/// Since this crate only recognizes hashed hexadecimal colors, the enumeration
/// is short. Like most errors of this crate, it only has unit variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#123` is missing three hexadecimal digits,
    /// whereas `#💩00` has the correct length but contains an unsuitable
    /// character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#00g000` has a malformed second coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have 6 or 8 ASCII hex digits but does not")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while generating a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeErrorKind {
    /// The palette file could not be read.
    ReadPalette,
    /// The palette file is not valid palette JSON.
    MalformedPalette,
    /// The name does not denote a palette variant.
    UnknownVariant,
    /// The palette data has no colors for the variant.
    MissingVariant(Variant),
    /// The source document could not be read.
    ReadSource,
    /// The source document is not well-formed XML.
    MalformedDocument,
    /// A color, in the document or the palette, could not be parsed.
    MalformedColor,
    /// The output directory could not be created.
    CreateOutput,
    /// The generated document could not be written.
    WriteOutput,
}

impl ThemeErrorKind {
    /// Turn the error kind into an error message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadPalette => "could not read palette file",
            Self::MalformedPalette => "could not parse palette file",
            Self::UnknownVariant => "unknown palette variant",
            Self::MissingVariant(_) => "palette has no colors for variant",
            Self::ReadSource => "could not read source document",
            Self::MalformedDocument => "source document is not well-formed XML",
            Self::MalformedColor => "could not parse color",
            Self::CreateOutput => "could not create output directory",
            Self::WriteOutput => "could not write generated theme",
        }
    }
}

/// An error while generating a theme.
#[derive(Debug)]
pub struct ThemeError {
    kind: ThemeErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ThemeError {
    /// Create a new theme error.
    pub fn new(kind: ThemeErrorKind, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ThemeErrorKind {
        self.kind
    }
}

impl From<ThemeErrorKind> for ThemeError {
    fn from(kind: ThemeErrorKind) -> Self {
        Self { kind, source: None }
    }
}

impl From<ColorFormatError> for ThemeError {
    fn from(value: ColorFormatError) -> Self {
        Self::new(ThemeErrorKind::MalformedColor, Box::new(value))
    }
}

impl From<quick_xml::Error> for ThemeError {
    fn from(value: quick_xml::Error) -> Self {
        Self::new(ThemeErrorKind::MalformedDocument, Box::new(value))
    }
}

impl From<quick_xml::events::attributes::AttrError> for ThemeError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Self::new(ThemeErrorKind::MalformedDocument, Box::new(value))
    }
}

impl From<ThemeError> for std::io::Error {
    fn from(value: ThemeError) -> Self {
        std::io::Error::other(value)
    }
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let ThemeErrorKind::MissingVariant(variant) = self.kind {
            f.write_str(" ")?;
            f.write_str(variant.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

#[cfg(feature = "pyffi")]
impl From<ThemeError> for PyErr {
    fn from(value: ThemeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
