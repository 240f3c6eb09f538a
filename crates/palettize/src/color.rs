//! Utility module with the color representations used for palette matching.
//!
//! [`Rgb`] is a 24-bit sRGB color, [`Lab`] its CIE Lab equivalent, and
//! [`HexColor`] an [`Rgb`] together with the alpha digits it was written with.
//! [`ColorFormat`] picks the notation for replacement colors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    delta_e_2000, format_bracketed, format_hex, parse_hex, parse_hex_with_alpha, rgb_to_lab,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// # Examples
///
/// ```
/// # use palettize::color::Rgb;
/// # use std::str::FromStr;
/// let mauve = Rgb::from_str("#cba6f7")?;
/// assert_eq!(mauve, Rgb::new(203, 166, 247));
/// assert_eq!(mauve.to_string(), "#cba6f7");
/// # Ok::<(), palettize::error::ColorFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new 24-bit color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Convert this color to CIE Lab.
    pub fn to_lab(&self) -> Lab {
        Lab(rgb_to_lab(&self.0))
    }

    /// Display this color in the given format.
    pub fn display(&self, format: ColorFormat) -> impl std::fmt::Display + '_ {
        RgbDisplay { rgb: self, format }
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse six hexadecimal digits with an optional leading `#`. Two more
    /// digits for alpha are tolerated but ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&self.0, f)
    }
}

struct RgbDisplay<'a> {
    rgb: &'a Rgb,
    format: ColorFormat,
}

impl std::fmt::Display for RgbDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.format {
            ColorFormat::Bracketed => format_bracketed(&self.rgb.0, f),
            ColorFormat::Hex => format_hex(&self.rgb.0, f),
        }
    }
}

// ====================================================================================================================

/// A color in CIE Lab.
///
/// Lightness nominally ranges `0..=100`, whereas a and b are unbounded but
/// fall into `-128..=127` for sRGB colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab([Float; 3]);

impl Lab {
    /// Create a new Lab color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self([l, a, b])
    }

    /// Compute the CIEDE2000 perceptual difference between this and the other
    /// color. The smaller the difference, the more similar the two colors.
    pub fn delta_e(&self, other: &Self) -> Float {
        delta_e_2000(&self.0, &other.0)
    }
}

impl AsRef<[Float; 3]> for Lab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        value.to_lab()
    }
}

// ====================================================================================================================

/// A hashed hexadecimal color as written in a theme file.
///
/// The optional alpha digits are kept verbatim, including their case, and
/// never participate in color math.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexColor<'a> {
    rgb: Rgb,
    alpha: Option<&'a str>,
}

impl<'a> HexColor<'a> {
    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn parse(s: &'a str) -> Result<Self, ColorFormatError> {
        let (rgb, alpha) = parse_hex_with_alpha(s)?;
        Ok(Self {
            rgb: Rgb(rgb),
            alpha,
        })
    }

    /// Get the color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the alpha digits.
    pub fn alpha(&self) -> Option<&'a str> {
        self.alpha
    }
}

// ====================================================================================================================

/// The notation for replacement colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "palettize")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// A bracketed list of decimal coordinates, e.g., `[255,0,0]`.
    #[default]
    Bracketed,
    /// Hashed hexadecimal notation, e.g., `#ff0000`.
    Hex,
}

impl ColorFormat {
    /// Get this format's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bracketed => "bracketed",
            Self::Hex => "hex",
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bracketed" => Ok(Self::Bracketed),
            "hex" => Ok(Self::Hex),
            _ => Err(ColorFormatError::UnknownFormat),
        }
    }
}
