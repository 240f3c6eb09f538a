//! Utility module implementing palettes and their Catppuccin data.
//!
//! [`PaletteData`] is the raw data, an ordered list of color roles and
//! hexadecimal colors per [`Variant`]. It is either built into this crate or
//! read from a JSON file. [`PaletteData::palette`] turns the data for one
//! variant into a [`Palette`], which precomputes each entry's CIE Lab
//! coordinates and finds the entry nearest to some color.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::color::{Lab, Rgb};
use crate::core::{delta_e_2000, find_closest};
use crate::error::{ThemeError, ThemeErrorKind};

/// A palette variant, i.e., one of the Catppuccin flavors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "palettize")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Mocha,
    Macchiato,
    Frappe,
    Latte,
}

impl Variant {
    /// The total number of variants.
    pub const COUNT: usize = 4;

    /// All variants in canonical order, from darkest to lightest.
    pub const ALL: [Variant; Variant::COUNT] = [
        Variant::Mocha,
        Variant::Macchiato,
        Variant::Frappe,
        Variant::Latte,
    ];

    /// Get this variant's name, which is all lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mocha => "mocha",
            Self::Macchiato => "macchiato",
            Self::Frappe => "frappe",
            Self::Latte => "latte",
        }
    }

    /// Determine whether this variant is a dark one.
    pub fn is_dark(&self) -> bool {
        !matches!(self, Self::Latte)
    }
}

impl std::str::FromStr for Variant {
    type Err = ThemeError;

    /// Parse the variant name. This method also accepts the accented `frappé`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mocha" => Ok(Self::Mocha),
            "macchiato" => Ok(Self::Macchiato),
            "frappe" | "frappé" => Ok(Self::Frappe),
            "latte" => Ok(Self::Latte),
            _ => Err(ThemeErrorKind::UnknownVariant.into()),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A palette entry, i.e., a named color with its CIE Lab coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    name: String,
    rgb: Rgb,
    lab: Lab,
}

impl PaletteEntry {
    /// Create a new palette entry.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
            lab: rgb.to_lab(),
        }
    }

    /// Get the entry's color role, e.g., `red` or `base`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entry's color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the entry's color in CIE Lab.
    pub fn lab(&self) -> &Lab {
        &self.lab
    }
}

/// A palette.
///
/// A palette is a non-empty, ordered sequence of [`PaletteEntry`]s. The order
/// matters: When two entries are equally close to a color,
/// [`Palette::nearest`] picks the one that comes first.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a new palette with the given entries.
    ///
    /// The entries must not be empty. Otherwise, this method returns `None`.
    pub fn new(entries: Vec<PaletteEntry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Create a new palette with the given named colors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use palettize::color::Rgb;
    /// # use palettize::palette::Palette;
    /// let palette = Palette::with_colors([
    ///     ("red", Rgb::new(255, 0, 0)),
    ///     ("blue", Rgb::new(0, 0, 255)),
    /// ]).unwrap();
    ///
    /// let near_red = Rgb::new(254, 1, 1).to_lab();
    /// assert_eq!(palette.nearest(&near_red), Rgb::new(255, 0, 0));
    /// ```
    pub fn with_colors<N, I>(colors: I) -> Option<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Rgb)>,
    {
        Self::new(
            colors
                .into_iter()
                .map(|(name, rgb)| PaletteEntry::new(name, rgb))
                .collect(),
        )
    }

    /// Get the number of entries.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the entry with the given name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Find the entry perceptually closest to the given color.
    ///
    /// This method computes the CIEDE2000 difference between the color and
    /// every entry and returns the first entry with the smallest difference.
    pub fn nearest_entry(&self, lab: &Lab) -> &PaletteEntry {
        let index = find_closest(
            lab.as_ref(),
            self.entries.iter().map(|entry| entry.lab.as_ref()),
            delta_e_2000,
        )
        // Only not-a-number differences leave no closest entry.
        .unwrap_or(0);

        &self.entries[index]
    }

    /// Find the color of the entry perceptually closest to the given color.
    pub fn nearest(&self, lab: &Lab) -> Rgb {
        self.nearest_entry(lab).rgb
    }
}

impl AsRef<[PaletteEntry]> for Palette {
    fn as_ref(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ====================================================================================================================

/// A color in palette JSON, either the hexadecimal string itself or an object
/// with a `hex` field and possibly others.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorData {
    Hex(String),
    Object { hex: String },
}

impl ColorData {
    fn hex(&self) -> &str {
        match self {
            Self::Hex(hex) => hex,
            Self::Object { hex } => hex,
        }
    }
}

fn malformed(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ThemeError {
    ThemeError::new(ThemeErrorKind::MalformedPalette, source.into())
}

/// Raw palette data.
///
/// For each variant, palette data comprises color roles and hexadecimal colors
/// in a fixed order. The data has not been checked for well-formed colors; that
/// happens when creating a [`Palette`] with [`PaletteData::palette`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteData {
    variants: Vec<(Variant, Vec<(String, String)>)>,
}

impl PaletteData {
    /// Get the built-in Catppuccin palette data.
    pub fn builtin() -> Self {
        let variants = Variant::ALL
            .iter()
            .map(|variant| {
                let colors = catppuccin(*variant)
                    .iter()
                    .map(|(name, hex)| ((*name).to_owned(), (*hex).to_owned()))
                    .collect();
                (*variant, colors)
            })
            .collect();

        Self { variants }
    }

    /// Parse palette data from JSON.
    ///
    /// The JSON text must be an object mapping variant names to objects that
    /// map color roles to colors. A color is either a hexadecimal string or an
    /// object with a `hex` field holding such a string. If a variant's object
    /// has a `colors` field, that field's object holds the colors instead. The
    /// order of variants and colors is preserved. Fields with names other than
    /// variants, such as `version`, are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use palettize::palette::{PaletteData, Variant};
    /// let data = PaletteData::from_json(r##"{
    ///     "version": "1.0.0",
    ///     "latte": { "colors": { "red": { "hex": "#d20f39" }, "base": "#eff1f5" } }
    /// }"##)?;
    ///
    /// let palette = data.palette(Variant::Latte)?;
    /// assert_eq!(palette.len(), 2);
    /// # Ok::<(), palettize::error::ThemeError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let root: Map<String, Value> = serde_json::from_str(text).map_err(malformed)?;
        let mut variants = Vec::new();

        for (key, value) in root {
            let Ok(variant) = key.parse::<Variant>() else {
                debug!(key = %key, "ignoring palette field that is not a variant");
                continue;
            };

            let Value::Object(mut object) = value else {
                return Err(malformed(format!("variant {} is not an object", variant)));
            };
            if let Some(Value::Object(colors)) = object.remove("colors") {
                object = colors;
            }

            let mut colors = Vec::with_capacity(object.len());
            for (name, color) in object {
                let color: ColorData = serde_json::from_value(color).map_err(malformed)?;
                colors.push((name, color.hex().to_owned()));
            }
            variants.push((variant, colors));
        }

        Ok(Self { variants })
    }

    /// Read palette data from the JSON file with the given path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading palette file");

        let text = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::new(ThemeErrorKind::ReadPalette, Box::new(e)))?;
        Self::from_json(&text)
    }

    /// Get the variants with colors in this palette data.
    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        self.variants.iter().map(|(variant, _)| *variant)
    }

    /// Create the palette for the given variant.
    ///
    /// This method parses each color and computes its CIE Lab coordinates. It
    /// fails if there are no colors for the variant or a color is malformed.
    pub fn palette(&self, variant: Variant) -> Result<Palette, ThemeError> {
        let colors = self
            .variants
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, colors)| colors)
            .ok_or(ThemeErrorKind::MissingVariant(variant))?;

        let mut entries = Vec::with_capacity(colors.len());
        for (name, hex) in colors {
            let rgb = hex.parse::<Rgb>()?;
            entries.push(PaletteEntry::new(name.as_str(), rgb));
        }

        let palette =
            Palette::new(entries).ok_or(ThemeErrorKind::MissingVariant(variant))?;
        debug!(%variant, colors = palette.len(), "built palette");
        Ok(palette)
    }
}

// ====================================================================================================================

/// Get the built-in colors for the given Catppuccin variant.
pub fn catppuccin(variant: Variant) -> &'static [(&'static str, &'static str); 26] {
    match variant {
        Variant::Mocha => &CATPPUCCIN_MOCHA,
        Variant::Macchiato => &CATPPUCCIN_MACCHIATO,
        Variant::Frappe => &CATPPUCCIN_FRAPPE,
        Variant::Latte => &CATPPUCCIN_LATTE,
    }
}

/// The Catppuccin Mocha colors.
pub const CATPPUCCIN_MOCHA: [(&str, &str); 26] = [
    ("rosewater", "#f5e0dc"),
    ("flamingo", "#f2cdcd"),
    ("pink", "#f5c2e7"),
    ("mauve", "#cba6f7"),
    ("red", "#f38ba8"),
    ("maroon", "#eba0ac"),
    ("peach", "#fab387"),
    ("yellow", "#f9e2af"),
    ("green", "#a6e3a1"),
    ("teal", "#94e2d5"),
    ("sky", "#89dceb"),
    ("sapphire", "#74c7ec"),
    ("blue", "#89b4fa"),
    ("lavender", "#b4befe"),
    ("text", "#cdd6f4"),
    ("subtext1", "#bac2de"),
    ("subtext0", "#a6adc8"),
    ("overlay2", "#9399b2"),
    ("overlay1", "#7f849c"),
    ("overlay0", "#6c7086"),
    ("surface2", "#585b70"),
    ("surface1", "#45475a"),
    ("surface0", "#313244"),
    ("base", "#1e1e2e"),
    ("mantle", "#181825"),
    ("crust", "#11111b"),
];

/// The Catppuccin Macchiato colors.
pub const CATPPUCCIN_MACCHIATO: [(&str, &str); 26] = [
    ("rosewater", "#f4dbd6"),
    ("flamingo", "#f0c6c6"),
    ("pink", "#f5bde6"),
    ("mauve", "#c6a0f6"),
    ("red", "#ed8796"),
    ("maroon", "#ee99a0"),
    ("peach", "#f5a97f"),
    ("yellow", "#eed49f"),
    ("green", "#a6da95"),
    ("teal", "#8bd5ca"),
    ("sky", "#91d7e3"),
    ("sapphire", "#7dc4e4"),
    ("blue", "#8aadf4"),
    ("lavender", "#b7bdf8"),
    ("text", "#cad3f5"),
    ("subtext1", "#b8c0e0"),
    ("subtext0", "#a5adcb"),
    ("overlay2", "#939ab7"),
    ("overlay1", "#8087a2"),
    ("overlay0", "#6e738d"),
    ("surface2", "#5b6078"),
    ("surface1", "#494d64"),
    ("surface0", "#363a4f"),
    ("base", "#24273a"),
    ("mantle", "#1e2030"),
    ("crust", "#181926"),
];

/// The Catppuccin Frappé colors.
pub const CATPPUCCIN_FRAPPE: [(&str, &str); 26] = [
    ("rosewater", "#f2d5cf"),
    ("flamingo", "#eebebe"),
    ("pink", "#f4b8e4"),
    ("mauve", "#ca9ee6"),
    ("red", "#e78284"),
    ("maroon", "#ea999c"),
    ("peach", "#ef9f76"),
    ("yellow", "#e5c890"),
    ("green", "#a6d189"),
    ("teal", "#81c8be"),
    ("sky", "#99d1db"),
    ("sapphire", "#85c1dc"),
    ("blue", "#8caaee"),
    ("lavender", "#babbf1"),
    ("text", "#c6d0f5"),
    ("subtext1", "#b5bfe2"),
    ("subtext0", "#a5adce"),
    ("overlay2", "#949cbb"),
    ("overlay1", "#838ba7"),
    ("overlay0", "#737994"),
    ("surface2", "#626880"),
    ("surface1", "#51576d"),
    ("surface0", "#414559"),
    ("base", "#303446"),
    ("mantle", "#292c3c"),
    ("crust", "#232634"),
];

/// The Catppuccin Latte colors.
pub const CATPPUCCIN_LATTE: [(&str, &str); 26] = [
    ("rosewater", "#dc8a78"),
    ("flamingo", "#dd7878"),
    ("pink", "#ea76cb"),
    ("mauve", "#8839ef"),
    ("red", "#d20f39"),
    ("maroon", "#e64553"),
    ("peach", "#fe640b"),
    ("yellow", "#df8e1d"),
    ("green", "#40a02b"),
    ("teal", "#179299"),
    ("sky", "#04a5e5"),
    ("sapphire", "#209fb5"),
    ("blue", "#1e66f5"),
    ("lavender", "#7287fd"),
    ("text", "#4c4f69"),
    ("subtext1", "#5c5f77"),
    ("subtext0", "#6c6f85"),
    ("overlay2", "#7c7f93"),
    ("overlay1", "#8c8fa1"),
    ("overlay0", "#9ca0b0"),
    ("surface2", "#acb0be"),
    ("surface1", "#bcc0cc"),
    ("surface0", "#ccd0da"),
    ("base", "#eff1f5"),
    ("mantle", "#e6e9ef"),
    ("crust", "#dce0e8"),
];

#[cfg(test)]
mod test {
    use super::{Palette, PaletteData, Variant};
    use crate::color::Rgb;
    use crate::error::{ThemeError, ThemeErrorKind};

    #[test]
    fn test_variant() -> Result<(), ThemeError> {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>()?, variant);
        }
        assert_eq!("Frappé".parse::<Variant>()?, Variant::Frappe);
        assert_eq!(
            "espresso".parse::<Variant>().map_err(|e| e.kind()),
            Err(ThemeErrorKind::UnknownVariant)
        );
        assert!(!Variant::Latte.is_dark());
        assert!(Variant::Mocha.is_dark());
        Ok(())
    }

    #[test]
    fn test_palette_coverage() -> Result<(), ThemeError> {
        let data = PaletteData::builtin();
        assert_eq!(data.variants().collect::<Vec<_>>(), Variant::ALL.to_vec());

        for variant in Variant::ALL {
            let palette = data.palette(variant)?;
            assert_eq!(palette.len(), 26);
            for entry in &palette {
                let [l, _, _] = *entry.lab().as_ref();
                assert!(
                    (0.0..=100.0).contains(&l),
                    "{} {} has lightness {}",
                    variant,
                    entry.name(),
                    l
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_self_match() -> Result<(), ThemeError> {
        let data = PaletteData::builtin();
        for variant in Variant::ALL {
            let palette = data.palette(variant)?;
            for entry in &palette {
                assert_eq!(
                    palette.nearest_entry(entry.lab()).name(),
                    entry.name(),
                    "{} should match itself",
                    entry.name()
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_nearest() {
        let palette = Palette::with_colors([
            ("red", Rgb::new(255, 0, 0)),
            ("blue", Rgb::new(0, 0, 255)),
        ]);
        let Some(palette) = palette else {
            panic!("palette with two colors should not be empty");
        };

        assert_eq!(palette.nearest(&Rgb::new(0xfe, 1, 1).to_lab()), Rgb::new(255, 0, 0));
        assert_eq!(palette.nearest(&Rgb::new(10, 10, 200).to_lab()), Rgb::new(0, 0, 255));
        assert_eq!(palette.get("blue").map(|e| e.rgb()), Some(Rgb::new(0, 0, 255)));
        assert!(palette.get("green").is_none());
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let gray = Rgb::new(128, 128, 128);
        let palette = Palette::with_colors([("first", gray), ("second", gray)]);
        let Some(palette) = palette else {
            panic!("palette with two colors should not be empty");
        };

        assert_eq!(palette.nearest_entry(&gray.to_lab()).name(), "first");
        assert_eq!(palette.nearest_entry(&Rgb::new(0, 0, 0).to_lab()).name(), "first");
    }

    #[test]
    fn test_empty_palette() {
        assert!(Palette::new(Vec::new()).is_none());
        let empty: [(&str, Rgb); 0] = [];
        assert!(Palette::with_colors(empty).is_none());
    }

    #[test]
    fn test_from_json() -> Result<(), ThemeError> {
        // The shape of the old ctp-palette package.
        let data = PaletteData::from_json(
            r##"{
                "mocha": {
                    "rosewater": { "hex": "#f5e0dc", "rgb": "rgb(245, 224, 220)" },
                    "base": { "hex": "#1e1e2e" }
                },
                "latte": { "base": "#eff1f5" }
            }"##,
        )?;

        assert_eq!(
            data.variants().collect::<Vec<_>>(),
            vec![Variant::Mocha, Variant::Latte]
        );

        let mocha = data.palette(Variant::Mocha)?;
        let names: Vec<_> = mocha.as_ref().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["rosewater", "base"]);
        assert_eq!(mocha.as_ref()[1].rgb(), Rgb::new(0x1e, 0x1e, 0x2e));

        let result = data.palette(Variant::Frappe);
        assert!(matches!(
            result.map_err(|e| e.kind()),
            Err(ThemeErrorKind::MissingVariant(Variant::Frappe))
        ));

        Ok(())
    }

    #[test]
    fn test_from_malformed_json() {
        let result = PaletteData::from_json("[1, 2, 3]");
        assert_eq!(result.map_err(|e| e.kind()), Err(ThemeErrorKind::MalformedPalette));

        let result = PaletteData::from_json(r#"{ "mocha": 42 }"#);
        assert_eq!(result.map_err(|e| e.kind()), Err(ThemeErrorKind::MalformedPalette));

        let result = PaletteData::from_json(r#"{ "mocha": { "red": 42 } }"#);
        assert_eq!(result.map_err(|e| e.kind()), Err(ThemeErrorKind::MalformedPalette));

        let data = PaletteData::from_json(r##"{ "mocha": { "red": "#ff00zz" } }"##);
        let result = data.and_then(|d| d.palette(Variant::Mocha));
        assert_eq!(result.map_err(|e| e.kind()), Err(ThemeErrorKind::MalformedColor));

        let data = PaletteData::from_json(r#"{ "mocha": {} }"#);
        let result = data.and_then(|d| d.palette(Variant::Mocha));
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(ThemeErrorKind::MissingVariant(Variant::Mocha))
        );
    }
}
