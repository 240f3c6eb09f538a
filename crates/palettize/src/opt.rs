//! Helper module with the options for generating themes.
//!
//! This module provides the options for a batch of theme generation tasks and
//! the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use palettize::color::ColorFormat;
//! # use palettize::opt::Options;
//! let options = Options::builder()
//!     .output_dir("build/themes")
//!     .format(ColorFormat::Hex)
//!     .build();
//!
//! assert_eq!(options.output_dir().to_str(), Some("build/themes"));
//! assert_eq!(options.input_dir().to_str(), Some("defaults"));
//! assert_eq!(options.format(), ColorFormat::Hex);
//! ```

use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::color::ColorFormat;
use crate::palette::Variant;

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    Silent,
    #[default]
    Regular,
    Detailed,
}

impl Volume {
    /// Get the most verbose level of tracing events at this volume.
    ///
    /// Warnings about failed tasks are shown even when silent.
    pub fn level(&self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::WARN,
            Self::Regular => LevelFilter::INFO,
            Self::Detailed => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    input_dir: PathBuf,
    output_dir: PathBuf,
    format: ColorFormat,
    palette_file: Option<PathBuf>,
    variants: Option<Vec<Variant>>,
    parallel: bool,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            volume: Volume::Regular,
            input_dir: PathBuf::from("defaults"),
            output_dir: PathBuf::from("dist"),
            format: ColorFormat::Bracketed,
            palette_file: None,
            variants: None,
            parallel: false,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the directory with the source documents.
    pub fn input_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.0.input_dir = path.into();
        self
    }

    /// Set the directory for the generated themes.
    pub fn output_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.0.output_dir = path.into();
        self
    }

    /// Set the notation for replacement colors.
    pub fn format(&mut self, format: ColorFormat) -> &mut Self {
        self.0.format = format;
        self
    }

    /// Set the JSON file with the palette data. Without one, the built-in
    /// Catppuccin colors are used.
    pub fn palette_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.0.palette_file = Some(path.into());
        self
    }

    /// Restrict the batch to the tasks for the given variants.
    ///
    /// An empty iterator clears the restriction again.
    pub fn variants(&mut self, variants: impl IntoIterator<Item = Variant>) -> &mut Self {
        let variants: Vec<_> = variants.into_iter().collect();
        self.0.variants = if variants.is_empty() {
            None
        } else {
            Some(variants)
        };
        self
    }

    /// Run tasks on their own threads.
    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.0.parallel = parallel;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Get the directory with the source documents.
    pub fn input_dir(&self) -> &Path {
        &self.0.input_dir
    }

    /// Get the directory for the generated themes.
    pub fn output_dir(&self) -> &Path {
        &self.0.output_dir
    }

    /// Get the notation for replacement colors.
    pub fn format(&self) -> ColorFormat {
        self.0.format
    }

    /// Get the palette file, if any.
    pub fn palette_file(&self) -> Option<&Path> {
        self.0.palette_file.as_deref()
    }

    /// Determine whether the tasks for the given variant run.
    pub fn includes(&self, variant: Variant) -> bool {
        self.0
            .variants
            .as_ref()
            .map_or(true, |variants| variants.contains(&variant))
    }

    /// Determine whether tasks run in parallel.
    pub fn parallel(&self) -> bool {
        self.0.parallel
    }
}
