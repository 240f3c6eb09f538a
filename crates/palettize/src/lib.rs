//! # Palettize
//!
//! Palettize remaps the colors of XML editor themes onto the Catppuccin
//! palette.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. The `pyffi` feature adds a small Python module with the color math."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Palettize's main abstractions are:
//!
//!   * [`Rgb`](color::Rgb) and [`Lab`](color::Lab) are the **two color
//!     representations**. The former is what theme files contain, the latter
//!     what perceptual comparison requires. [`Rgb::to_lab`](color::Rgb::to_lab)
//!     converts from sRGB via linear sRGB and XYZ to CIE Lab, and
//!     [`Lab::delta_e`](color::Lab::delta_e) computes the CIEDE2000 difference.
//!   * [`Palette`](palette::Palette) is an ordered, non-empty sequence of named
//!     colors with a **nearest-color search**.
//!     [`PaletteData`](palette::PaletteData) holds the raw Catppuccin colors,
//!     either built in or loaded from JSON.
//!   * [`transform`](transform::transform) **rewrites a theme document**,
//!     replacing every attribute value that is a hashed hexadecimal color with
//!     the nearest palette color while keeping alpha digits.
//!   * [`run`](task::run) executes the **batch of theme generation tasks**,
//!     one per [`Variant`](palette::Variant), as configured by
//!     [`Options`](opt::Options).
//!
//!
//! ## 2. Remapping Colors
//!
//! ```
//! # use palettize::color::ColorFormat;
//! # use palettize::palette::{PaletteData, Variant};
//! # use palettize::transform::transform;
//! let palette = PaletteData::builtin().palette(Variant::Mocha)?;
//! let theme = transform(
//!     r##"<option name="STRING" value="#00ff00"/>"##,
//!     &palette,
//!     ColorFormat::Hex,
//! )?;
//!
//! assert_eq!(theme, r##"<option name="STRING" value="#a6e3a1"/>"##);
//! # Ok::<(), palettize::error::ThemeError>(())
//! ```
//!
//! By default, replacement colors are written as bracketed decimal coordinates,
//! e.g., `[166,227,161]`. [`ColorFormat::Hex`](color::ColorFormat::Hex)
//! selects hashed hexadecimal notation instead.
//!
//!
//! ## 3. Generating Themes
//!
//! ```no_run
//! # use palettize::opt::Options;
//! let options = Options::builder().input_dir("defaults").output_dir("dist").build();
//! let report = palettize::task::run(&options)?;
//! for failure in report.failed() {
//!     eprintln!("{}", failure);
//! }
//! # Ok::<(), palettize::error::ThemeError>(())
//! ```
//!
//! Each task reads `<input>/<base>.xml` and writes
//! `<output>/Catppuccin_<variant>.xml`. The tasks are independent of each
//! other, so a failing task does not stop the others.
//!
//!
//! ## 4. Feature Flags
//!
//! Palettize supports two feature flags:
//!
//!   - `f64` selects the eponymous type as floating point type [`Float`] and
//!     `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as [`Bits`].
//!     This feature is enabled by default.
//!   - `pyffi` enables Python bindings for the color math through
//!     [PyO3](https://pyo3.rs/).

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod color;
mod core;
pub mod error;
pub mod opt;
pub mod palette;
pub mod task;
pub mod transform;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Convert the 24-bit color to CIE Lab. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "rgb_to_lab")]
pub fn py_rgb_to_lab(r: u8, g: u8, b: u8) -> [Float; 3] {
    *color::Rgb::new(r, g, b).to_lab().as_ref()
}

/// Compute the CIEDE2000 difference between two colors in CIE Lab. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "delta_e_2000")]
pub fn py_delta_e_2000(lab1: [Float; 3], lab2: [Float; 3]) -> Float {
    core::delta_e_2000(&lab1, &lab2)
}

/// Remap the attribute value onto the built-in palette for the variant. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "remap_value", signature = (value, variant, format = color::ColorFormat::Bracketed))]
pub fn py_remap_value(
    value: &str,
    variant: palette::Variant,
    format: color::ColorFormat,
) -> PyResult<String> {
    let palette = palette::PaletteData::builtin().palette(variant)?;
    Ok(transform::remap_value(value, &palette, format)?.into_owned())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn palettize(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(py_rgb_to_lab, m)?)?;
    m.add_function(wrap_pyfunction!(py_delta_e_2000, m)?)?;
    m.add_function(wrap_pyfunction!(py_remap_value, m)?)?;

    m.add_class::<color::ColorFormat>()?;
    m.add_class::<palette::Variant>()?;
    Ok(())
}
