//! palettize: generate the Catppuccin flavors of an XML editor theme.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use palettize::color::ColorFormat;
use palettize::opt::{Options, Volume};
use palettize::palette::Variant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "palettize", version)]
#[command(about = "Remap the colors of XML editor themes onto the Catppuccin palette", long_about = None)]
struct Cli {
    /// Directory with the Dark.xml and Light.xml base themes
    #[arg(long, value_name = "DIR", default_value = "defaults")]
    input: PathBuf,

    /// Directory for the generated Catppuccin_<variant>.xml themes
    #[arg(long, value_name = "DIR", default_value = "dist")]
    output: PathBuf,

    /// Notation for replacement colors
    #[arg(long, value_enum, default_value_t = CliFormat::Bracketed)]
    format: CliFormat,

    /// JSON file with palette colors instead of the built-in ones
    #[arg(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Only generate the given variants (repeatable)
    #[arg(long = "variant", value_enum, value_name = "NAME")]
    variants: Vec<CliVariant>,

    /// Run tasks in parallel
    #[arg(long)]
    parallel: bool,

    /// Log every remapped color
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log failures
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
enum CliFormat {
    #[default]
    Bracketed,
    Hex,
}

impl From<CliFormat> for ColorFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Bracketed => ColorFormat::Bracketed,
            CliFormat::Hex => ColorFormat::Hex,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum CliVariant {
    Mocha,
    Macchiato,
    Frappe,
    Latte,
}

impl From<CliVariant> for Variant {
    fn from(v: CliVariant) -> Self {
        match v {
            CliVariant::Mocha => Variant::Mocha,
            CliVariant::Macchiato => Variant::Macchiato,
            CliVariant::Frappe => Variant::Frappe,
            CliVariant::Latte => Variant::Latte,
        }
    }
}

impl Cli {
    fn volume(&self) -> Volume {
        if self.quiet {
            Volume::Silent
        } else if self.verbose {
            Volume::Detailed
        } else {
            Volume::Regular
        }
    }

    fn options(&self) -> Options {
        let mut builder = Options::builder();
        builder
            .volume(self.volume())
            .input_dir(&self.input)
            .output_dir(&self.output)
            .format(self.format.into())
            .variants(self.variants.iter().map(|v| Variant::from(*v)))
            .parallel(self.parallel);
        if let Some(path) = &self.palette {
            builder.palette_file(path);
        }
        builder.build()
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the volume.
fn init_logging(volume: Volume) {
    let filter = EnvFilter::builder()
        .with_default_directive(volume.level().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.options();
    init_logging(options.volume());

    let report = palettize::task::run(&options).with_context(|| {
        format!(
            "could not prepare theme generation into {}",
            options.output_dir().display()
        )
    })?;

    if report.is_success() {
        info!(themes = report.completed().len(), "done");
        return Ok(ExitCode::SUCCESS);
    }

    // The failures themselves have been logged as warnings already.
    error!(
        failed = report.failed().len(),
        completed = report.completed().len(),
        "some themes could not be generated"
    );
    Ok(ExitCode::FAILURE)
}
