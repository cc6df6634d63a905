//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use kern_groups::{BuildFont, DesignFont, GroupConverter, Options};
use log::{info, warn};

use crate::io::{JsonFile, read_build_fonts};

#[derive(Parser)]
#[command(name = "kern-groups")]
#[command(about = "Convert kerning groups between design and build font sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log progress at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the group table of a design font and write build fonts
    ToBuild {
        /// Design font JSON
        design: PathBuf,
        /// Output file receiving an array of build fonts
        #[arg(short, long, default_value = "build-fonts.json")]
        output: PathBuf,
        /// Number of build fonts to produce
        #[arg(long, default_value_t = 1)]
        instances: usize,
    },
    /// Write groups of build fonts back into a design font
    ToDesign {
        /// Design font JSON
        design: PathBuf,
        /// Build font JSON files; the first build font is the reference
        #[arg(required = true)]
        build_fonts: Vec<PathBuf>,
        /// Output design font JSON
        #[arg(short, long)]
        output: PathBuf,
        /// Store group order and plain groups for a later round-trip
        #[arg(long)]
        preserve_round_trip: bool,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::ToBuild { design, output, instances } => {
                to_build(&design, &output, instances)?;
            }
            Commands::ToDesign { design, build_fonts, output, preserve_round_trip } => {
                to_design(&design, &build_fonts, &output, preserve_round_trip)?;
            }
        }
        Ok(())
    }
}

pub fn to_build(design: &Path, output: &Path, instances: usize) -> Result<()> {
    if instances == 0 {
        bail!("--instances must be at least 1");
    }
    let design: DesignFont = JsonFile::new(design).read()?;
    let mut build_fonts = vec![BuildFont::new(); instances];
    GroupConverter::default().to_build(&design, &mut build_fonts)?;

    JsonFile::new(output).write(&build_fonts)?;
    info!("Wrote {} build fonts to {}", instances, output.display());
    Ok(())
}

pub fn to_design(
    design: &Path,
    build_fonts: &[PathBuf],
    output: &Path,
    preserve_round_trip: bool,
) -> Result<()> {
    let mut font: DesignFont = JsonFile::new(design).read()?;
    let build_fonts = read_build_fonts(build_fonts)?;
    if build_fonts.is_empty() {
        bail!("No build fonts found");
    }

    let converter = GroupConverter::new(Options::new().preserve_round_trip(preserve_round_trip));
    let discrepancies = converter.to_design(&mut font, &build_fonts);
    if discrepancies > 0 {
        warn!("{discrepancies} group discrepancies between build fonts");
    }

    JsonFile::new(output).write(&font)?;
    info!("Wrote design font to {}", output.display());
    Ok(())
}
