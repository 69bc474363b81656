//! CLI definitions and command dispatch.

use std::{
    io::{Write, stdout},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Args, Parser};
use font_metadata::{
    MetadataConfig, MetadataWriter,
    config::{
        DEFAULT_BASE_NAME, DEFAULT_FAMILY, DEFAULT_OWNER, DEFAULT_URL, DEFAULT_VENDOR_ID,
        DEFAULT_WEIGHT, DEFAULT_YEAR,
    },
};
use log::debug;

use crate::sfnt::SfntFont;

#[derive(Parser)]
#[command(name = "fontmeta", version)]
#[command(about = "Rewrite family, copyright, vendor and name table metadata of a font")]
pub struct Cli {
    /// Font to update (TTF/OTF)
    pub font: Option<PathBuf>,

    /// Generate the updated font to this file (nothing is written otherwise)
    #[arg(short, long, requires = "font")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

#[derive(Debug, Clone, Args)]
pub struct MetadataArgs {
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    pub base_name: String,
    #[arg(long, default_value = DEFAULT_FAMILY)]
    pub family: String,
    #[arg(long, default_value = DEFAULT_WEIGHT)]
    pub weight: String,
    /// Copyright holder, manufacturer and designer
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,
    /// Vendor and designer URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,
    /// Copyright year
    #[arg(long, default_value = DEFAULT_YEAR)]
    pub year: String,
    /// OS/2 vendor ID
    #[arg(long, default_value = DEFAULT_VENDOR_ID)]
    pub vendor_id: String,
}

impl From<MetadataArgs> for MetadataConfig {
    fn from(args: MetadataArgs) -> Self {
        Self {
            base_name: args.base_name,
            family: args.family,
            weight: args.weight,
            owner: args.owner,
            url: args.url,
            year: args.year,
            vendor_id: args.vendor_id,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let writer = MetadataWriter::new(self.metadata.into());
        debug!("Using {:?}", writer.config());
        let mut console = stdout().lock();

        let Some(path) = self.font else {
            writer.run(None::<&mut SfntFont>, &mut console)?;
            return Ok(());
        };

        let mut font = SfntFont::open(&path)?;
        writer.run(Some(&mut font), &mut console)?;

        if let Some(output) = self.output {
            font.save(&output)?;
            writeln!(console, "Wrote {}", output.display())?;
        }

        Ok(())
    }
}
