//! Apply configured metadata to a font and report the change.

use std::io::Write;

use log::debug;

use crate::{
    Result,
    config::MetadataConfig,
    derived::DerivedMetadata,
    font::{FontField, FontHandle},
    names::ENGLISH_US,
};

const RULE_WIDTH: usize = 60;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// There was no font to update.
    NoActiveFont,
    /// The font was updated with these values.
    Applied(DerivedMetadata),
}

/// Writes names, copyright, vendor ID and name table entries to a font.
#[derive(Debug, Clone, Default)]
pub struct MetadataWriter {
    config: MetadataConfig,
}

impl MetadataWriter {
    pub fn new(config: MetadataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Apply metadata to `font`, printing before/after values to `console`.
    ///
    /// A missing font is reported on the console and leaves nothing modified.
    /// Errors from the font host or the console are returned unchanged.
    pub fn run<F, W>(&self, font: Option<&mut F>, console: &mut W) -> Result<Outcome>
    where
        F: FontHandle + ?Sized,
        W: Write + ?Sized,
    {
        let Some(font) = font else {
            writeln!(console, "Error: No font is currently open!")?;
            writeln!(console, "Please open a font file first, then run this again.")?;
            return Ok(Outcome::NoActiveFont);
        };

        let derived = DerivedMetadata::derive(&self.config);
        let version = font.field(FontField::Version).to_string();

        writeln!(console, "Current font metadata:")?;
        print_fields(font, console)?;

        writeln!(console, "\nApplying new metadata...")?;
        self.apply(font, &derived, &version)?;

        writeln!(console, "\nNew metadata applied:")?;
        print_fields(font, console)?;

        writeln!(console, "\n✓ Metadata update completed successfully!")?;
        writeln!(console, "\nNext steps:")?;
        writeln!(console, "1. Review the changes above")?;
        writeln!(console, "2. Save your font by generating it to a file")?;
        writeln!(
            console,
            "\nNote: The font is modified in memory. Save to apply changes permanently."
        )?;

        Ok(Outcome::Applied(derived))
    }

    fn apply<F>(&self, font: &mut F, derived: &DerivedMetadata, version: &str) -> Result<()>
    where
        F: FontHandle + ?Sized,
    {
        debug!("Setting top-level names for {}", derived.fontname);
        font.set_field(FontField::FamilyName, &derived.familyname)?;
        font.set_field(FontField::FullName, &derived.fullname)?;
        font.set_field(FontField::FontName, &derived.fontname)?;
        font.set_field(FontField::Weight, &derived.weight)?;
        font.set_field(FontField::Copyright, &derived.copyright)?;
        font.set_field(FontField::Version, version)?;

        debug!("Setting OS/2 vendor to {:?}", derived.vendor_id);
        font.set_os2_vendor(&derived.vendor_id)?;

        font.clear_sfnt_names()?;
        let entries = derived.name_entries(version);
        debug!("Writing {} name table entries", entries.len());
        for (label, value) in &entries {
            font.append_sfnt_name(ENGLISH_US, *label, value)?;
        }

        Ok(())
    }
}

fn print_fields<F, W>(font: &F, console: &mut W) -> Result<()>
where
    F: FontHandle + ?Sized,
    W: Write + ?Sized,
{
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(console, "{rule}")?;
    for field in FontField::ALL {
        writeln!(console, "{}: {}", field.label(), font.field(field))?;
    }
    writeln!(console, "{rule}")?;
    Ok(())
}
