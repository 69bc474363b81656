//! An SFNT font file exposed as a [`FontHandle`].
//!
//! Fields are read from the `name`, `head` and `OS/2` tables when the font is
//! opened. Nothing is written back until [`SfntFont::generate`] or
//! [`SfntFont::save`] is called.

use std::{
    fs::{create_dir_all, read, write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use font_metadata::{
    ENGLISH_US, ENGLISH_US_LANGUAGE_ID, Error, FontField, FontHandle, FontInfo, NameLabel,
    SfntName,
};
use fontmeta_font_ops::{NameEntry, build_name_table, read_name_records, rewrite_font};
use log::{info, warn};
use read_fonts::{FontRef, TableProvider};
use write_fonts::{from_obj::ToOwnedTable, tables::os2::Os2, types::Tag};

/// Name table fields filled in from top-level fields when no entry provides them.
const FALLBACK_FIELDS: [(NameLabel, FontField); 6] = [
    (NameLabel::Copyright, FontField::Copyright),
    (NameLabel::Family, FontField::FamilyName),
    (NameLabel::SubFamily, FontField::Weight),
    (NameLabel::Fullname, FontField::FullName),
    (NameLabel::Version, FontField::Version),
    (NameLabel::PostScriptName, FontField::FontName),
];

/// A font loaded from TTF/OTF data.
#[derive(Debug, Clone)]
pub struct SfntFont {
    data: Vec<u8>,
    info: FontInfo,
}

impl SfntFont {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read(path)
            .with_context(|| format!("Failed to open font: {}", path.display()))?;
        let font = Self::from_bytes(data)
            .with_context(|| format!("Not an SFNT font: {}", path.display()))?;
        info!("Opened {} ({})", path.display(), font.info.fontname);
        Ok(font)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let info = read_info(&FontRef::new(&data).context("Failed to parse font")?);
        Ok(Self { data, info })
    }

    /// Current metadata.
    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    /// Build font data carrying the current metadata.
    ///
    /// All original tables are kept; `name` is rebuilt from the entries and
    /// `OS/2` gets the vendor ID.
    pub fn generate(&self) -> Result<Vec<u8>> {
        let vendor = vendor_tag(&self.info.os2_vendor)?;
        let name = build_name_table(self.name_entries());

        rewrite_font(&self.data, |font, builder| {
            builder.add_table(&name)?;

            match font.os2() {
                Ok(os2) => {
                    let mut new_os2: Os2 = os2.to_owned_table();
                    new_os2.ach_vend_id = vendor;
                    builder.add_table(&new_os2)?;
                }
                Err(_) => warn!("Font has no OS/2 table; vendor ID not written"),
            }

            Ok(())
        })
    }

    /// Generate and write the font to `path`, creating missing directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self
            .generate()
            .with_context(|| format!("Failed to generate {}", self.info.fontname))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        write(path, data).with_context(|| {
            format!("Failed to save {} to {}", self.info.fontname, path.display())
        })?;

        info!("Generated {} ({})", path.display(), self.info.fontname);
        Ok(())
    }

    fn name_entries(&self) -> Vec<NameEntry> {
        let mut entries: Vec<NameEntry> = self
            .info
            .sfnt_names
            .iter()
            .map(|name| {
                NameEntry::windows(ENGLISH_US_LANGUAGE_ID, name.label.name_id(), &name.value)
            })
            .collect();

        for (label, field) in FALLBACK_FIELDS {
            let value = self.info.field(field);
            if self.info.sfnt_name(ENGLISH_US, label).is_some() || value.is_empty() {
                continue;
            }
            let value = match label {
                NameLabel::Version => format!("Version {value}"),
                _ => value.to_string(),
            };
            entries.push(NameEntry::windows(ENGLISH_US_LANGUAGE_ID, label.name_id(), value));
        }

        entries
    }
}

impl FontHandle for SfntFont {
    fn field(&self, field: FontField) -> &str {
        self.info.field(field)
    }

    fn set_field(&mut self, field: FontField, value: &str) -> font_metadata::Result<()> {
        self.info.set_field(field, value)
    }

    fn os2_vendor(&self) -> &str {
        self.info.os2_vendor()
    }

    fn set_os2_vendor(&mut self, vendor: &str) -> font_metadata::Result<()> {
        self.info.set_os2_vendor(vendor)
    }

    fn sfnt_names(&self) -> &[SfntName] {
        self.info.sfnt_names()
    }

    fn clear_sfnt_names(&mut self) -> font_metadata::Result<()> {
        self.info.clear_sfnt_names()
    }

    fn append_sfnt_name(
        &mut self,
        locale: &str,
        label: NameLabel,
        value: &str,
    ) -> font_metadata::Result<()> {
        if locale != ENGLISH_US {
            return Err(Error::UnsupportedLocale(locale.to_string()));
        }
        self.info.append_sfnt_name(locale, label, value)
    }
}

fn read_info(font: &FontRef) -> FontInfo {
    let records = read_name_records(font);

    // Windows English (US) first, anything else with the same ID otherwise.
    let lookup = |label: NameLabel| -> String {
        let name_id = label.name_id();
        records
            .iter()
            .find(|r| r.name_id == name_id && is_english_us(r))
            .or_else(|| records.iter().find(|r| r.name_id == name_id))
            .map(|r| r.value.clone())
            .unwrap_or_default()
    };

    let version = match lookup(NameLabel::Version) {
        v if v.is_empty() => font
            .head()
            .map(|head| format!("{:.3}", head.font_revision().to_f64()))
            .unwrap_or_default(),
        v => v.strip_prefix("Version ").map(str::to_string).unwrap_or(v),
    };

    let os2_vendor = font
        .os2()
        .map(|os2| os2.ach_vend_id().to_string().trim_end().to_string())
        .unwrap_or_default();

    let sfnt_names = records
        .iter()
        .filter(|r| is_english_us(r))
        .filter_map(|r| {
            let label = NameLabel::from_name_id(r.name_id)?;
            Some(SfntName::new(ENGLISH_US, label, r.value.clone()))
        })
        .collect();

    FontInfo {
        familyname: lookup(NameLabel::Family),
        fullname: lookup(NameLabel::Fullname),
        fontname: lookup(NameLabel::PostScriptName),
        weight: lookup(NameLabel::SubFamily),
        copyright: lookup(NameLabel::Copyright),
        version,
        os2_vendor,
        sfnt_names,
    }
}

fn is_english_us(record: &NameEntry) -> bool {
    record.is_windows_unicode() && record.language_id == ENGLISH_US_LANGUAGE_ID
}

/// Encode a vendor ID as an OS/2 tag, padding with spaces.
fn vendor_tag(vendor: &str) -> Result<Tag> {
    if !vendor.is_ascii() || vendor.len() > 4 {
        bail!(
            "Invalid OS/2 vendor ID '{vendor}'. Expected up to four ASCII characters."
        );
    }
    let mut bytes = [b' '; 4];
    bytes[..vendor.len()].copy_from_slice(vendor.as_bytes());
    Ok(Tag::new(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_tag_pads() {
        assert_eq!(vendor_tag("ARUR").unwrap(), Tag::new(b"ARUR"));
        assert_eq!(vendor_tag("AB").unwrap(), Tag::new(b"AB  "));
        assert_eq!(vendor_tag("").unwrap(), Tag::new(b"    "));
    }

    #[test]
    fn test_vendor_tag_rejects_invalid() {
        assert!(vendor_tag("TOOLONG").is_err());
        assert!(vendor_tag("ÄBC").is_err());
    }
}
