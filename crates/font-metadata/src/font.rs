//! The font object metadata is written to.
//!
//! Fonts are owned by whatever hosts them (an editor session, a file loaded by
//! the CLI, a test fixture); the writer only borrows one through [`FontHandle`].

use crate::{
    Result,
    names::{NameLabel, SfntName},
};

/// Top-level descriptive fields shown before and after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontField {
    FamilyName,
    FullName,
    FontName,
    Weight,
    Copyright,
    Version,
}

impl FontField {
    pub const ALL: [Self; 6] = [
        Self::FamilyName,
        Self::FullName,
        Self::FontName,
        Self::Weight,
        Self::Copyright,
        Self::Version,
    ];

    /// Console label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FamilyName => "Family Name",
            Self::FullName => "Full Name",
            Self::FontName => "Font Name",
            Self::Weight => "Weight",
            Self::Copyright => "Copyright",
            Self::Version => "Version",
        }
    }
}

/// A mutable, host-owned font.
pub trait FontHandle {
    fn field(&self, field: FontField) -> &str;

    fn set_field(&mut self, field: FontField, value: &str) -> Result<()>;

    fn os2_vendor(&self) -> &str;

    fn set_os2_vendor(&mut self, vendor: &str) -> Result<()>;

    fn sfnt_names(&self) -> &[SfntName];

    /// Drop every name table entry.
    fn clear_sfnt_names(&mut self) -> Result<()>;

    fn append_sfnt_name(&mut self, locale: &str, label: NameLabel, value: &str) -> Result<()>;
}

/// Plain in-memory font metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontInfo {
    pub familyname: String,
    pub fullname: String,
    pub fontname: String,
    pub weight: String,
    pub copyright: String,
    pub version: String,
    pub os2_vendor: String,
    pub sfnt_names: Vec<SfntName>,
}

impl FontInfo {
    fn slot(&mut self, field: FontField) -> &mut String {
        match field {
            FontField::FamilyName => &mut self.familyname,
            FontField::FullName => &mut self.fullname,
            FontField::FontName => &mut self.fontname,
            FontField::Weight => &mut self.weight,
            FontField::Copyright => &mut self.copyright,
            FontField::Version => &mut self.version,
        }
    }

    /// First entry for `label` in `locale`, if any.
    pub fn sfnt_name(&self, locale: &str, label: NameLabel) -> Option<&str> {
        self.sfnt_names
            .iter()
            .find(|name| name.locale == locale && name.label == label)
            .map(|name| name.value.as_str())
    }
}

impl FontHandle for FontInfo {
    fn field(&self, field: FontField) -> &str {
        match field {
            FontField::FamilyName => &self.familyname,
            FontField::FullName => &self.fullname,
            FontField::FontName => &self.fontname,
            FontField::Weight => &self.weight,
            FontField::Copyright => &self.copyright,
            FontField::Version => &self.version,
        }
    }

    fn set_field(&mut self, field: FontField, value: &str) -> Result<()> {
        *self.slot(field) = value.to_string();
        Ok(())
    }

    fn os2_vendor(&self) -> &str {
        &self.os2_vendor
    }

    fn set_os2_vendor(&mut self, vendor: &str) -> Result<()> {
        self.os2_vendor = vendor.to_string();
        Ok(())
    }

    fn sfnt_names(&self) -> &[SfntName] {
        &self.sfnt_names
    }

    fn clear_sfnt_names(&mut self) -> Result<()> {
        self.sfnt_names.clear();
        Ok(())
    }

    fn append_sfnt_name(&mut self, locale: &str, label: NameLabel, value: &str) -> Result<()> {
        self.sfnt_names.push(SfntName::new(locale, label, value));
        Ok(())
    }
}
