//! SFNT name table labels and entries.

use std::{fmt, str::FromStr};

/// The only locale metadata is written for.
pub const ENGLISH_US: &str = "English (US)";

/// Windows language ID for [`ENGLISH_US`].
pub const ENGLISH_US_LANGUAGE_ID: u16 = 0x0409;

/// Name table entry kinds, labelled the way font editors present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameLabel {
    Copyright,
    Family,
    SubFamily,
    UniqueId,
    Fullname,
    Version,
    PostScriptName,
    Trademark,
    Manufacturer,
    Designer,
    Descriptor,
    VendorUrl,
    DesignerUrl,
    License,
    LicenseUrl,
    PreferredFamily,
    PreferredStyles,
    CompatibleFull,
    SampleText,
    CidFindfontName,
    WwsFamily,
    WwsSubfamily,
}

impl NameLabel {
    pub const ALL: [Self; 22] = [
        Self::Copyright,
        Self::Family,
        Self::SubFamily,
        Self::UniqueId,
        Self::Fullname,
        Self::Version,
        Self::PostScriptName,
        Self::Trademark,
        Self::Manufacturer,
        Self::Designer,
        Self::Descriptor,
        Self::VendorUrl,
        Self::DesignerUrl,
        Self::License,
        Self::LicenseUrl,
        Self::PreferredFamily,
        Self::PreferredStyles,
        Self::CompatibleFull,
        Self::SampleText,
        Self::CidFindfontName,
        Self::WwsFamily,
        Self::WwsSubfamily,
    ];

    /// Numeric name ID in the `name` table.
    pub const fn name_id(self) -> u16 {
        match self {
            Self::Copyright => 0,
            Self::Family => 1,
            Self::SubFamily => 2,
            Self::UniqueId => 3,
            Self::Fullname => 4,
            Self::Version => 5,
            Self::PostScriptName => 6,
            Self::Trademark => 7,
            Self::Manufacturer => 8,
            Self::Designer => 9,
            Self::Descriptor => 10,
            Self::VendorUrl => 11,
            Self::DesignerUrl => 12,
            Self::License => 13,
            Self::LicenseUrl => 14,
            // 15 is reserved
            Self::PreferredFamily => 16,
            Self::PreferredStyles => 17,
            Self::CompatibleFull => 18,
            Self::SampleText => 19,
            Self::CidFindfontName => 20,
            Self::WwsFamily => 21,
            Self::WwsSubfamily => 22,
        }
    }

    pub fn from_name_id(name_id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.name_id() == name_id)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copyright => "Copyright",
            Self::Family => "Family",
            Self::SubFamily => "SubFamily",
            Self::UniqueId => "UniqueID",
            Self::Fullname => "Fullname",
            Self::Version => "Version",
            Self::PostScriptName => "PostScriptName",
            Self::Trademark => "Trademark",
            Self::Manufacturer => "Manufacturer",
            Self::Designer => "Designer",
            Self::Descriptor => "Descriptor",
            Self::VendorUrl => "Vendor URL",
            Self::DesignerUrl => "Designer URL",
            Self::License => "License",
            Self::LicenseUrl => "License URL",
            Self::PreferredFamily => "Preferred Family",
            Self::PreferredStyles => "Preferred Styles",
            Self::CompatibleFull => "Compatible Full",
            Self::SampleText => "Sample Text",
            Self::CidFindfontName => "CID findfont Name",
            Self::WwsFamily => "WWS Family",
            Self::WwsSubfamily => "WWS Subfamily",
        }
    }
}

impl fmt::Display for NameLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for NameLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// One localized name table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfntName {
    pub locale: String,
    pub label: NameLabel,
    pub value: String,
}

impl SfntName {
    pub fn new(locale: impl Into<String>, label: NameLabel, value: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            label,
            value: value.into(),
        }
    }
}
