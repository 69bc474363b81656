//! Metadata strings composed from a [`MetadataConfig`].

use crate::{config::MetadataConfig, names::NameLabel};

/// Every string written to a font, derived once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedMetadata {
    pub fontname: String,
    pub familyname: String,
    pub fullname: String,
    pub weight: String,
    pub copyright: String,
    pub trademark: String,
    pub manufacturer: String,
    pub designer: String,
    pub descriptor: String,
    pub vendor_url: String,
    pub designer_url: String,
    pub preferred_family: String,
    pub preferred_styles: String,
    pub unique_id: String,
    pub vendor_id: String,
}

impl DerivedMetadata {
    pub fn derive(config: &MetadataConfig) -> Self {
        let MetadataConfig {
            base_name,
            family,
            weight,
            owner,
            url,
            year,
            vendor_id,
        } = config;
        let fullname = format!("{base_name} {family} {weight}");

        Self {
            fontname: format!("{base_name}{family}-{weight}"),
            familyname: format!("{base_name} {family}"),
            weight: weight.clone(),
            copyright: format!("© {year} {owner}. All rights reserved."),
            trademark: format!("{base_name} {family} is a trademark of {owner}."),
            manufacturer: owner.clone(),
            designer: owner.clone(),
            descriptor: owner.clone(),
            vendor_url: url.clone(),
            designer_url: url.clone(),
            preferred_family: format!("{base_name} {family}"),
            preferred_styles: weight.clone(),
            unique_id: format!("{owner}: {fullname}: {year}"),
            vendor_id: vendor_id.clone(),
            fullname,
        }
    }

    /// Name table entries in write order.
    ///
    /// `version` is the font's own version string; it gets the `Version ` prefix here.
    pub fn name_entries(&self, version: &str) -> Vec<(NameLabel, String)> {
        vec![
            (NameLabel::Copyright, self.copyright.clone()),
            (NameLabel::Family, self.familyname.clone()),
            (NameLabel::SubFamily, self.weight.clone()),
            (NameLabel::UniqueId, self.unique_id.clone()),
            (NameLabel::Fullname, self.fullname.clone()),
            (NameLabel::Version, format!("Version {version}")),
            (NameLabel::PostScriptName, self.fontname.clone()),
            (NameLabel::Trademark, self.trademark.clone()),
            (NameLabel::Manufacturer, self.manufacturer.clone()),
            (NameLabel::Designer, self.designer.clone()),
            (NameLabel::Descriptor, self.descriptor.clone()),
            (NameLabel::VendorUrl, self.vendor_url.clone()),
            (NameLabel::DesignerUrl, self.designer_url.clone()),
            (NameLabel::PreferredFamily, self.preferred_family.clone()),
            (NameLabel::PreferredStyles, self.preferred_styles.clone()),
        ]
    }
}
