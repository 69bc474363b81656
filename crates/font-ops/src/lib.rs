//! Generic font table manipulation utilities.

use anyhow::{Context, Result};
use read_fonts::{FontRef, TableProvider, types::NameId};
use write_fonts::{
    FontBuilder,
    tables::name::{Name, NameRecord},
};

/// Windows platform ID.
pub const PLATFORM_WINDOWS: u16 = 3;

/// Windows Unicode BMP encoding ID.
pub const ENCODING_WINDOWS_UNICODE_BMP: u16 = 1;

/// A decoded name table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub value: String,
}

impl NameEntry {
    /// A Windows Unicode record for `language_id`.
    pub fn windows(language_id: u16, name_id: u16, value: impl Into<String>) -> Self {
        Self {
            platform_id: PLATFORM_WINDOWS,
            encoding_id: ENCODING_WINDOWS_UNICODE_BMP,
            language_id,
            name_id,
            value: value.into(),
        }
    }

    pub fn is_windows_unicode(&self) -> bool {
        self.platform_id == PLATFORM_WINDOWS && self.encoding_id == ENCODING_WINDOWS_UNICODE_BMP
    }
}

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to modify or add tables.
/// The function receives a reference to the source font and a mutable builder
/// that already contains all original tables.
pub fn rewrite_font(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}

/// Decode every name record in the font.
///
/// Records whose string cannot be decoded are skipped. A font without a
/// `name` table yields no records.
pub fn read_name_records(font: &FontRef) -> Vec<NameEntry> {
    let Ok(name) = font.name() else {
        return Vec::new();
    };

    name.name_record()
        .iter()
        .filter_map(|record| {
            let value = record
                .string(name.string_data())
                .ok()?
                .chars()
                .collect::<String>();
            Some(NameEntry {
                platform_id: record.platform_id(),
                encoding_id: record.encoding_id(),
                language_id: record.language_id(),
                name_id: record.name_id().to_u16(),
                value,
            })
        })
        .collect()
}

/// Build a `name` table from decoded entries.
///
/// Records are sorted as the table requires; later duplicates of the same
/// platform/encoding/language/name ID key are dropped.
pub fn build_name_table(entries: impl IntoIterator<Item = NameEntry>) -> Name {
    let mut records: Vec<NameRecord> = Vec::new();

    for entry in entries {
        let duplicate = records.iter().any(|r| {
            r.platform_id == entry.platform_id
                && r.encoding_id == entry.encoding_id
                && r.language_id == entry.language_id
                && r.name_id.to_u16() == entry.name_id
        });
        if duplicate {
            continue;
        }
        records.push(NameRecord::new(
            entry.platform_id,
            entry.encoding_id,
            entry.language_id,
            NameId::new(entry.name_id),
            entry.value.into(),
        ));
    }

    records.sort();
    Name::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font_with_names(entries: Vec<NameEntry>) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        builder.add_table(&build_name_table(entries)).unwrap();
        builder.build()
    }

    #[test]
    fn test_read_name_records() {
        let data = font_with_names(vec![
            NameEntry::windows(0x0409, 1, "Foo"),
            NameEntry::windows(0x0409, 2, "Bold"),
        ]);
        let font = FontRef::new(&data).unwrap();
        let records = read_name_records(&font);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], NameEntry::windows(0x0409, 1, "Foo"));
        assert_eq!(records[1].value, "Bold");
        assert!(records[1].is_windows_unicode());
    }

    #[test]
    fn test_build_name_table_sorts_and_dedups() {
        let name = build_name_table(vec![
            NameEntry::windows(0x0409, 6, "Foo-Bold"),
            NameEntry::windows(0x0409, 1, "Foo"),
            NameEntry::windows(0x0409, 1, "Ignored"),
        ]);

        let ids: Vec<u16> = name
            .name_record
            .iter()
            .map(|r| r.name_id.to_u16())
            .collect();
        assert_eq!(ids, [1, 6]);
    }

    #[test]
    fn test_rewrite_font_keeps_tables() {
        let data = font_with_names(vec![NameEntry::windows(0x0409, 4, "Foo Bold")]);
        let rewritten = rewrite_font(&data, |_, _| Ok(())).unwrap();
        let font = FontRef::new(&rewritten).unwrap();

        assert_eq!(read_name_records(&font)[0].value, "Foo Bold");
    }

    #[test]
    fn test_read_name_records_without_name_table() {
        let data = FontBuilder::new().build();
        let font = FontRef::new(&data).unwrap();
        assert!(read_name_records(&font).is_empty());
    }
}
