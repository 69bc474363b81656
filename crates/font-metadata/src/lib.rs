//! Compose descriptive font metadata from a few base values and apply it to a
//! host-owned font.
//!
//! ```
//! use font_metadata::{FontInfo, MetadataConfig, MetadataWriter, Outcome};
//!
//! let mut font = FontInfo { version: "1.000".into(), ..Default::default() };
//! let writer = MetadataWriter::new(MetadataConfig::default().with_weight("Bold"));
//! let outcome = writer.run(Some(&mut font), &mut std::io::sink()).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Applied(_)));
//! assert_eq!(font.fontname, "RNXPro-Bold");
//! assert_eq!(font.sfnt_names.len(), 15);
//! ```

pub mod config;
mod derived;
mod error;
mod font;
mod names;
mod writer;

pub use config::MetadataConfig;
pub use derived::DerivedMetadata;
pub use error::{Error, Result};
pub use font::{FontField, FontHandle, FontInfo};
pub use names::{ENGLISH_US, ENGLISH_US_LANGUAGE_ID, NameLabel, SfntName, UnknownLabel};
pub use writer::{MetadataWriter, Outcome};
