//! Font metadata CLI library.

pub mod cli;
pub mod sfnt;

pub use sfnt::SfntFont;
