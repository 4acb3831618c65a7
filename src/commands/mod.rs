//! Command implementations for Folio CLI

pub mod build;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod manifest;
pub mod show;
pub mod version;
