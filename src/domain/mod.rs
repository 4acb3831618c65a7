//! Domain models for Folio
//!
//! This module contains plain domain objects: the known content collections and
//! the parsed content of a site after loading.

pub mod collection;
pub mod content;

pub use collection::Collection;
pub use content::{Entry, LoadReport, SiteContent};
