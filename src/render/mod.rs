//! HTML rendering
//!
//! - `markup`: escaping and the inline markdown used by the about text
//! - `date`: year extraction for dated entries
//! - `collections`: one fragment per collection entry
//! - `layout`: the complete page document

pub mod collections;
pub mod date;
pub mod layout;
pub mod markup;
