//! # mdpages-render
//!
//! Template rendering library for mdpages.
//!
//! This crate handles HTML template rendering using Askama.

pub mod templates;

pub use templates::{IndexTemplate, PageEntry, PageTemplate, DATE_FORMAT};
