//! # mdpages-core
//!
//! Core library for mdpages.
//!
//! This crate provides the conversion pipeline that turns markdown sources
//! into static HTML fragments, the accessor over the on-disk page store,
//! and configuration loading.

pub mod config;
pub mod convert;
pub mod markdown;
pub mod pages;

pub use config::Config;
pub use convert::{convert_dir, ConvertError, ConvertFailure, ConvertReport};
pub use markdown::MarkdownRenderer;
pub use pages::{list_pages, PageInfo, PageStoreError};
