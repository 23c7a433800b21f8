//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `pdf` - `TextSource` over the `pdf-extract` crate
//! - `cache` - `TextCache` as a directory of `.txt` files

pub mod cache;
pub mod pdf;

pub use cache::DirTextCache;
pub use pdf::PdfExtractSource;
