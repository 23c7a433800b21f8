//! manifesto-corpus - Build a queryable corpus of election manifestos
//!
//! Manifestos are stored as PDF files in a `<TYPE>/<YYYY-MM>/<file>.pdf`
//! tree. Filenames carry the contributing parties and classification tags
//! (`CDA+CU #Short.pdf`). This library scans such a tree, resolves every
//! file into a program with one view per party, and extracts the program
//! text.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod extractor;
pub mod ingest;
pub mod output;
pub mod paths;
pub mod report;
pub mod resolver;
pub mod scanner;
