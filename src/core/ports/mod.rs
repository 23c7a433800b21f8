//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the ingestion core and
//! external systems (PDF libraries, the filesystem cache).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The extractor depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Scripted text sources for unit tests
//! - **Flexibility**: Swap the PDF library without touching the pipeline

mod text_cache;
mod text_source;

pub use text_cache::TextCache;
pub use text_source::TextSource;
