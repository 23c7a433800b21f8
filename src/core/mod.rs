//! Core domain logic for the manifesto corpus
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Tag, PartyCode, Election, Program, PartyView)
//! - `services/` - Filename decoding, tag parsing, text cleanup
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
