//! Command implementations

mod ingest;
mod init;

pub use ingest::ingest;
pub use init::init;
