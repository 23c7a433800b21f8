//! Text cache port
//!
//! Defines the interface for keeping extracted text between runs.

/// Store for previously extracted text, keyed by
/// [`Program::reference`](crate::core::models::Program::reference)
pub trait TextCache: Send + Sync {
    /// Look up cached text; `Ok(None)` on a miss
    fn load(&self, reference: &str) -> anyhow::Result<Option<String>>;

    /// Save text for later runs
    fn store(&self, reference: &str, text: &str) -> anyhow::Result<()>;
}
