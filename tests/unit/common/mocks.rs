//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real PDF parsing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use manifesto_corpus::core::ports::{TextCache, TextSource};

/// What the stub does for one file name
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return this text
    Text(String),
    /// Fail with this message
    Fail(String),
    /// Never return in time
    Hang,
    /// Panic inside the source
    Panic,
}

/// Text source scripted per file name; unknown files fail
#[derive(Default)]
pub struct StubSource {
    script: HashMap<String, Behavior>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, file: &str, text: &str) -> Self {
        self.script.insert(file.to_string(), Behavior::Text(text.to_string()));
        self
    }

    pub fn fail(mut self, file: &str, message: &str) -> Self {
        self.script.insert(file.to_string(), Behavior::Fail(message.to_string()));
        self
    }

    pub fn hang(mut self, file: &str) -> Self {
        self.script.insert(file.to_string(), Behavior::Hang);
        self
    }

    pub fn panic(mut self, file: &str) -> Self {
        self.script.insert(file.to_string(), Behavior::Panic);
        self
    }

    /// Number of extract calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextSource for StubSource {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        match self.script.get(name) {
            Some(Behavior::Text(text)) => Ok(text.clone()),
            Some(Behavior::Fail(message)) => Err(anyhow::anyhow!("{message}")),
            Some(Behavior::Hang) => {
                thread::sleep(Duration::from_secs(10));
                Ok(String::new())
            },
            Some(Behavior::Panic) => panic!("parser blew up on {name}"),
            None => Err(anyhow::anyhow!("no script for {name}")),
        }
    }
}

/// In-memory text cache
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, reference: &str) -> Option<String> {
        self.entries.lock().unwrap().get(reference).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl TextCache for MemoryCache {
    fn load(&self, reference: &str) -> anyhow::Result<Option<String>> {
        Ok(self.get(reference))
    }

    fn store(&self, reference: &str, text: &str) -> anyhow::Result<()> {
        self.entries.lock().unwrap().insert(reference.to_string(), text.to_string());
        Ok(())
    }
}
