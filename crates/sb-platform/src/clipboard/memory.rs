use anyhow::{anyhow, Result};
use std::sync::Mutex;

use sb_core::ports::ClipboardReaderPort;

/// Clipboard held in memory. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    text: Mutex<String>,
    fail_reads: Mutex<u32>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            fail_reads: Mutex::new(0),
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.text.lock() {
            *guard = text.into();
        }
    }

    /// Make the next `count` reads fail.
    pub fn fail_next_reads(&self, count: u32) {
        if let Ok(mut guard) = self.fail_reads.lock() {
            *guard = count;
        }
    }
}

impl ClipboardReaderPort for InMemoryClipboard {
    fn read_text(&self) -> Result<String> {
        let mut failures = self
            .fail_reads
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        if *failures > 0 {
            *failures -= 1;
            return Err(anyhow!("simulated clipboard read failure"));
        }
        drop(failures);

        let text = self
            .text
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        Ok(text.clone())
    }
}
