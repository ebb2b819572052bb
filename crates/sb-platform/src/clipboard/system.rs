use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use std::sync::Mutex;
use tracing::{debug, debug_span};

use sb_core::ports::ClipboardReaderPort;

/// OS clipboard backed by clipboard-rs.
pub struct SystemClipboard {
    inner: Mutex<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }
}

impl ClipboardReaderPort for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        let span = debug_span!("platform.clipboard.read_text");
        span.in_scope(|| {
            let ctx = self
                .inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;

            if !ctx.has(ContentFormat::Text) {
                debug!("Clipboard holds no text");
                return Ok(String::new());
            }

            let text = ctx
                .get_text()
                .map_err(|e| anyhow!("Failed to read clipboard text: {}", e))?;
            debug!(len = text.len(), "Read clipboard text");
            Ok(text)
        })
    }
}
