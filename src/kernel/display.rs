//! Display channel
//!
//! The host hands the kernel a [`DisplaySink`]; the kernel pushes one
//! [`DisplayData`] event per rendered output.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::kernel::render::Output;

pub const MIME_HTML: &str = "text/html";
pub const MIME_PLAIN: &str = "text/plain";

/// A display event, keyed by mimetype
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayData {
    pub source: String,
    pub data: BTreeMap<String, String>,
    pub metadata: Map<String, Value>,
}

impl DisplayData {
    /// Build a display event from a rendered output
    pub fn from_output(output: &Output) -> Self {
        let mut data = BTreeMap::new();
        data.insert(MIME_HTML.to_string(), output.html.clone());
        data.insert(MIME_PLAIN.to_string(), output.plain.clone());
        Self {
            source: "kernel".to_string(),
            data,
            metadata: Map::new(),
        }
    }

    /// The HTML representation, if present
    pub fn html(&self) -> Option<&str> {
        self.data.get(MIME_HTML).map(String::as_str)
    }

    /// The plain-text representation, if present
    pub fn plain(&self) -> Option<&str> {
        self.data.get(MIME_PLAIN).map(String::as_str)
    }
}

/// Receiver of display events
pub trait DisplaySink: Send + Sync {
    fn display(&self, data: DisplayData);
}

/// Prints the plain-text form of each event to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDisplay;

impl DisplaySink for StdoutDisplay {
    fn display(&self, data: DisplayData) {
        let text = data.plain().or_else(|| data.html()).unwrap_or_default();
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", text) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }
}
