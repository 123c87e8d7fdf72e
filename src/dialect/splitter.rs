//! Statement splitting
//!
//! Breaks a submitted block into `;`-delimited statements.

/// A submitted block, split into statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// The block as executed: right-trimmed and `;`-terminated
    pub source: String,
    /// Trimmed, non-empty statements in submission order
    pub statements: Vec<String>,
}

impl Batch {
    /// Whether the block holds no statements at all
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Split a block into statements.
///
/// A terminating `;` is appended when missing, so `"a;b"` and `"a;b;"`
/// produce the same batch.
pub fn split(code: &str) -> Batch {
    let trimmed = code.trim_end();
    if trimmed.trim_start().is_empty() {
        return Batch {
            source: String::new(),
            statements: Vec::new(),
        };
    }

    let mut source = trimmed.to_string();
    if !source.ends_with(';') {
        source.push(';');
    }

    let statements = source
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Batch { source, statements }
}
