//! # Output Formatter
//!
//! Renders a digest as `<label>: <64 lowercase hex chars>\n`.

use std::io::{self, Write};

use cryptolab_core::Sha256Digest;

/// Label printed before the digest. The Go, Python and C++ variants of this
/// program print `SHA-256 (Go)`, `SHA-256 (Python)` and `SHA-256 (C++)`.
pub const DEFAULT_LABEL: &str = "SHA-256 (Rust)";

/// How a digest line is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    /// Text before the `": "` separator.
    pub label: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl OutputFormat {
    /// Render the full output line, trailing newline included.
    pub fn render_line(&self, digest: &Sha256Digest) -> String {
        format!("{}: {digest}\n", self.label)
    }

    /// Write exactly one line to `writer` and flush it.
    pub fn write_line<W: Write>(&self, writer: &mut W, digest: &Sha256Digest) -> io::Result<()> {
        writer.write_all(self.render_line(digest).as_bytes())?;
        writer.flush()
    }
}
