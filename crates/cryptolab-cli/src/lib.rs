//! # cryptolab-cli — `hello-sha256` Command-Line Interface
//!
//! Hashes the fixed `"Hello, World!"` message and prints one line:
//!
//! ```text
//! SHA-256 (Rust): dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; hashing and formatting live here so
//!   they can be driven against any `io::Write` in tests.
//! - Stdout carries the digest line only. Diagnostics go to stderr via
//!   `tracing`.

pub mod output;

use std::io::Write;

use cryptolab_core::{sha256_digest, CryptolabError, Sha256Digest, HELLO_WORLD};

use crate::output::OutputFormat;

/// Hash the fixed message and write the labelled digest line to `out`.
///
/// Returns the digest that was written.
///
/// # Errors
///
/// Returns `CryptolabError::Io` if writing to `out` fails.
pub fn run<W: Write>(out: &mut W) -> Result<Sha256Digest, CryptolabError> {
    let digest = sha256_digest(&HELLO_WORLD);
    tracing::debug!(message_len = HELLO_WORLD.len(), digest = %digest, "computed digest");

    OutputFormat::default().write_line(out, &digest)?;
    Ok(digest)
}
