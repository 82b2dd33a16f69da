//! # cryptolab-core — Messages and SHA-256 Digests
//!
//! The foundational types for cryptolab. The rest of the workspace depends on
//! this crate; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`Message` newtype.** Digest computation accepts `&Message`, never a
//!    bare slice, so every hashed input has a named type at the call site.
//!
//! 2. **Fixed-size `Sha256Digest`.** The digest is a `[u8; 32]`, never a
//!    `Vec<u8>`. Its hex rendering is always 64 lowercase, zero-padded
//!    characters.
//!
//! 3. **Audited primitive only.** Hashing goes through the `sha2` crate.
//!    There is no hand-rolled compression function anywhere in the workspace.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public value types derive `Debug`, `Clone` and implement
//!   `Serialize`/`Deserialize`.

pub mod digest;
pub mod error;
pub mod message;

// Re-export primary types for ergonomic imports.
pub use digest::{sha256_digest, sha256_hex, Sha256Digest, DIGEST_LEN, HEX_LEN};
pub use error::{CryptolabError, DigestParseError};
pub use message::{Message, HELLO_WORLD};
