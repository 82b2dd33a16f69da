//! # Message — Hash Input
//!
//! `Message` is the byte sequence handed to the hasher. It borrows its bytes,
//! so the fixed program input can live in a `static` with no allocation.

use std::fmt;

/// The fixed input hashed by the `hello-sha256` binary.
pub const HELLO_WORLD: Message<'static> = Message::new(b"Hello, World!");

/// An immutable byte sequence to be hashed.
///
/// Any length is valid, including zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message<'a>(&'a [u8]);

impl<'a> Message<'a> {
    /// Wrap a byte slice. Usable in `const` context.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes for digest computation.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the length of the message in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the message is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(s: &'a str) -> Self {
        Self(s.as_bytes())
    }
}

impl AsRef<[u8]> for Message<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.0) {
            Ok(s) => write!(f, "Message({s:?})"),
            Err(_) => write!(f, "Message({} bytes)", self.0.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_bytes() {
        assert_eq!(HELLO_WORLD.as_bytes(), b"Hello, World!");
        assert_eq!(HELLO_WORLD.len(), 13);
        assert!(!HELLO_WORLD.is_empty());
    }

    #[test]
    fn empty_message_is_valid() {
        let m = Message::from("");
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn str_and_slice_constructors_agree() {
        let s = "Hello, World!";
        assert_eq!(Message::from(s), Message::new(s.as_bytes()));
        assert_eq!(Message::from(s), HELLO_WORLD);
    }

    #[test]
    fn debug_shows_text_or_length() {
        assert_eq!(format!("{HELLO_WORLD:?}"), r#"Message("Hello, World!")"#);
        let binary = [0xffu8, 0xfe, 0x00];
        assert_eq!(format!("{:?}", Message::new(&binary)), "Message(3 bytes)");
    }
}
