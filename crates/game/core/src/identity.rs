//! Content-addressed identity.
//!
//! Abilities, battles and quests are identified by the hash of their own
//! structure, not by an allocated key. Both the client and the chain must
//! hash the same logical value to the same id.
//!
//! # Encoding
//!
//! `id = SHA-256(bincode(value))` with bincode 1.3's default options:
//! fixed-width little-endian integers, `u32` enum discriminants, one tag
//! byte for `Option`, and fixed-size arrays written element by element
//! without a length prefix. Every hashed type is plain fixed-size data, so
//! the encoding of a value never depends on anything but its fields.

use sha2::{Digest, Sha256};

/// Types whose identity is the hash of their canonical encoding.
pub trait ContentId: serde::Serialize {
    fn content_id(&self) -> [u8; 32] {
        content_hash(self)
    }
}

/// SHA-256 of the bincode encoding of `value`.
///
/// # Panics
///
/// If `value` cannot be encoded. Hashed types are fixed-size structs,
/// arrays and enums, none of which bincode rejects.
pub fn content_hash<T: serde::Serialize + ?Sized>(value: &T) -> [u8; 32] {
    let bytes = bincode::serialize(value)
        .unwrap_or_else(|err| unreachable!("content encoding failed: {err}"));
    Sha256::digest(&bytes).into()
}
