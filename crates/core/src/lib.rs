//! Core types for the Drawbridge attachment pipeline.
//!
//! This crate is pure data: no I/O, no async. It defines how an incoming
//! file is categorized ([`media`]), the typed representation of one
//! attachment ([`block`]), and the base64 helpers used for inline encoding
//! ([`encoding`]). The store, server, client, and composer crates all build
//! on these types.

pub mod block;
pub mod encoding;
pub mod media;

pub use block::{BlockError, BlockKind, ContentBlock, StoredObject, StoredObjectMeta};
pub use encoding::EncodingError;
pub use media::{Category, classify};
