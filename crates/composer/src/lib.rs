//! Message composition for Drawbridge.
//!
//! This crate turns the files a user attaches to one in-progress message
//! into typed content blocks. Each file is classified, then either inlined
//! as base64 ([`drawbridge_core::ContentBlock::Image`] /
//! [`drawbridge_core::ContentBlock::InlineFile`]) or relayed to the upload
//! service and kept as a store reference
//! ([`drawbridge_core::ContentBlock::RemoteFile`]).
//!
//! The [`Composer`] owns the duplicate-free, ordered
//! [`AttachmentCollection`] and ingests whole batches (one file-select,
//! drop, or paste): unsupported and duplicate files are reported without
//! aborting, the remaining files are built concurrently, and the batch
//! commits all-or-nothing: one failed upload discards every sibling block
//! and leaves the collection unchanged for a retry.

pub mod builder;
pub mod collection;
pub mod composer;
pub mod drag;
pub mod error;
pub mod source;
pub mod uploader;

pub use builder::ContentBlockBuilder;
pub use collection::AttachmentCollection;
pub use composer::{BatchReport, Composer};
pub use drag::{DragMonitor, HoverState};
pub use error::ComposeError;
pub use source::{FileSource, IncomingFile};
pub use uploader::Uploader;
