use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{error, info, instrument, warn};

use drawbridge_core::BlockKind;
use drawbridge_core::media::{self, Category, PDF_MEDIA_TYPE};

use crate::builder::ContentBlockBuilder;
use crate::collection::{AttachmentCollection, block_matches};
use crate::error::ComposeError;
use crate::source::IncomingFile;
use crate::uploader::Uploader;

/// Outcome of one batch ingestion.
///
/// `unsupported` and `duplicates` are surfaced to the user as one
/// aggregated notice each; neither aborts the batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// How many blocks were appended to the collection.
    pub added: usize,
    /// Names the classifier rejected.
    pub unsupported: Vec<String>,
    /// Names skipped by the duplicate policy.
    pub duplicates: Vec<String>,
}

/// The shape a pending file's block will take, for within-batch duplicate
/// checks before anything is built.
struct PendingShape {
    kind: BlockKind,
    media_type_is_pdf: bool,
    name: String,
}

impl PendingShape {
    fn of(category: Category, name: &str) -> Self {
        Self {
            kind: match category {
                Category::Image => BlockKind::Image,
                _ => BlockKind::File,
            },
            media_type_is_pdf: category == Category::Pdf,
            name: name.to_owned(),
        }
    }
}

/// Composes one message's attachments.
///
/// Owns the [`AttachmentCollection`] and the [`ContentBlockBuilder`]; all
/// mutation happens on `&mut self` from the single task driving the user
/// action, so no locking is involved. Uploads within a batch still run
/// concurrently; the collection is only touched once, after the join.
pub struct Composer {
    collection: AttachmentCollection,
    builder: ContentBlockBuilder,
}

impl Composer {
    /// Create a composer that relays store-bound files to `uploader`.
    pub fn new(uploader: Arc<dyn Uploader>) -> Self {
        Self {
            collection: AttachmentCollection::new(),
            builder: ContentBlockBuilder::new(uploader),
        }
    }

    /// The current attachment collection.
    pub fn collection(&self) -> &AttachmentCollection {
        &self.collection
    }

    /// All blocks, in arrival order.
    pub fn blocks(&self) -> &[drawbridge_core::ContentBlock] {
        self.collection.blocks()
    }

    /// Remove one block; stable order of the remainder.
    pub fn remove(&mut self, index: usize) -> Option<drawbridge_core::ContentBlock> {
        self.collection.remove(index)
    }

    /// Drop all attachments (message sent or discarded).
    pub fn reset(&mut self) {
        self.collection.reset();
    }

    /// Ingest one batch of files (a file-select, drop, or paste).
    ///
    /// The batch is partitioned into unsupported, duplicate, and unique
    /// files; only the unique ones are built, concurrently, under a single
    /// fail-fast join. Commit is all-or-nothing: if any build fails, no
    /// block from this batch is added and the error is returned, leaving
    /// the collection unchanged so the user can retry the same files.
    #[instrument(skip(self, files), fields(batch_size = files.len()))]
    pub async fn ingest(&mut self, files: Vec<IncomingFile>) -> Result<BatchReport, ComposeError> {
        let mut report = BatchReport::default();
        let mut pending: Vec<PendingShape> = Vec::new();
        let mut unique: Vec<IncomingFile> = Vec::new();

        for file in files {
            let category = media::classify(&file.name, &file.media_type);
            if !category.is_supported() {
                report.unsupported.push(file.name);
                continue;
            }
            if self.is_duplicate_of_collection_or_pending(category, &file.name, &pending) {
                report.duplicates.push(file.name);
                continue;
            }
            pending.push(PendingShape::of(category, &file.name));
            unique.push(file);
        }

        if !report.unsupported.is_empty() {
            warn!(rejected = report.unsupported.len(), "batch contains unsupported files");
        }
        if !report.duplicates.is_empty() {
            info!(skipped = report.duplicates.len(), "batch contains duplicate files");
        }

        if unique.is_empty() {
            return Ok(report);
        }

        // Single combined join: concurrent builds, first failure aborts the
        // whole batch before anything is committed.
        let builds = unique.iter().map(|file| self.builder.build(file));
        let blocks = match try_join_all(builds).await {
            Ok(blocks) => blocks,
            Err(err) => {
                error!(error = %err, "batch aborted; no blocks committed");
                return Err(err);
            }
        };

        report.added = blocks.len();
        self.collection.add(blocks);
        info!(added = report.added, total = self.collection.len(), "batch committed");

        Ok(report)
    }

    fn is_duplicate_of_collection_or_pending(
        &self,
        category: Category,
        name: &str,
        pending: &[PendingShape],
    ) -> bool {
        if self.collection.is_duplicate(category, name) {
            return true;
        }
        pending.iter().any(|shape| {
            let media_type = if shape.media_type_is_pdf { PDF_MEDIA_TYPE } else { "" };
            block_matches(shape.kind, media_type, &shape.name, category, name)
        })
    }
}
