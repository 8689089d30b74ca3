use drawbridge_core::media::{Category, PDF_MEDIA_TYPE};
use drawbridge_core::{BlockKind, ContentBlock};

/// Ordered, duplicate-free collection of one message's attachments.
///
/// Ordering is insertion order. Duplicate suppression is a *pre-build*
/// policy: callers check [`AttachmentCollection::is_duplicate`] before
/// spending a read or an upload on a candidate file; `add` itself appends
/// unconditionally.
#[derive(Debug, Default)]
pub struct AttachmentCollection {
    blocks: Vec<ContentBlock>,
}

impl AttachmentCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks held.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when no blocks are held.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks, in arrival order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// The block at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ContentBlock> {
        self.blocks.get(index)
    }

    /// Append blocks, preserving their arrival order.
    pub fn add(&mut self, blocks: impl IntoIterator<Item = ContentBlock>) {
        self.blocks.extend(blocks);
    }

    /// Remove exactly one block. The remaining blocks keep their relative
    /// order. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<ContentBlock> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }

    /// Empty the collection (message sent or discarded).
    pub fn reset(&mut self) {
        self.blocks.clear();
    }

    /// Would a candidate file of `category` named `name` duplicate an
    /// existing block?
    ///
    /// PDFs match on (PDF media type, name); images on (image kind, name);
    /// CAD and code files on (file kind, name) regardless of whether the
    /// existing block is inline or a remote reference. Classification is
    /// deterministic per name, so a re-added file would only reach the
    /// same branch again.
    pub fn is_duplicate(&self, category: Category, name: &str) -> bool {
        self.blocks
            .iter()
            .any(|block| block_matches(block.kind(), block.media_type(), block.display_name(), category, name))
    }
}

/// Shared duplicate predicate, also used for within-batch checks where only
/// the would-be block's shape is known.
pub(crate) fn block_matches(
    existing_kind: BlockKind,
    existing_media_type: &str,
    existing_name: &str,
    category: Category,
    name: &str,
) -> bool {
    if existing_name != name {
        return false;
    }
    match category {
        Category::Pdf => existing_media_type == PDF_MEDIA_TYPE,
        Category::Image => existing_kind == BlockKind::Image,
        Category::CadLike | Category::CodeLike => existing_kind == BlockKind::File,
        Category::Unsupported => false,
    }
}
