//! Store-key generation.
//!
//! Every accepted upload gets a key of the form
//! `user-uploads/drawings/{year}/{zero-padded month}/{uuid}.{ext}`. The
//! year/month partition bounds listing cost; the fresh UUID avoids
//! collisions without any coordination, so an existing object can never be
//! overwritten.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prefix shared by all upload keys.
pub const KEY_PREFIX: &str = "user-uploads/drawings";

/// A freshly generated store key plus the basename recorded in metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    /// Full object key, e.g. `user-uploads/drawings/2026/08/<uuid>.dwg`.
    pub key: String,
    /// Generated basename, e.g. `<uuid>.dwg`.
    pub filename: String,
}

impl GeneratedKey {
    /// Generate a key for `original_name` at the given instant.
    ///
    /// The original file's extension is lowercased and carried over; a name
    /// without an extension yields a bare UUID basename.
    pub fn generate(original_name: &str, now: DateTime<Utc>) -> Self {
        let id = Uuid::new_v4();
        let filename = match extension_of(original_name) {
            Some(ext) => format!("{id}.{ext}"),
            None => id.to_string(),
        };
        let key = format!("{KEY_PREFIX}/{}/{filename}", now.format("%Y/%m"));
        Self { key, filename }
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}
