//! Media classification for incoming files.
//!
//! Classification is extension-first for the formats whose media-type
//! reporting is unreliable across browsers and operating systems (CAD
//! drawings, scripts), and media-type driven otherwise. The tables below are
//! process-wide constants; there is no runtime mutation.

/// File extensions treated as CAD drawings, matched case-insensitively.
pub const CAD_EXTENSIONS: &[&str] = &["dwg", "dxf"];

/// File extensions treated as scripting-language sources.
pub const SCRIPT_EXTENSIONS: &[&str] = &["py"];

/// Image media types accepted for inline encoding. Exact membership.
pub const IMAGE_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// The PDF document media type.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media types reported for CAD drawings.
///
/// Includes `application/octet-stream` because many browsers fall back to
/// the generic binary type for drawing files.
pub const CAD_MEDIA_TYPES: &[&str] = &[
    "image/vnd.dwg",
    "image/vnd.dxf",
    "application/acad",
    "application/x-acad",
    "application/dxf",
    "application/octet-stream",
];

/// Media types reported for scripting-language sources.
pub const SCRIPT_MEDIA_TYPES: &[&str] = &["text/x-python", "application/x-python-code"];

/// Handling category assigned to an incoming file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Inline-encoded image.
    Image,
    /// Inline-encoded PDF document.
    Pdf,
    /// CAD drawing, relayed to the object store.
    CadLike,
    /// Scripting-language source, relayed to the object store.
    CodeLike,
    /// Not handled by the pipeline.
    Unsupported,
}

impl Category {
    /// Returns `true` for every category the pipeline can build a block for.
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

/// Classify a file by name and declared media type.
///
/// Extension checks run first: a recognized CAD or script suffix wins over
/// any declared media type, including an empty one. Otherwise the declared
/// type decides via exact membership in the constant tables above.
pub fn classify(name: &str, declared_media_type: &str) -> Category {
    let lower = name.to_lowercase();

    if has_extension(&lower, CAD_EXTENSIONS) {
        return Category::CadLike;
    }
    if has_extension(&lower, SCRIPT_EXTENSIONS) {
        return Category::CodeLike;
    }
    if IMAGE_MEDIA_TYPES.contains(&declared_media_type) {
        return Category::Image;
    }
    if declared_media_type == PDF_MEDIA_TYPE {
        return Category::Pdf;
    }
    if CAD_MEDIA_TYPES.contains(&declared_media_type) {
        return Category::CadLike;
    }
    if SCRIPT_MEDIA_TYPES.contains(&declared_media_type) {
        return Category::CodeLike;
    }
    Category::Unsupported
}

/// Return the recognized CAD extension of `name` (lowercased, without the
/// dot), if it has one.
pub fn cad_extension(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    CAD_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(&format!(".{ext}")))
        .copied()
}

/// Derive the media type for a CAD file from its extension.
///
/// Used when the declared type is missing or a useless generic (`text/plain`),
/// which is common for drawing files.
pub fn media_type_for_cad(name: &str) -> Option<&'static str> {
    match cad_extension(name) {
        Some("dwg") => Some("image/vnd.dwg"),
        Some("dxf") => Some("image/vnd.dxf"),
        _ => None,
    }
}

fn has_extension(lower_name: &str, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| lower_name.ends_with(&format!(".{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cad_extension_wins_over_declared_type() {
        assert_eq!(classify("plan.dwg", "text/plain"), Category::CadLike);
        assert_eq!(classify("plan.DXF", "image/png"), Category::CadLike);
        assert_eq!(classify("plan.dwg", ""), Category::CadLike);
    }

    #[test]
    fn script_extension_wins_over_declared_type() {
        assert_eq!(classify("tool.py", "application/octet-stream"), Category::CodeLike);
        assert_eq!(classify("TOOL.PY", ""), Category::CodeLike);
    }

    #[test]
    fn image_types_require_exact_membership() {
        assert_eq!(classify("photo.jpg", "image/jpeg"), Category::Image);
        assert_eq!(classify("photo.png", "image/png"), Category::Image);
        assert_eq!(classify("photo.tiff", "image/tiff"), Category::Unsupported);
    }

    #[test]
    fn pdf_by_declared_type() {
        assert_eq!(classify("report", "application/pdf"), Category::Pdf);
    }

    #[test]
    fn cad_by_media_type_fallback() {
        // No recognized extension, but a CAD (or generic binary) declared type.
        assert_eq!(classify("drawing", "application/acad"), Category::CadLike);
        assert_eq!(classify("drawing", "application/octet-stream"), Category::CadLike);
    }

    #[test]
    fn script_by_media_type_fallback() {
        assert_eq!(classify("tool", "text/x-python"), Category::CodeLike);
    }

    #[test]
    fn unknown_is_unsupported() {
        assert_eq!(classify("archive.zip", "application/zip"), Category::Unsupported);
        assert_eq!(classify("noext", ""), Category::Unsupported);
        assert!(!classify("noext", "").is_supported());
    }

    #[test]
    fn cad_extension_and_media_type_derivation() {
        assert_eq!(cad_extension("Floor.DWG"), Some("dwg"));
        assert_eq!(cad_extension("floor.dxf"), Some("dxf"));
        assert_eq!(cad_extension("floor.pdf"), None);
        assert_eq!(media_type_for_cad("floor.dwg"), Some("image/vnd.dwg"));
        assert_eq!(media_type_for_cad("floor.dxf"), Some("image/vnd.dxf"));
        assert_eq!(media_type_for_cad("floor.txt"), None);
    }
}
