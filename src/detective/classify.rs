//! Signature-based type classification.
//!
//! Uses `infer` for content-based detection over a bounded prefix and
//! `mime_guess` for the MIME type the literal extension declares, so callers
//! can see when a file's name disagrees with its contents.

use super::io::{read_prefix, MAX_SNIFF_SIZE};
use std::path::Path;
use tracing::debug;

/// Marker for an unrecognized MIME type or extension.
pub const UNKNOWN: &str = "unknown";

/// Result of sniffing a file's leading bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffedType {
    /// MIME type from the matched signature, or `"unknown"`.
    pub mime: String,
    /// Canonical extension from the matched signature, or `"unknown"`.
    pub extension: String,
    /// MIME type the literal extension declares, when it declares one.
    pub declared_mime: Option<String>,
}

impl SniffedType {
    /// Sniff result for content no signature matched.
    pub fn unknown() -> Self {
        Self {
            mime: UNKNOWN.to_string(),
            extension: UNKNOWN.to_string(),
            declared_mime: None,
        }
    }

    /// True when no signature matched.
    pub fn is_unknown(&self) -> bool {
        self.extension == UNKNOWN
    }

    /// True when the signature and the literal extension point at different
    /// MIME types. Inconclusive sniffs never disagree.
    pub fn disagrees_with_declared(&self) -> bool {
        match &self.declared_mime {
            Some(declared) => !self.is_unknown() && declared != &self.mime,
            None => false,
        }
    }
}

/// Identify a type from leading bytes. Returns `(mime, extension)`, both
/// `"unknown"` when no signature matches (plain text, unrecognized binaries).
pub fn sniff_bytes(data: &[u8]) -> (String, String) {
    match infer::get(data) {
        Some(kind) => {
            debug!(
                mime = kind.mime_type(),
                extension = kind.extension(),
                "signature matched"
            );
            (kind.mime_type().to_string(), kind.extension().to_string())
        }
        None => {
            debug!(bytes = data.len(), "no signature matched");
            (UNKNOWN.to_string(), UNKNOWN.to_string())
        }
    }
}

/// MIME type implied by a path's literal extension, when it has one.
pub fn declared_mime(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    mime_guess::from_ext(extension)
        .first()
        .map(|m| m.to_string())
}

/// Sniff a file from a bounded prefix of its contents.
///
/// An unreadable file sniffs as unknown rather than failing; the declared
/// MIME type comes from the path alone and survives a failed read.
pub fn sniff_file<P: AsRef<Path>>(path: P) -> SniffedType {
    let path = path.as_ref();
    match read_prefix(path, MAX_SNIFF_SIZE) {
        Ok(prefix) => {
            let (mime, extension) = sniff_bytes(&prefix);
            SniffedType {
                mime,
                extension,
                declared_mime: declared_mime(path),
            }
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "sniff read failed");
            SniffedType {
                declared_mime: declared_mime(path),
                ..SniffedType::unknown()
            }
        }
    }
}

/// Canonical category lookup key: lowercased, dots stripped.
pub fn canonical_ext(extension: &str) -> String {
    extension.replace('.', "").to_lowercase()
}

/// Extension the category lookup keys on: the sniffed extension wins unless
/// the sniff was inconclusive, then the literal extension applies.
pub fn resolve_extension<'a>(sniffed: &'a str, literal: &'a str) -> &'a str {
    if sniffed == UNKNOWN {
        literal
    } else {
        sniffed
    }
}

/// Closed dispatch for type-specific inspection.
///
/// New kinds are added by extending this enumeration; `Other` is the
/// mandatory default and selects content sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    Executable,
    OfficeDocument,
    Archive,
    Other,
}

impl ResolvedKind {
    /// Classify a canonical (lowercased, dot-free) extension.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "exe" | "dll" | "sys" | "msi" => ResolvedKind::Executable,
            "pptx" | "docx" | "xlsx" => ResolvedKind::OfficeDocument,
            "zip" | "apk" | "jar" => ResolvedKind::Archive,
            _ => ResolvedKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
    const ZIP_MAGIC: &[u8] = b"PK\x03\x04\x14\x00\x00\x00\x00\x00";

    #[test]
    fn test_sniff_bytes_png() {
        let (mime, ext) = sniff_bytes(PNG_MAGIC);
        assert_eq!(mime, "image/png");
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_sniff_bytes_zip() {
        let (mime, ext) = sniff_bytes(ZIP_MAGIC);
        assert_eq!(mime, "application/zip");
        assert_eq!(ext, "zip");
    }

    #[test]
    fn test_sniff_bytes_plain_text_is_unknown() {
        let (mime, ext) = sniff_bytes(b"just some plain text\n");
        assert_eq!(mime, UNKNOWN);
        assert_eq!(ext, UNKNOWN);
    }

    #[test]
    fn test_sniff_file_reads_prefix() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        file.write_all(PNG_MAGIC).unwrap();
        let sniffed = sniff_file(file.path());
        assert_eq!(sniffed.extension, "png");
        assert_eq!(sniffed.mime, "image/png");
        assert!(!sniffed.is_unknown());
        assert_eq!(sniffed.declared_mime.as_deref(), Some("image/png"));
        assert!(!sniffed.disagrees_with_declared());
    }

    #[test]
    fn test_sniff_file_detects_disagreement() {
        // ZIP bytes behind a .txt name.
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        file.write_all(ZIP_MAGIC).unwrap();
        let sniffed = sniff_file(file.path());
        assert_eq!(sniffed.extension, "zip");
        assert!(sniffed.disagrees_with_declared());
    }

    #[test]
    fn test_sniff_file_missing_is_unknown() {
        let sniffed = sniff_file("/no/such/file.txt");
        assert!(sniffed.is_unknown());
        assert_eq!(sniffed.mime, UNKNOWN);
        // The declared MIME comes from the path alone and survives the
        // failed read.
        assert_eq!(sniffed.declared_mime.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_canonical_ext() {
        assert_eq!(canonical_ext(".TXT"), "txt");
        assert_eq!(canonical_ext("Exe"), "exe");
        assert_eq!(canonical_ext(""), "");
    }

    #[test]
    fn test_resolve_extension_prefers_sniffed() {
        assert_eq!(resolve_extension("png", "txt"), "png");
        assert_eq!(resolve_extension(UNKNOWN, "txt"), "txt");
        assert_eq!(resolve_extension(UNKNOWN, ""), "");
    }

    #[test]
    fn test_resolved_kind_dispatch() {
        assert_eq!(ResolvedKind::from_extension("exe"), ResolvedKind::Executable);
        assert_eq!(ResolvedKind::from_extension("dll"), ResolvedKind::Executable);
        assert_eq!(ResolvedKind::from_extension("msi"), ResolvedKind::Executable);
        assert_eq!(
            ResolvedKind::from_extension("docx"),
            ResolvedKind::OfficeDocument
        );
        assert_eq!(ResolvedKind::from_extension("apk"), ResolvedKind::Archive);
        assert_eq!(ResolvedKind::from_extension("jar"), ResolvedKind::Archive);
        assert_eq!(ResolvedKind::from_extension("txt"), ResolvedKind::Other);
        assert_eq!(ResolvedKind::from_extension(""), ResolvedKind::Other);
    }
}
