//! Content sampling: bounded extraction of printable text.
//!
//! Small files are decoded whole; anything larger (or unreadable as text)
//! falls back to scanning a bounded raw sample for printable-character runs.

use crate::detective::io::{read_prefix, MAX_SAMPLE_SIZE, WHOLE_TEXT_CUTOFF};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::path::Path;
use tracing::debug;

/// Maximum printable runs reported per sample
pub const MAX_STRING_MATCHES: usize = 20;

/// Runs must still exceed this length after trimming
const MIN_TRIMMED_LEN: usize = 3;

// ASCII letters, digits, whitespace, and _-.() in runs of four or more
static RE_PRINTABLE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)[a-zA-Z0-9\s_\-.()]{4,}").expect("valid printable run regex")
});

/// Extract printable runs from raw bytes.
///
/// At most [`MAX_STRING_MATCHES`] matches are considered; each is trimmed and
/// kept only when the trimmed text still exceeds three characters.
pub fn extract_runs(data: &[u8]) -> Vec<String> {
    let mut runs = Vec::new();
    for m in RE_PRINTABLE_RUN.find_iter(data).take(MAX_STRING_MATCHES) {
        // The character class is pure ASCII, so the match always decodes.
        let text = String::from_utf8_lossy(m.as_bytes());
        let trimmed = text.trim();
        if trimmed.len() > MIN_TRIMMED_LEN {
            runs.push(trimmed.to_string());
        }
    }
    runs
}

/// Sample a file's content according to the size policy.
///
/// Files under [`WHOLE_TEXT_CUTOFF`] are decoded whole as UTF-8 with invalid
/// sequences replaced by U+FFFD, yielding a single-element sample. Larger
/// files, or files whose whole-text read fails, are scanned for printable
/// runs over at most [`MAX_SAMPLE_SIZE`] bytes. An unreadable file samples
/// as empty.
pub fn sample_file(path: &Path, size_bytes: u64) -> Vec<String> {
    if size_bytes < WHOLE_TEXT_CUTOFF {
        match read_prefix(path, WHOLE_TEXT_CUTOFF as usize) {
            Ok(bytes) => {
                let (text, had_errors) =
                    encoding_rs::UTF_8.decode_without_bom_handling(&bytes);
                if had_errors {
                    debug!(
                        path = %path.display(),
                        "whole-text decode replaced invalid sequences"
                    );
                }
                return vec![text.into_owned()];
            }
            Err(e) => {
                debug!(
                    path = %path.display(),
                    error = %e,
                    "whole-text read failed, falling back to run extraction"
                );
            }
        }
    }

    match read_prefix(path, MAX_SAMPLE_SIZE) {
        Ok(bytes) => extract_runs(&bytes),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "sample read failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_small_text_file_is_sampled_whole() {
        let mut file = NamedTempFile::new().unwrap();
        let content = "fifty bytes of perfectly ordinary training text..";
        file.write_all(content.as_bytes()).unwrap();

        let sample = sample_file(file.path(), content.len() as u64);
        assert_eq!(sample, vec![content.to_string()]);
    }

    #[test]
    fn test_invalid_sequences_are_replaced_not_dropped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ok\xff\xfeok").unwrap();

        let sample = sample_file(file.path(), 6);
        assert_eq!(sample.len(), 1);
        assert_eq!(sample[0], "ok\u{FFFD}\u{FFFD}ok");
    }

    #[test]
    fn test_embedded_ascii_run_is_extracted() {
        let mut data = vec![0x00, 0x01, 0x02, 0x7f];
        data.extend_from_slice(b"HELLO_WORLD");
        data.extend_from_slice(&[0xff, 0xfe, 0x03]);

        let runs = extract_runs(&data);
        assert!(runs.contains(&"HELLO_WORLD".to_string()));
    }

    #[test]
    fn test_large_file_uses_run_extraction() {
        let mut file = NamedTempFile::new().unwrap();
        let mut data = vec![0u8; 16 * 1024];
        data[512..523].copy_from_slice(b"HELLO_WORLD");
        file.write_all(&data).unwrap();

        let sample = sample_file(file.path(), data.len() as u64);
        assert!(sample.contains(&"HELLO_WORLD".to_string()));
    }

    #[test]
    fn test_match_cap_applies() {
        let mut data = Vec::new();
        for i in 0..40 {
            data.extend_from_slice(format!("marker{:02}", i).as_bytes());
            data.push(0x00);
        }
        let runs = extract_runs(&data);
        assert_eq!(runs.len(), MAX_STRING_MATCHES);
    }

    #[test]
    fn test_short_and_whitespace_runs_are_dropped() {
        // "abc" is under the run length; "  a  " trims to one character.
        let data = b"abc\x00  a  \x00abcd\x00";
        let runs = extract_runs(data);
        assert_eq!(runs, vec!["abcd".to_string()]);
    }

    #[test]
    fn test_unreadable_file_samples_empty() {
        let sample = sample_file(Path::new("/no/such/file.bin"), 100);
        assert!(sample.is_empty());
    }
}
