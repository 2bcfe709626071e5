//! Archive listing for zip-structured containers (zip, apk, jar).

use crate::error::{CasefileError, Result};
use crate::report::ArchiveListing;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Maximum entry names reported per archive
pub const MAX_ARCHIVE_ENTRIES: usize = 10;

/// Error string reported when an archive cannot be read
pub const ARCHIVE_OPEN_ERROR: &str = "failed to open archive";

/// List the first [`MAX_ARCHIVE_ENTRIES`] entry names in central-directory
/// order, appending an overflow-count string when more exist.
pub fn list_entries(path: &Path) -> Result<ArchiveListing> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| CasefileError::Inspection(format!("zip open failed: {}", e)))?;

    let total = archive.len();
    let mut file_list = Vec::with_capacity(total.min(MAX_ARCHIVE_ENTRIES + 1));
    for index in 0..total.min(MAX_ARCHIVE_ENTRIES) {
        let entry = archive.by_index_raw(index).map_err(|e| {
            CasefileError::Inspection(format!("zip entry {} unreadable: {}", index, e))
        })?;
        file_list.push(entry.name().to_string());
    }
    if total > MAX_ARCHIVE_ENTRIES {
        file_list.push(format!("...외 {}개", total - MAX_ARCHIVE_ENTRIES));
    }

    debug!(
        path = %path.display(),
        entries = total,
        listed = file_list.len(),
        "listed archive"
    );
    Ok(ArchiveListing {
        file_list,
        error: None,
    })
}
