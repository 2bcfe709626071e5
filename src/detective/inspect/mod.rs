//! Type-specific inspectors and their dispatch.
//!
//! Each inspector is a `Result`-returning function over a path; the
//! dispatcher maps the resolved kind to the right inspector and absorbs
//! failures into the neutral findings form for that kind, so one bad
//! stage never takes down a whole investigation.

pub mod archive;
pub mod executable;
pub mod office;
pub mod sampling;

use super::classify::ResolvedKind;
use crate::report::{ArchiveListing, OfficeProperties, TypeFindings, VersionStrings};
use std::path::Path;
use tracing::warn;

/// Run the inspector matching `kind` and fold any failure into the
/// kind's empty findings. Archive failures keep their user-facing error
/// marker; the underlying cause goes to the log.
pub fn run(kind: ResolvedKind, path: &Path, size_bytes: u64) -> TypeFindings {
    match kind {
        ResolvedKind::Executable => match executable::version_strings(path) {
            Ok(strings) => TypeFindings::VersionStrings(strings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "executable inspection failed");
                TypeFindings::VersionStrings(VersionStrings::default())
            }
        },
        ResolvedKind::OfficeDocument => match office::core_properties(path) {
            Ok(properties) => TypeFindings::OfficeProperties(properties),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "office inspection failed");
                TypeFindings::OfficeProperties(OfficeProperties::default())
            }
        },
        ResolvedKind::Archive => match archive::list_entries(path) {
            Ok(listing) => TypeFindings::ArchiveListing(listing),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "archive inspection failed");
                TypeFindings::ArchiveListing(ArchiveListing {
                    file_list: Vec::new(),
                    error: Some(archive::ARCHIVE_OPEN_ERROR.to_string()),
                })
            }
        },
        ResolvedKind::Other => {
            TypeFindings::InternalStrings(sampling::sample_file(path, size_bytes))
        }
    }
}
