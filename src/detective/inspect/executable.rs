//! Executable inspection: version-information strings from PE resources.
//!
//! Only a fixed allow-list of fields is reported (company, description,
//! original filename, product). String values decode from UTF-16 with
//! invalid sequences replaced.

use crate::error::{CasefileError, Result};
use crate::report::VersionStrings;
use pelite::resources::Resources;
use pelite::FileMap;
use std::panic;
use std::path::Path;
use tracing::debug;

/// Extract allow-listed version strings from a PE image on disk.
///
/// Non-PE files and images without version resources are errors for the
/// dispatcher to absorb. Parser panics on malformed images are contained
/// here and surface as inspection errors.
pub fn version_strings(path: &Path) -> Result<VersionStrings> {
    let map = FileMap::open(path)?;
    let bytes: &[u8] = map.as_ref();
    match panic::catch_unwind(|| extract(bytes)) {
        Ok(outcome) => outcome,
        Err(_) => Err(CasefileError::Inspection(
            "panic while parsing PE image".to_string(),
        )),
    }
}

fn extract(bytes: &[u8]) -> Result<VersionStrings> {
    let resources = find_resources(bytes)?;
    let version_info = resources
        .version_info()
        .map_err(|e| CasefileError::Inspection(format!("no version info: {}", e)))?;
    let lang = version_info
        .translation()
        .first()
        .copied()
        .ok_or_else(|| CasefileError::Inspection("version info has no translation".to_string()))?;

    let strings = VersionStrings {
        company_name: version_info.value(lang, "CompanyName"),
        file_description: version_info.value(lang, "FileDescription"),
        original_filename: version_info.value(lang, "OriginalFilename"),
        product_name: version_info.value(lang, "ProductName"),
    };
    debug!(found_any = !strings.is_empty(), "read PE version strings");
    Ok(strings)
}

/// Locate the resource directory, trying PE32+ first and falling back to
/// PE32 when the optional-header magic says so.
fn find_resources(bytes: &[u8]) -> Result<Resources<'_>> {
    use pelite::pe32::{Pe as _, PeFile as PeFile32};
    use pelite::pe64::{Pe as _, PeFile as PeFile64};

    let resources = match PeFile64::from_bytes(bytes) {
        Ok(file) => file.resources(),
        Err(pelite::Error::PeMagic) => PeFile32::from_bytes(bytes)
            .map_err(|e| CasefileError::Inspection(format!("not a PE image: {}", e)))?
            .resources(),
        Err(e) => {
            return Err(CasefileError::Inspection(format!("not a PE image: {}", e)));
        }
    };
    resources
        .map_err(|e| CasefileError::Inspection(format!("resource directory unavailable: {}", e)))
}
