//! The investigation pipeline.
//!
//! Stages always run in the same order: identity, timestamps, origin,
//! structure, category, type-specific findings, neighborhood, trace link.
//! Only an unreachable target ends an investigation early; every later
//! stage degrades to a neutral value on failure and the pipeline carries
//! on, so one unreadable section never costs the rest of the report.

use super::categories::CategoryTable;
use super::classify::{self, ResolvedKind, SniffedType};
use super::{inspect, neighbors, origin};
use crate::hashing::{self, HASH_SIZE_CEILING};
use crate::report::{
    BasicInfo, EvidenceReport, HashOutcome, InvestigationOutcome, OriginEvidence,
    StructureEvidence, TimeEvidence,
};
use chrono::{DateTime, Local};
use rayon::prelude::*;
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, info, info_span, warn};

/// Format for every timestamp in a report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Investigate one file with the process-wide shared category table.
pub fn run_investigation<P: AsRef<Path>>(path: P) -> InvestigationOutcome {
    run_investigation_with(path, CategoryTable::shared())
}

/// Investigate one file against a caller-supplied category table.
pub fn run_investigation_with<P: AsRef<Path>>(
    path: P,
    table: &CategoryTable,
) -> InvestigationOutcome {
    let path = path.as_ref();
    let span = info_span!("investigation", path = %path.display());
    let _enter = span.enter();

    // Reachability is the only terminal check.
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(error = %e, "target is not reachable");
            return InvestigationOutcome::not_found();
        }
    };
    let size_bytes = metadata.len();

    // Later stages run on the absolutized target, so a bare relative name
    // resolves origin and neighborhood against the working directory.
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let path = absolute.as_path();

    let basic = basic_info(path, size_bytes);
    let times = time_evidence(&metadata);
    let origin = origin::collect(path);

    let sniffed = classify::sniff_file(path);
    if sniffed.disagrees_with_declared() {
        warn!(
            sniffed = %sniffed.mime,
            declared = sniffed.declared_mime.as_deref().unwrap_or_default(),
            "literal extension disagrees with content signature"
        );
    }
    let structure = structure_evidence(path, size_bytes, &sniffed);

    let literal = classify::canonical_ext(&basic.extension);
    let resolved = classify::resolve_extension(&sniffed.extension, &literal);
    let category = table.lookup(resolved);

    let kind = ResolvedKind::from_extension(resolved);
    let findings = inspect::run(kind, path, size_bytes);
    debug!(
        section = findings.section_name(),
        "attached type-specific findings"
    );

    let neighborhood = neighbors::collect(path);
    let trace_link = trace_link(&basic.name, &origin);

    info!(size_bytes, category = %category.kind, "investigation complete");
    InvestigationOutcome::Report(Box::new(EvidenceReport {
        basic_info: basic,
        time_evidence: times,
        origin_evidence: origin,
        structure_evidence: structure,
        category_info: category,
        findings,
        neighborhood,
        trace_link,
    }))
}

/// Investigate a batch of files in parallel.
///
/// Outcomes keep the input order, so the caller can zip them back to the
/// paths it passed in.
pub fn run_investigations<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<InvestigationOutcome> {
    paths
        .par_iter()
        .map(|path| run_investigation(path.as_ref()))
        .collect()
}

/// Identity facts from the absolutized target: name, path, exact size,
/// literal extension.
fn basic_info(path: &Path, size_bytes: u64) -> BasicInfo {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    BasicInfo {
        name,
        path: path.to_string_lossy().into_owned(),
        size_bytes,
        extension,
    }
}

/// Filesystem timestamps. A timestamp the platform cannot supply stays null.
fn time_evidence(metadata: &Metadata) -> TimeEvidence {
    TimeEvidence {
        created: metadata.created().ok().map(format_local),
        modified: metadata.modified().ok().map(format_local),
        last_accessed: metadata.accessed().ok().map(format_local),
    }
}

fn format_local(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Content identity plus the hash outcome for the reported size.
///
/// Hashing keys off `size_bytes` alone: at or above the ceiling it is
/// skipped outright, below it a failure downgrades to the failed marker.
fn structure_evidence(path: &Path, size_bytes: u64, sniffed: &SniffedType) -> StructureEvidence {
    let file_hash_sha256 = if size_bytes < HASH_SIZE_CEILING {
        match hashing::sha256_file(path) {
            Ok(digest) => HashOutcome::Computed(digest),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "content hash failed");
                HashOutcome::Failed
            }
        }
    } else {
        debug!(size_bytes, "content hash skipped for size");
        HashOutcome::Skipped
    };
    StructureEvidence {
        real_type: sniffed.mime.clone(),
        guessed_ext: sniffed.extension.clone(),
        file_hash_sha256,
    }
}

/// Web-search URL over the file name, widened with the game id when the
/// file sits under a workshop path.
fn trace_link(name: &str, origin: &OriginEvidence) -> String {
    let mut query = name.to_string();
    if let Some(steam) = &origin.steam_context {
        query.push_str(" steam ");
        query.push_str(&steam.game_id);
    }
    format!("https://www.google.com/search?q={}", query)
}
