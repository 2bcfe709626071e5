//! Evidence report types for investigation results.
//!
//! An [`EvidenceReport`] is the sole output of one investigation: a fixed set
//! of evidence sections built stage by stage and returned whole. Sections are
//! plain data so the report serializes to stable JSON key names and
//! round-trips without loss.

mod outcome;

pub use outcome::{ErrorReport, InvestigationOutcome};

use crate::error::{CasefileError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized form of a hash skipped for size.
pub const HASH_SKIPPED_MARKER: &str = "Skipped (Too Large)";
/// Serialized form of a hash that could not be computed.
pub const HASH_FAILED_MARKER: &str = "Error";

/// Identity of the investigated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// File name without directory components.
    pub name: String,
    /// Absolute path to the file.
    pub path: String,
    pub size_bytes: u64,
    /// Literal extension, lowercased, leading dot kept. Empty when none.
    pub extension: String,
}

/// Filesystem timestamps, formatted as local-time strings.
///
/// A timestamp the platform cannot supply is `None` and serializes as null;
/// the keys are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvidence {
    pub created: Option<String>,
    pub modified: Option<String>,
    pub last_accessed: Option<String>,
}

/// Steam workshop identifiers recovered from the file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamContext {
    pub game_id: String,
    pub mod_id: String,
}

/// Where the file likely came from.
///
/// Both fields are best-effort; absence is normal and serializes as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginEvidence {
    /// Download URL recovered from a Zone.Identifier sidecar stream.
    pub download_source: Option<String>,
    /// Workshop context recovered from a steamapps content path.
    pub steam_context: Option<SteamContext>,
}

/// Outcome of the content-hash stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// Hex SHA-256 digest of the file contents.
    Computed(String),
    /// File met the size ceiling; hashing was skipped, not attempted.
    Skipped,
    /// Hashing was attempted and failed (unreadable file).
    Failed,
}

impl Serialize for HashOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            HashOutcome::Computed(digest) => serializer.serialize_str(digest),
            HashOutcome::Skipped => serializer.serialize_str(HASH_SKIPPED_MARKER),
            HashOutcome::Failed => serializer.serialize_str(HASH_FAILED_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for HashOutcome {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            HASH_SKIPPED_MARKER => HashOutcome::Skipped,
            HASH_FAILED_MARKER => HashOutcome::Failed,
            _ => HashOutcome::Computed(s),
        })
    }
}

/// What the file actually is, independent of its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureEvidence {
    /// Sniffed MIME type, or `"unknown"` when no signature matched.
    pub real_type: String,
    /// Sniffed canonical extension, or `"unknown"`.
    pub guessed_ext: String,
    pub file_hash_sha256: HashOutcome,
}

/// Category lookup result for the resolved extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category label, `"unknown"` when the table has no entry.
    #[serde(rename = "type")]
    pub kind: String,
    pub found: bool,
}

/// Version-information strings recovered from an executable's resources.
///
/// Only the allow-listed fields are kept; absent fields are omitted from the
/// serialized form. Key names match the PE version-string names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStrings {
    #[serde(
        rename = "CompanyName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub company_name: Option<String>,
    #[serde(
        rename = "FileDescription",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub file_description: Option<String>,
    #[serde(
        rename = "OriginalFilename",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub original_filename: Option<String>,
    #[serde(
        rename = "ProductName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub product_name: Option<String>,
}

impl VersionStrings {
    /// True when no allow-listed field was recovered.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.file_description.is_none()
            && self.original_filename.is_none()
            && self.product_name.is_none()
    }
}

/// Core document properties recovered from an office container.
///
/// Fields are present only when the corresponding element exists with text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeProperties {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
}

/// Capped listing of archive entry names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveListing {
    /// First entries, plus an overflow-count string when the cap was hit.
    pub file_list: Vec<String>,
    /// Set when the archive could not be opened; `file_list` stays empty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Type-specific findings; exactly one variant per report.
///
/// The variant is chosen by the resolved kind, and the serialized key matches
/// the section name of the matching evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeFindings {
    #[serde(rename = "developer_confession")]
    VersionStrings(VersionStrings),
    #[serde(rename = "office_metadata")]
    OfficeProperties(OfficeProperties),
    #[serde(rename = "zip_contents")]
    ArchiveListing(ArchiveListing),
    #[serde(rename = "internal_strings")]
    InternalStrings(Vec<String>),
}

impl TypeFindings {
    /// Serialized key name for this variant, for logging.
    pub fn section_name(&self) -> &'static str {
        match self {
            TypeFindings::VersionStrings(_) => "developer_confession",
            TypeFindings::OfficeProperties(_) => "office_metadata",
            TypeFindings::ArchiveListing(_) => "zip_contents",
            TypeFindings::InternalStrings(_) => "internal_strings",
        }
    }
}

/// Structured result of one investigation.
///
/// Append-only while the pipeline runs; immutable once returned. Every
/// section key is always present except the flattened type-specific one,
/// which contributes exactly one of its four keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceReport {
    pub basic_info: BasicInfo,
    pub time_evidence: TimeEvidence,
    pub origin_evidence: OriginEvidence,
    pub structure_evidence: StructureEvidence,
    pub category_info: CategoryInfo,
    #[serde(flatten)]
    pub findings: TypeFindings,
    /// Up to five sibling file names, plus an overflow marker.
    pub neighborhood: Vec<String>,
    /// Web-search URL for the file name (and game id when present).
    pub trace_link: String,
}

impl EvidenceReport {
    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CasefileError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Serialize to an indented JSON string for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CasefileError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Deserialize from a JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| CasefileError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}
