//! Origin evidence: where a file likely came from.
//!
//! Two best-effort sources: the `:Zone.Identifier` alternate data stream that
//! browsers write next to NTFS downloads, and Steam workshop identifiers
//! embedded in `steamapps` content paths. Absence of either is normal.

use crate::report::{OriginEvidence, SteamContext};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

// Download origin marker inside a Zone.Identifier stream
static RE_HOST_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"HostUrl=(.+)").expect("valid host url regex"));

// Workshop layout: content\<game_id>\<mod_id>, either separator
static RE_WORKSHOP_IDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"content[/\\](\d+)[/\\](\d+)").expect("valid workshop path regex"));

/// Download URL recorded in the file's `:Zone.Identifier` sidecar stream,
/// on filesystems that expose one.
fn download_source(path: &Path) -> Option<String> {
    let mut sidecar = path.as_os_str().to_os_string();
    sidecar.push(":Zone.Identifier");
    let contents = fs::read(&sidecar).ok()?;
    // Invalid byte sequences are replaced, not dropped.
    let text = String::from_utf8_lossy(&contents);
    let url = RE_HOST_URL.captures(&text)?.get(1)?.as_str().trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// Workshop identifiers recovered from a `steamapps` content path.
fn steam_context(path: &Path) -> Option<SteamContext> {
    let text = path.to_string_lossy();
    if !text.to_lowercase().contains("steamapps") {
        return None;
    }
    let captures = RE_WORKSHOP_IDS.captures(&text)?;
    Some(SteamContext {
        game_id: captures[1].to_string(),
        mod_id: captures[2].to_string(),
    })
}

/// Collect origin evidence for a file.
pub fn collect(path: &Path) -> OriginEvidence {
    let evidence = OriginEvidence {
        download_source: download_source(path),
        steam_context: steam_context(path),
    };
    debug!(
        path = %path.display(),
        has_download_source = evidence.download_source.is_some(),
        has_steam_context = evidence.steam_context.is_some(),
        "collected origin evidence"
    );
    evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_zone_identifier_host_url() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("setup.bin");
        fs::write(&target, b"payload").unwrap();

        let sidecar = dir.path().join("setup.bin:Zone.Identifier");
        fs::write(
            &sidecar,
            b"[ZoneTransfer]\r\nZoneId=3\r\nHostUrl=https://example.com/downloads/setup.bin\r\n",
        )
        .unwrap();

        let evidence = collect(&target);
        assert_eq!(
            evidence.download_source.as_deref(),
            Some("https://example.com/downloads/setup.bin")
        );
    }

    #[test]
    fn test_missing_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("plain.bin");
        fs::write(&target, b"payload").unwrap();
        assert!(collect(&target).download_source.is_none());
    }

    #[test]
    fn test_workshop_context_posix_path() {
        let path = PathBuf::from("/games/steamapps/workshop/content/255710/291758");
        let context = steam_context(&path).unwrap();
        assert_eq!(context.game_id, "255710");
        assert_eq!(context.mod_id, "291758");
    }

    #[test]
    fn test_workshop_context_windows_path() {
        let path = PathBuf::from(
            "C:\\Program Files\\Steam\\SteamApps\\workshop\\content\\4000\\98765\\gun.mdl",
        );
        let context = steam_context(&path).unwrap();
        assert_eq!(context.game_id, "4000");
        assert_eq!(context.mod_id, "98765");
    }

    #[test]
    fn test_non_steam_path_has_no_context() {
        assert!(steam_context(Path::new("/home/user/content/1/2")).is_none());
        assert!(steam_context(Path::new("/games/steamapps/common/app.exe")).is_none());
    }
}
