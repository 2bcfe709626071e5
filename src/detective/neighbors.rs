//! Neighborhood evidence: sibling files in the target's directory.

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Maximum sibling names reported
pub const MAX_NEIGHBORS: usize = 5;

/// Marker appended when more siblings exist than the cap allows
pub const OVERFLOW_MARKER: &str = "...";

/// List up to [`MAX_NEIGHBORS`] sibling names, excluding the target itself,
/// with an overflow marker when more siblings exist. A bare file name lists
/// the working directory; a listing failure yields an empty list.
pub fn collect(path: &Path) -> Vec<String> {
    match siblings(path) {
        Ok(names) => names,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "neighborhood listing failed");
            Vec::new()
        }
    }
}

fn siblings(path: &Path) -> io::Result<Vec<String>> {
    let parent = match path.parent() {
        Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
        Some(dir) => dir,
        None => return Ok(Vec::new()),
    };
    let own_name = path.file_name();

    let mut names = Vec::new();
    let mut overflowed = false;
    for entry in fs::read_dir(parent)? {
        let name = entry?.file_name();
        if Some(name.as_os_str()) == own_name {
            continue;
        }
        if names.len() < MAX_NEIGHBORS {
            names.push(name.to_string_lossy().into_owned());
        } else {
            overflowed = true;
            break;
        }
    }
    if overflowed {
        names.push(OVERFLOW_MARKER.to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dir_with_files(count: usize) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..count {
            fs::write(dir.path().join(format!("file_{:02}.txt", i)), b"x").unwrap();
        }
        let target = dir.path().join("file_00.txt");
        (dir, target)
    }

    #[test]
    fn test_eight_files_caps_at_five_with_marker() {
        let (_dir, target) = make_dir_with_files(8);
        let names = collect(&target);
        assert_eq!(names.len(), MAX_NEIGHBORS + 1);
        assert_eq!(names.last().map(String::as_str), Some(OVERFLOW_MARKER));
        assert!(!names.contains(&"file_00.txt".to_string()));
    }

    #[test]
    fn test_alone_in_directory_is_empty() {
        let (_dir, target) = make_dir_with_files(1);
        assert!(collect(&target).is_empty());
    }

    #[test]
    fn test_exactly_five_siblings_has_no_marker() {
        let (_dir, target) = make_dir_with_files(6);
        let names = collect(&target);
        assert_eq!(names.len(), MAX_NEIGHBORS);
        assert!(!names.contains(&OVERFLOW_MARKER.to_string()));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(collect(Path::new("/no/such/dir/file.txt")).is_empty());
    }

    #[test]
    fn test_bare_file_name_lists_working_directory() {
        // A bare name has an empty parent; siblings come from the working
        // directory, which under the test harness is the package root.
        let names = collect(Path::new("no_such_file_here.txt"));
        assert!(!names.is_empty());
    }
}
