use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use walkdir::{DirEntry, WalkDir};

/// Collect the executable names reachable via a colon-separated search path.
///
/// Each segment of `path_list` is taken as a directory candidate. Candidates
/// that do not exist or are not directories contribute nothing; the same holds
/// for entries whose metadata cannot be read. Only base names are kept, so a
/// name found in several directories of the same list collapses to one entry.
pub fn scan_executables(path_list: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for dir in path_list.split(':') {
        if !Path::new(dir).is_dir() {
            debug!("Skipping search path entry that is not a directory: {dir:?}");
            continue;
        }

        debug!("Scanning directory: {dir}");
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok());

        for entry in entries {
            if is_executable(&entry) {
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }

    debug!("Found {} executables in {path_list:?}", names.len());
    names
}

/// Executability predicate for a single directory entry.
///
/// Symlinks count as executable without being resolved, matching how search
/// paths full of shims behave in practice. Regular files count when any
/// execute permission bit is set. Everything else (directories, fifos,
/// sockets, devices) does not count, and neither does a file whose metadata
/// cannot be read.
fn is_executable(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return true;
    }
    if !file_type.is_file() {
        return false;
    }
    entry.metadata().map(|m| has_execute_bit(&m)).unwrap_or(false)
}

#[cfg(unix)]
fn has_execute_bit(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

// Without POSIX permission metadata the test fails closed.
#[cfg(not(unix))]
fn has_execute_bit(_metadata: &std::fs::Metadata) -> bool {
    false
}
