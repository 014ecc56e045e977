//! Shared-file path resolution for the AWS config and credentials files.

use std::path::{Path, PathBuf};

/// Leading character that stands for the home directory in path overrides.
pub const HOME_SIGIL: char = '~';

/// Resolve the location of a shared AWS file.
///
/// An explicit override wins; a leading `~` in it is replaced by `home`.
/// Without an override the default relative path is joined onto `home`.
/// Returns `None` when there is neither an override nor a home directory.
pub fn resolve_file_path(
    override_path: Option<&str>,
    default_relative: &str,
    home: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(raw) = override_path.filter(|value| !value.is_empty()) {
        if let Some(rest) = raw.strip_prefix(HOME_SIGIL) {
            let home = home.unwrap_or_else(|| Path::new(""));
            return Some(join_remainder(home, rest));
        }
        return Some(PathBuf::from(raw));
    }

    home.map(|home| home.join(default_relative))
}

fn join_remainder(home: &Path, rest: &str) -> PathBuf {
    // `Path::join` replaces the base when the remainder is absolute.
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        return home.to_path_buf();
    }
    home.join(rest)
}
