//! Config loading helpers.

use std::path::{Path, PathBuf};

/// Search for the config file upward from the current directory.
///
/// This lets subcommands run from anywhere inside the project tree,
/// e.g. `v8dev build` from within `src/blog/`.
pub fn find_config_file(name: &Path) -> Option<PathBuf> {
    // Absolute paths are used as-is (-C /path/to/v8dev.toml)
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_file_missing() {
        assert!(find_config_file(Path::new("definitely-not-a-real-config.toml")).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v8dev.toml");
        std::fs::write(&path, "[site]\n").unwrap();
        assert_eq!(find_config_file(&path), Some(path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert!(find_config_file(&path).is_none());
    }
}
