//! Path manipulation utilities

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the user's home directory
///
/// Paths without a leading `~` component, and any path when no home
/// directory can be determined, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }

    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(path)
}

/// Normalize a path by resolving `.` and `..` components lexically
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep leading '..' components
                if matches!(components.last(), None | Some(Component::ParentDir)) {
                    components.push(component);
                } else {
                    components.pop();
                }
            }
            _ => {
                components.push(component);
            }
        }
    }

    components.iter().collect()
}

/// Check whether two paths refer to the same location after normalization
#[must_use]
pub fn same_path(left: &Path, right: &Path) -> bool {
    normalize_path(left) == normalize_path(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("../data/dataset.csv"), PathBuf::from("../data/dataset.csv"));
        assert_eq!(expand_tilde("/tmp/~file.csv"), PathBuf::from("/tmp/~file.csv"));
    }

    #[test]
    fn expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/data.csv"), home.join("data.csv"));
        }
    }

    #[test]
    fn normalize_keeps_leading_parent_dirs() {
        assert_eq!(
            normalize_path(Path::new("../data/./x/../dataset.csv")),
            PathBuf::from("../data/dataset.csv")
        );
        assert_eq!(normalize_path(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn same_path_ignores_dot_segments() {
        assert!(same_path(Path::new("./data/a.csv"), Path::new("data/a.csv")));
        assert!(!same_path(Path::new("data/a.csv"), Path::new("data/b.csv")));
    }
}
