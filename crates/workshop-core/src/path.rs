//! Normalized path handling for cross-platform consistency
//!
//! Package names are derived from paths, so the derivation must see the
//! same separator on every platform. All paths are held with forward
//! slashes internally and converted to native form only at I/O boundaries.

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next()
    }

    /// Express this path relative to `root` by stripping the root prefix
    /// and the separator that follows it.
    ///
    /// Returns `None` if this path does not live under `root`.
    pub fn relative_to(&self, root: &NormalizedPath) -> Option<NormalizedPath> {
        let root_str = root.inner.trim_end_matches('/');
        let rest = self.inner.strip_prefix(root_str)?;
        let rest = rest.strip_prefix('/')?;
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            inner: rest.to_string(),
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new(r"exercises\01-goo\problem.01-great");
        assert_eq!(path.as_str(), "exercises/01-goo/problem.01-great");
    }

    #[test]
    fn test_relative_to_strips_root_and_separator() {
        let root = NormalizedPath::new("/repo");
        let path = NormalizedPath::new("/repo/exercises/01-goo");
        let relative = path.relative_to(&root).unwrap();
        assert_eq!(relative.as_str(), "exercises/01-goo");
    }

    #[test]
    fn test_relative_to_outside_root() {
        let root = NormalizedPath::new("/repo");
        let path = NormalizedPath::new("/elsewhere/exercises");
        assert!(path.relative_to(&root).is_none());
    }

    #[test]
    fn test_relative_to_trailing_slash_root() {
        let root = NormalizedPath::new("/repo/");
        let path = NormalizedPath::new("/repo/examples/demo");
        let relative = path.relative_to(&root).unwrap();
        assert_eq!(relative.as_str(), "examples/demo");
    }

    #[test]
    fn test_join_avoids_double_separator() {
        let path = NormalizedPath::new("/repo/");
        assert_eq!(path.join("tests").as_str(), "/repo/tests");
    }

    #[test]
    fn test_file_name() {
        let path = NormalizedPath::new("/repo/exercises/solution.01-great");
        assert_eq!(path.file_name(), Some("solution.01-great"));
    }
}
