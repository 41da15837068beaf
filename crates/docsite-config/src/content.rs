//! Content root abstraction.
//!
//! [`ContentRoot`] answers whether a document exists, so validation can run
//! against the filesystem ([`FsContentRoot`]) or, in tests, an in-memory set
//! of paths (`MockContentRoot`, behind the `mock` feature).

use std::path::{Path, PathBuf};

/// Directory tree holding the documents a configuration references.
///
/// All paths are relative to the root (e.g., `code/vue/vuex.md`).
pub trait ContentRoot: Send + Sync {
    /// Check if a document exists at the given relative path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &Path) -> bool;
}

/// Content root on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsContentRoot {
    root: PathBuf,
}

impl FsContentRoot {
    /// Create a content root at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this content root reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentRoot for FsContentRoot {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentRoot;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    use super::ContentRoot;

    /// In-memory content root for testing.
    ///
    /// ```ignore
    /// use docsite_config::MockContentRoot;
    ///
    /// let root = MockContentRoot::new()
    ///     .with_document("code/vue/vuex.md")
    ///     .with_document("books/literature/lostParadise.md");
    /// ```
    #[derive(Debug, Default)]
    pub struct MockContentRoot {
        documents: HashSet<PathBuf>,
    }

    impl MockContentRoot {
        /// Create an empty content root.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a document at the given relative path.
        #[must_use]
        pub fn with_document(mut self, path: impl Into<PathBuf>) -> Self {
            self.documents.insert(path.into());
            self
        }

        /// Remove a document, if present.
        #[must_use]
        pub fn without_document(mut self, path: impl AsRef<Path>) -> Self {
            self.documents.remove(path.as_ref());
            self
        }
    }

    impl<P: Into<PathBuf>> FromIterator<P> for MockContentRoot {
        fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
            Self {
                documents: iter.into_iter().map(Into::into).collect(),
            }
        }
    }

    impl ContentRoot for MockContentRoot {
        fn exists(&self, path: &Path) -> bool {
            self.documents.contains(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_fs_content_root_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("code/vue")).unwrap();
        fs::write(temp_dir.path().join("code/vue/vuex.md"), "# Vuex").unwrap();

        let root = FsContentRoot::new(temp_dir.path());
        assert_eq!(root.root(), temp_dir.path());
        assert!(root.exists(Path::new("code/vue/vuex.md")));
        assert!(!root.exists(Path::new("code/vue/vue-router.md")));
    }

    #[test]
    fn test_fs_content_root_directory_is_not_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("code/vue.md")).unwrap();

        let root = FsContentRoot::new(temp_dir.path());
        assert!(!root.exists(Path::new("code/vue.md")));
    }

    #[test]
    fn test_mock_content_root() {
        let root = MockContentRoot::new()
            .with_document("code/vue/vuex.md")
            .with_document("README.md")
            .without_document("README.md");

        assert!(root.exists(Path::new("code/vue/vuex.md")));
        assert!(!root.exists(Path::new("README.md")));
    }

    #[test]
    fn test_mock_content_root_from_iter() {
        let root: MockContentRoot = ["a.md", "b/c.md"].into_iter().collect();
        assert!(root.exists(Path::new("b/c.md")));
        assert!(!root.exists(Path::new("b.md")));
    }
}
