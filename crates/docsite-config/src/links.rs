//! Link classification and document resolution.
//!
//! Site paths map to markdown files under the content root:
//!
//! | Site path              | Candidate files                          |
//! |------------------------|------------------------------------------|
//! | `/` or `/articles/`    | `README.md`, `index.md` in the directory |
//! | `/code/vue/vuex`       | `code/vue/vuex.md`                       |
//! | `/code/vue/vuex.html`  | `code/vue/vuex.md`                       |
//! | `/code/vue/vuex.md`    | `code/vue/vuex.md`                       |
//!
//! `#fragment` and `?query` suffixes are ignored. `.` and `..` segments are
//! resolved before lookup; a path that climbs above the content root has no
//! candidates.

use std::path::{Component, Path, PathBuf};

/// Link prefixes that point outside the site.
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// Files that serve a directory path, in lookup order.
const INDEX_FILES: &[&str] = &["README.md", "index.md"];

/// Whether a link points outside the site.
#[must_use]
pub fn is_external(link: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| link.starts_with(prefix))
}

/// Site path of a sidebar child.
///
/// Children are relative to their sidebar key unless they start with `/`.
pub(crate) fn sidebar_child_path(prefix: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_owned()
    } else {
        format!("{prefix}{child}")
    }
}

/// Content-root relative files that could serve a site path.
///
/// Empty when the path climbs above the content root.
pub(crate) fn document_candidates(site_path: &str) -> Vec<PathBuf> {
    let end = site_path.find(['#', '?']).unwrap_or(site_path.len());
    let relative = site_path[..end].trim_start_matches('/');

    let is_directory = relative.is_empty()
        || relative.ends_with('/')
        || relative.rsplit('/').next().is_some_and(|last| last == "." || last == "..");

    if is_directory {
        let Some(dir) = normalize(relative) else {
            return Vec::new();
        };
        return INDEX_FILES.iter().map(|index| dir.join(index)).collect();
    }

    let file = if let Some(stem) = relative.strip_suffix(".html") {
        format!("{stem}.md")
    } else if relative.ends_with(".md") {
        relative.to_owned()
    } else {
        format!("{relative}.md")
    };
    normalize(&file).into_iter().collect()
}

/// Resolve `.` and `..` lexically. `None` if the path leaves the root.
fn normalize(relative: &str) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Some(normalized)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/theniceangel"));
        assert!(is_external("http://example.com"));
        assert!(is_external("mailto:someone@example.com"));
        assert!(is_external("tel:+100"));
        assert!(!is_external("/code/vue/vuex"));
        assert!(!is_external("vue/vuex.md"));
        assert!(!is_external("https-guide.md"));
    }

    #[test]
    fn test_sidebar_child_path() {
        assert_eq!(sidebar_child_path("/code/", "vue/vuex.md"), "/code/vue/vuex.md");
        assert_eq!(sidebar_child_path("/code/", ""), "/code/");
        assert_eq!(sidebar_child_path("/code/", "/shared/faq"), "/shared/faq");
    }

    #[test]
    fn test_candidates_markdown_file() {
        assert_eq!(
            document_candidates("/code/vue/vuex.md"),
            paths(&["code/vue/vuex.md"])
        );
    }

    #[test]
    fn test_candidates_extensionless() {
        assert_eq!(
            document_candidates("/books/literature/lostParadise"),
            paths(&["books/literature/lostParadise.md"])
        );
    }

    #[test]
    fn test_candidates_html() {
        assert_eq!(
            document_candidates("/articles/index.html"),
            paths(&["articles/index.md"])
        );
    }

    #[test]
    fn test_candidates_directory() {
        assert_eq!(
            document_candidates("/articles/"),
            paths(&["articles/README.md", "articles/index.md"])
        );
        assert_eq!(document_candidates("/"), paths(&["README.md", "index.md"]));
    }

    #[test]
    fn test_candidates_strip_fragment_and_query() {
        assert_eq!(
            document_candidates("/code/async/promise#then"),
            paths(&["code/async/promise.md"])
        );
        assert_eq!(
            document_candidates("/sources/?tab=all"),
            paths(&["sources/README.md", "sources/index.md"])
        );
    }

    #[test]
    fn test_candidates_resolve_parent_segments() {
        assert_eq!(
            document_candidates("/code/../books/x.md"),
            paths(&["books/x.md"])
        );
        assert_eq!(
            document_candidates("/code/./vue/../async/co"),
            paths(&["code/async/co.md"])
        );
        assert_eq!(
            document_candidates("/code/vue/.."),
            paths(&["code/README.md", "code/index.md"])
        );
        assert_eq!(
            document_candidates("/code/../"),
            paths(&["README.md", "index.md"])
        );
    }

    #[test]
    fn test_candidates_above_root_are_empty() {
        assert!(document_candidates("/books/../../outside.md").is_empty());
        assert!(document_candidates("/../").is_empty());
        assert!(document_candidates("../secret").is_empty());
    }
}
