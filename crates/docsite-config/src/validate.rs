//! Cross-check of configuration references against a content root.

use crate::content::ContentRoot;
use crate::links::{document_candidates, is_external, sidebar_child_path};
use crate::schema::{NavItem, SiteConfig};
use crate::{ConfigError, DanglingReference};

/// A document reference found in the configuration.
struct Reference<'a> {
    /// Reference as written.
    written: &'a str,
    /// Site path the reference resolves to.
    site_path: String,
    /// Field path for error messages.
    field: String,
}

impl SiteConfig {
    /// Check that every sidebar child and internal nav link has a document.
    ///
    /// All references are checked before returning, so one call reports
    /// every problem. Calling this has no side effects.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DanglingReferences` listing each unresolved
    /// reference in configuration order. A reference whose `..` segments
    /// climb above the content root is unresolved and never looked up.
    pub fn validate<R: ContentRoot + ?Sized>(&self, root: &R) -> Result<(), ConfigError> {
        let references = self.references();
        let total = references.len();

        let dangling: Vec<DanglingReference> = references
            .into_iter()
            .filter_map(|reference| {
                let candidates = document_candidates(&reference.site_path);
                if candidates.iter().any(|candidate| root.exists(candidate)) {
                    tracing::debug!(path = reference.written, "Reference resolved");
                    return None;
                }
                if candidates.is_empty() {
                    tracing::warn!(
                        path = reference.written,
                        field = %reference.field,
                        "Reference leaves the content root"
                    );
                } else {
                    tracing::warn!(
                        path = reference.written,
                        field = %reference.field,
                        "Unresolved reference"
                    );
                }
                Some(DanglingReference {
                    path: reference.written.to_owned(),
                    field: reference.field,
                    candidates,
                })
            })
            .collect();

        if dangling.is_empty() {
            tracing::debug!(references = total, "All references resolved");
            Ok(())
        } else {
            Err(ConfigError::DanglingReferences(dangling))
        }
    }

    /// Collect internal references in configuration order: nav, then sidebar.
    fn references(&self) -> Vec<Reference<'_>> {
        let mut references = Vec::new();

        for (i, item) in self.theme_config.nav.iter().enumerate() {
            collect_nav(item, &format!("themeConfig.nav[{i}]"), &mut references);
        }

        for (prefix, groups) in &self.theme_config.sidebar {
            for (g, group) in groups.iter().enumerate() {
                for (c, child) in group.children.iter().enumerate() {
                    if is_external(child) {
                        continue;
                    }
                    references.push(Reference {
                        written: child,
                        site_path: sidebar_child_path(prefix, child),
                        field: format!("themeConfig.sidebar['{prefix}'][{g}].children[{c}]"),
                    });
                }
            }
        }

        references
    }
}

fn collect_nav<'a>(item: &'a NavItem, field: &str, references: &mut Vec<Reference<'a>>) {
    if let Some(link) = item.link.as_deref()
        && !is_external(link)
    {
        references.push(Reference {
            written: link,
            site_path: link.to_owned(),
            field: format!("{field}.link"),
        });
    }

    for (i, child) in item.items.iter().enumerate() {
        collect_nav(child, &format!("{field}.items[{i}]"), references);
    }
}
