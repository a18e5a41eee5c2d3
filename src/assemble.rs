//! Publication assembly.
//!
//! `assemble` orchestrates the document opener and the resulting capability
//! provider into one canonical [`Publication`]. It is also the error
//! classification boundary: whatever an opener or provider fails with, the
//! caller only ever sees the two-kind [`AssemblyError`] taxonomy.

use std::sync::Arc;

use crate::error::AssemblyError;
use crate::model::{Link, Publication, TocEntry};
use crate::provider::{CapabilityProvider, DocumentOpener, OutlineNode, SourceHandle};

/// Assemble a [`Publication`] from a raw source.
///
/// `fallback_title` is used when the source declares no title; separators
/// (`_`) are normalized to spaces. When it is absent too, the title falls
/// back to the normalized file stem and finally to the identifier, so the
/// resulting title is never empty.
pub fn assemble(
    opener: &dyn DocumentOpener,
    source: &SourceHandle,
    fallback_title: Option<&str>,
) -> Result<Publication, AssemblyError> {
    let provider = opener.open(source).map_err(|err| {
        log::warn!("failed to open '{}': {}", source.file_name, err);
        AssemblyError::Unreadable(err.to_string())
    })?;
    let provider: Arc<dyn CapabilityProvider> = Arc::from(provider);

    let page_count = provider
        .unit_count()
        .map_err(|err| AssemblyError::Unreadable(err.to_string()))?;

    let reading_order = build_reading_order(provider.as_ref(), source);
    if page_count == Some(0) && reading_order.is_empty() {
        return Err(AssemblyError::Empty);
    }
    // Single-resource documents get exactly one entry covering the whole
    // document; the reading order is never empty past this point.
    let reading_order = if reading_order.is_empty() {
        vec![whole_document_link(source)]
    } else {
        reading_order
    };

    let identifier = provider
        .identifier()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| derive_identifier(&source.file_name));

    let title = resolve_title(provider.as_ref(), source, fallback_title, &identifier);

    let toc = provider
        .outline()
        .into_iter()
        .map(outline_to_toc)
        .collect();

    Ok(Publication::new(
        identifier,
        title,
        provider.authors(),
        page_count,
        reading_order,
        Vec::new(),
        toc,
        provider,
    ))
}

fn build_reading_order(provider: &dyn CapabilityProvider, source: &SourceHandle) -> Vec<Link> {
    provider
        .sub_resources()
        .into_iter()
        .map(|resource| {
            let mut link = Link::new(resource.href);
            if let Some(media_type) = resource.media_type {
                link = link.with_media_type(media_type);
            }
            link
        })
        .filter(|link| {
            if link.href.is_empty() {
                log::warn!("ignoring sub-resource with empty href in '{}'", source.file_name);
                false
            } else {
                true
            }
        })
        .collect()
}

fn whole_document_link(source: &SourceHandle) -> Link {
    if source.file_name.is_empty() {
        Link::new("document")
    } else {
        Link::new(source.file_name.clone())
    }
}

/// Title priority: provider > fallback > file stem > identifier.
fn resolve_title(
    provider: &dyn CapabilityProvider,
    source: &SourceHandle,
    fallback_title: Option<&str>,
    identifier: &str,
) -> String {
    if let Some(title) = provider.title().filter(|t| !t.trim().is_empty()) {
        return title;
    }
    if let Some(fallback) = fallback_title.map(normalize_title).filter(|t| !t.is_empty()) {
        log::debug!("'{}' declares no title, using fallback", source.file_name);
        return fallback;
    }
    let stem = normalize_title(source.file_stem());
    if !stem.is_empty() {
        return stem;
    }
    identifier.to_string()
}

/// Normalize file-name separators to spaces and collapse whitespace runs.
fn normalize_title(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a stable identifier from the file name.
///
/// The digest depends only on the name, so repeated opens of the same file
/// agree on the identifier even when the source declares none.
fn derive_identifier(file_name: &str) -> String {
    sha1_smol::Sha1::from(file_name.as_bytes()).digest().to_string()
}

fn outline_to_toc(node: OutlineNode) -> TocEntry {
    let mut entry = TocEntry::new(node.title, node.target);
    entry.children = node.children.into_iter().map(outline_to_toc).collect();
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::ResourceRef;

    #[derive(Default)]
    struct FakeProvider {
        identifier: Option<String>,
        title: Option<String>,
        authors: Vec<String>,
        pages: Option<u32>,
        resources: Vec<ResourceRef>,
        outline: Vec<OutlineNode>,
    }

    impl CapabilityProvider for FakeProvider {
        fn identifier(&self) -> Option<String> {
            self.identifier.clone()
        }

        fn title(&self) -> Option<String> {
            self.title.clone()
        }

        fn authors(&self) -> Vec<String> {
            self.authors.clone()
        }

        fn unit_count(&self) -> Result<Option<u32>, ProviderError> {
            Ok(self.pages)
        }

        fn sub_resources(&self) -> Vec<ResourceRef> {
            self.resources.clone()
        }

        fn outline(&self) -> Vec<OutlineNode> {
            self.outline.clone()
        }
    }

    struct FakeOpener(fn() -> FakeProvider);

    impl DocumentOpener for FakeOpener {
        fn open(
            &self,
            _source: &SourceHandle,
        ) -> Result<Box<dyn CapabilityProvider>, ProviderError> {
            Ok(Box::new((self.0)()))
        }
    }

    struct BrokenOpener;

    impl DocumentOpener for BrokenOpener {
        fn open(
            &self,
            _source: &SourceHandle,
        ) -> Result<Box<dyn CapabilityProvider>, ProviderError> {
            Err(ProviderError::Malformed("bad header".into()))
        }
    }

    fn source(name: &str) -> SourceHandle {
        SourceHandle::new(name, Vec::new())
    }

    #[test]
    fn test_unreadable_source_is_classified() {
        let result = assemble(&BrokenOpener, &source("broken.pdf"), None);
        assert!(matches!(result, Err(AssemblyError::Unreadable(_))));
    }

    #[test]
    fn test_zero_units_is_empty() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(0),
            ..FakeProvider::default()
        });
        let result = assemble(&opener, &source("blank.pdf"), None);
        assert!(matches!(result, Err(AssemblyError::Empty)));
    }

    #[test]
    fn test_zero_pages_with_sub_resources_is_not_empty() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(0),
            resources: vec![ResourceRef::new("part1")],
            ..FakeProvider::default()
        });
        assert!(assemble(&opener, &source("odd.pdf"), None).is_ok());
    }

    #[test]
    fn test_provider_title_wins() {
        let opener = FakeOpener(|| FakeProvider {
            title: Some("Declared Title".into()),
            pages: Some(3),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("file.pdf"), Some("Fallback")).unwrap();
        assert_eq!(publication.title(), "Declared Title");
    }

    #[test]
    fn test_fallback_title_separators_normalized() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(3),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), Some("My_Book")).unwrap();
        assert_eq!(publication.title(), "My Book");
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(3),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("winter_notes.pdf"), None).unwrap();
        assert_eq!(publication.title(), "winter notes");
    }

    #[test]
    fn test_blank_provider_title_is_absent() {
        let opener = FakeOpener(|| FakeProvider {
            title: Some("   ".into()),
            pages: Some(3),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), Some("Real Title")).unwrap();
        assert_eq!(publication.title(), "Real Title");
    }

    #[test]
    fn test_identifier_stable_across_opens() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(2),
            ..FakeProvider::default()
        });
        let a = assemble(&opener, &source("same.pdf"), None).unwrap();
        let b = assemble(&opener, &source("same.pdf"), None).unwrap();
        assert_eq!(a.identifier(), b.identifier());
        assert!(!a.identifier().is_empty());

        let c = assemble(&opener, &source("other.pdf"), None).unwrap();
        assert_ne!(a.identifier(), c.identifier());
    }

    #[test]
    fn test_provider_identifier_wins() {
        let opener = FakeOpener(|| FakeProvider {
            identifier: Some("urn:isbn:123".into()),
            pages: Some(2),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), None).unwrap();
        assert_eq!(publication.identifier(), "urn:isbn:123");
    }

    #[test]
    fn test_single_resource_reading_order() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(12),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("novel.pdf"), None).unwrap();
        assert_eq!(publication.reading_order().len(), 1);
        assert_eq!(publication.reading_order()[0].href, "novel.pdf");
    }

    #[test]
    fn test_multi_resource_reading_order_in_source_order() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(40),
            resources: vec![
                ResourceRef::new("part1").with_media_type("application/pdf"),
                ResourceRef::new("part2").with_media_type("application/pdf"),
            ],
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("set.pdf"), None).unwrap();
        let hrefs: Vec<&str> = publication
            .reading_order()
            .iter()
            .map(|l| l.href.as_str())
            .collect();
        assert_eq!(hrefs, vec!["part1", "part2"]);
        assert_eq!(
            publication.reading_order()[0].media_type.as_deref(),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_outline_converted_one_to_one() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(20),
            outline: vec![
                OutlineNode::new("Part I", None)
                    .with_child(OutlineNode::new("Chapter 1", Some("page=1".into()))),
                OutlineNode::new("Part II", Some("page=11".into())),
            ],
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), None).unwrap();

        assert_eq!(publication.toc().len(), 2);
        assert_eq!(publication.toc()[0].title, "Part I");
        assert_eq!(publication.toc()[0].children.len(), 1);
        assert_eq!(
            publication.toc()[0].children[0].target.as_deref(),
            Some("page=1")
        );
        assert_eq!(publication.toc()[1].title, "Part II");
    }

    #[test]
    fn test_empty_outline_is_not_an_error() {
        let opener = FakeOpener(|| FakeProvider {
            pages: Some(5),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), None).unwrap();
        assert!(publication.toc().is_empty());
    }

    #[test]
    fn test_authors_carried_over() {
        let opener = FakeOpener(|| FakeProvider {
            authors: vec!["First Author".into(), "Second Author".into()],
            pages: Some(5),
            ..FakeProvider::default()
        });
        let publication = assemble(&opener, &source("x.pdf"), None).unwrap();
        assert_eq!(publication.authors(), ["First Author", "Second Author"]);
    }
}
