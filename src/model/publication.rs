//! Canonical in-memory representation of an opened document.

use std::sync::Arc;

use crate::error::PositionsError;
use crate::model::link::{Link, TocEntry, TocIter};
use crate::positions::{Position, Positions};
use crate::provider::CapabilityProvider;

/// Canonical, immutable representation of a document's metadata, navigable
/// structure, and pagination handle.
///
/// Created once per opened source by [`assemble`](crate::assemble); read-only
/// thereafter and safe to share across threads.
#[derive(Debug)]
pub struct Publication {
    identifier: String,
    title: String,
    authors: Vec<String>,
    page_count: Option<u32>,
    reading_order: Vec<Link>,
    links: Vec<Link>,
    toc: Vec<TocEntry>,
    positions: Positions,
}

impl Publication {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        identifier: String,
        title: String,
        authors: Vec<String>,
        page_count: Option<u32>,
        reading_order: Vec<Link>,
        links: Vec<Link>,
        toc: Vec<TocEntry>,
        provider: Arc<dyn CapabilityProvider>,
    ) -> Self {
        debug_assert!(!reading_order.is_empty());
        Self {
            identifier,
            title,
            authors,
            page_count,
            reading_order,
            links,
            toc,
            positions: Positions::new(provider),
        }
    }

    /// Stable identifier: source-declared, or derived from the file name.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display title; never empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Source-reported unit count, when known.
    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    /// Linear reading order; never empty.
    pub fn reading_order(&self) -> &[Link] {
        &self.reading_order
    }

    /// Auxiliary resource links; order carries no meaning.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Table of contents tree; possibly empty.
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    /// Depth-first traversal of the table of contents.
    pub fn toc_iter(&self) -> TocIter<'_> {
        TocIter::new(&self.toc)
    }

    /// Find a link by href, searching the reading order first.
    pub fn link_with_href(&self, href: &str) -> Option<&Link> {
        self.reading_order
            .iter()
            .chain(self.links.iter())
            .find(|link| link.href == href)
    }

    /// The ordered position list, computed lazily on first call.
    pub fn positions(&self) -> Result<&[Position], PositionsError> {
        self.positions.get()
    }

    /// The position closest to a normalized progression in `[0, 1]`.
    ///
    /// Out-of-range inputs are clamped. Triggers position computation on
    /// first call like [`positions`](Self::positions).
    pub fn position_at(&self, progression: f64) -> Result<&Position, PositionsError> {
        let positions = self.positions()?;
        let progression = progression.clamp(0.0, 1.0);
        // Positions partition [0, 1] into count equal slices; index by floor.
        let index = ((progression * positions.len() as f64) as usize).min(positions.len() - 1);
        Ok(&positions[index])
    }
}
