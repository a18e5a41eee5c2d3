//! Structural references within a publication.
//!
//! A [`Link`] addresses one resource of the publication (a reading-order
//! entry or an auxiliary resource). A [`TocEntry`] is one node of the
//! hierarchical table of contents, converted 1:1 from the provider's outline.

/// A reference to a resource of the publication.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub href: String,
    pub title: Option<String>,
    pub media_type: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
            media_type: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// A table of contents entry (hierarchical).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    pub title: String,
    /// Target of the entry; `None` for grouping entries without a destination.
    pub target: Option<String>,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(title: impl Into<String>, target: Option<String>) -> Self {
        Self {
            title: title.into(),
            target,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TocEntry) -> Self {
        self.children.push(child);
        self
    }
}

/// Depth-first iterator over a table of contents tree.
///
/// Yields entries in reading order: each entry before its children, siblings
/// in declared order.
#[derive(Debug)]
pub struct TocIter<'a> {
    stack: Vec<&'a TocEntry>,
}

impl<'a> TocIter<'a> {
    pub(crate) fn new(entries: &'a [TocEntry]) -> Self {
        let mut stack: Vec<&'a TocEntry> = entries.iter().collect();
        stack.reverse();
        Self { stack }
    }
}

impl<'a> Iterator for TocIter<'a> {
    type Item = &'a TocEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        for child in entry.children.iter().rev() {
            self.stack.push(child);
        }
        Some(entry)
    }
}
