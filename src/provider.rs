//! Capability provider interface.
//!
//! A [`CapabilityProvider`] is the read-only description of an already-decoded
//! source document: metadata, structure, and unit (page) count. Decoding the
//! bytes themselves is the job of an external [`DocumentOpener`]; this crate
//! only consumes the result.

use std::path::Path;
use std::sync::Arc;

use crate::error::ProviderError;

/// A raw source document: its file name plus byte access.
///
/// The bytes are held behind an `Arc` so a handle can be shared with an opener
/// without copying the document.
#[derive(Debug, Clone)]
pub struct SourceHandle {
    pub file_name: String,
    pub data: Arc<[u8]>,
}

impl SourceHandle {
    pub fn new(file_name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Read a handle from a file on disk, capturing the file name.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = std::fs::read(path)?;
        Ok(Self::new(file_name, data))
    }

    /// File name without its final extension.
    pub fn file_stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }
}

/// One node of a provider-reported outline (bookmark) tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub title: String,
    /// Provider-specific target (e.g. a page reference); `None` for grouping
    /// nodes that only carry children.
    pub target: Option<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>, target: Option<String>) -> Self {
        Self {
            title: title.into(),
            target,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }
}

/// An addressable sub-resource reported by a provider.
///
/// Most page-based documents have none (the whole document is one resource);
/// multi-part containers report one per part, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub href: String,
    pub media_type: Option<String>,
}

impl ResourceRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Read-only description of a decoded source document.
///
/// Implementations are supplied by container/decoding layers outside this
/// crate. Every method may be called concurrently after assembly; providers
/// must not mutate the source.
pub trait CapabilityProvider: Send + Sync {
    /// Source-declared identifier, if any.
    fn identifier(&self) -> Option<String> {
        None
    }

    /// Source-declared title, if any. An empty string is treated as absent.
    fn title(&self) -> Option<String> {
        None
    }

    /// Source-declared authors, in source order.
    fn authors(&self) -> Vec<String> {
        Vec::new()
    }

    /// Number of addressable units (pages), when the source reports one.
    ///
    /// This may require reading from the source and is therefore fallible.
    fn unit_count(&self) -> Result<Option<u32>, ProviderError>;

    /// Display label for a unit (e.g. "iv", "23"), if the source carries one.
    fn page_label(&self, index: u32) -> Option<String> {
        let _ = index;
        None
    }

    /// Addressable sub-resources, in source order. Empty for single-resource
    /// documents.
    fn sub_resources(&self) -> Vec<ResourceRef> {
        Vec::new()
    }

    /// Outline (bookmark) tree. Empty when the source has none.
    fn outline(&self) -> Vec<OutlineNode> {
        Vec::new()
    }
}

/// Decodes a raw source into a capability provider.
///
/// This is the only fallible decode step the assembler invokes; any error it
/// returns is reclassified as
/// [`AssemblyError::Unreadable`](crate::AssemblyError::Unreadable).
pub trait DocumentOpener {
    fn open(&self, source: &SourceHandle) -> Result<Box<dyn CapabilityProvider>, ProviderError>;
}
