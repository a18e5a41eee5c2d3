//! Core data model for opened publications.
//!
//! This module contains:
//! - The canonical [`Publication`] value
//! - Resource references ([`Link`]) and the table of contents ([`TocEntry`])

mod link;
mod publication;

pub use link::{Link, TocEntry, TocIter};
pub use publication::Publication;
