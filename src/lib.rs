//! # folio
//!
//! A library for turning decoded page-based documents into a canonical,
//! queryable [`Publication`] and for resolving layered display preferences
//! into validated, adapter-specific [`Settings`].
//!
//! ## Features
//!
//! - Assemble a [`Publication`] (metadata, reading order, table of contents)
//!   from any [`CapabilityProvider`]
//! - Lazily computed, cached pagination via [`Publication::positions`]
//! - Merge app/publication/user [`Preferences`] layers against an adapter's
//!   [`AdapterProfile`] with deterministic precedence and fallback
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio::{assemble, SourceHandle};
//! # use folio::{CapabilityProvider, DocumentOpener, ProviderError};
//! # struct MyOpener;
//! # impl DocumentOpener for MyOpener {
//! #     fn open(&self, _: &SourceHandle) -> Result<Box<dyn CapabilityProvider>, ProviderError> {
//! #         unimplemented!()
//! #     }
//! # }
//! # let opener = MyOpener;
//!
//! let source = SourceHandle::from_path("dossier.pdf").unwrap();
//! let publication = assemble(&opener, &source, None).unwrap();
//!
//! println!("{}: {} pages", publication.title(), publication.positions().unwrap().len());
//! ```
//!
//! ## Resolving Settings
//!
//! ```
//! use folio::settings::{keys, resolve, AdapterProfile, Constraint, Fit, Preferences, Value};
//!
//! let profile = AdapterProfile::builder()
//!     .constrained(
//!         keys::FIT,
//!         Fit::Contain,
//!         Constraint::OneOf(vec![Value::Fit(Fit::Contain), Value::Fit(Fit::Cover)]),
//!     )
//!     .register()
//!     .unwrap();
//!
//! let user = Preferences::new().with(keys::FIT, Fit::Cover);
//! let settings = resolve(&profile, &[user]);
//! assert_eq!(settings.fit(), Some(Fit::Cover));
//! ```

mod assemble;
pub mod error;
pub mod model;
mod positions;
pub mod provider;
pub mod settings;

pub use assemble::assemble;
pub use error::{AssemblyError, PositionsError, ProfileError, ProviderError};
pub use model::{Link, Publication, TocEntry, TocIter};
pub use positions::{Position, Positions};
pub use provider::{CapabilityProvider, DocumentOpener, OutlineNode, ResourceRef, SourceHandle};
pub use settings::{AdapterProfile, Preferences, Settings};
