//! Configuration bundle generator for the Osmose ecosystem model.
//!
//! Given an ordered list of species group names, this crate generates the
//! complete set of interrelated `osm_param-*` configuration files the model
//! expects: per-group parameter rows, per-group seasonality and movement-map
//! files, and verbatim template copies. The whole set can also be collected
//! into a single zip archive.
//!
//! Every filename written as a parameter value inside one file is also
//! generated into the same bundle, so cross-references never dangle.
//!
//! # Module Organization
//!
//! - [`groups`] - validated group lists with stable positional indices
//! - [`sections`] - one generator per configuration domain
//! - [`bundle`] - fixed-order orchestration of all sections
//! - [`archive`] - zip archiving of a bundle plus the template resources
//! - [`templates`] - the embedded Osmose template resources
//! - [`defaults`] - fixed Osmose default values shared across sections
//!
//! # Example
//!
//! ```
//! use osmoconf::{EmbeddedTemplates, GroupList, MemorySink, write_bundle};
//!
//! let groups = GroupList::new(["redSnapper", "gagGrouper"])?;
//! let mut sink = MemorySink::new();
//! write_bundle(&groups, &mut sink, &EmbeddedTemplates)?;
//! assert!(sink.get("fishing/fishing-seasonality-redSnapper.csv").is_some());
//! # Ok::<(), osmoconf::Error>(())
//! ```

pub mod archive;
pub mod bundle;
pub mod defaults;
mod error;
pub mod groups;
pub mod params;
pub mod sections;
pub mod templates;

pub use archive::write_archive;
pub use bundle::write_bundle;
pub use error::{Error, Result};
pub use groups::{BundleRequest, Group, GroupList};
pub use osmoconf_core::{DirSink, MemorySink, RowWriter, Sink, TemplateStore, ZipSink};
pub use templates::EmbeddedTemplates;
