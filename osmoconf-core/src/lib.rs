//! Plumbing for the Osmose configuration generator.
//!
//! This crate provides the generic pieces the domain layer (`osmoconf`)
//! composes into configuration bundles:
//!
//! # Module Organization
//!
//! - [`row`] - semicolon-delimited, CSV-escaped row writing
//! - [`sink`] - output destinations (directory, in-memory, zip archive)
//! - [`template`] - read-only named template resources
//! - [`error`] - shared error and result types

pub mod error;
pub mod row;
pub mod sink;
pub mod template;

pub use error::{Error, Result};
pub use row::RowWriter;
pub use sink::{DirSink, MemorySink, Sink, ZipSink};
pub use template::TemplateStore;
