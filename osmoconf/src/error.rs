use miette::Diagnostic;
use thiserror::Error;

/// Result type for bundle generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("duplicate group name '{name}' (positions {first} and {second})")]
    #[diagnostic(
        code(osmoconf::duplicate_group),
        help("per-group file names embed the group name; rename one of the duplicates")
    )]
    DuplicateGroup {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("group name '{name}' contains a path separator")]
    #[diagnostic(
        code(osmoconf::invalid_group_name),
        help("group names become file names under fishing/ and maps/; they must stay inside those directories")
    )]
    InvalidGroupName { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] osmoconf_core::Error),
}
