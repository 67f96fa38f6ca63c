use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator plumbing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("template '{name}' is not in the store")]
    #[diagnostic(
        code(osmoconf::template_missing),
        help("bundled template names are enumerable via TemplateStore::names()")
    )]
    TemplateMissing { name: String },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(osmoconf::sink_write))]
    Sink {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to encode row")]
    #[diagnostic(code(osmoconf::row_encode))]
    Row(#[from] csv::Error),

    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),
}

impl Error {
    /// Attach the logical path a write failed against.
    pub(crate) fn with_path(self, path: &str) -> Self {
        match self {
            Error::Io(source) => Error::Sink {
                path: path.to_string(),
                source,
            },
            other => other,
        }
    }
}
