//! Error types for catalog configuration and the `lexis` CLI.
//!
//! Lookups never fail; these errors cover reading configuration, parsing
//! bundle files and writing command output.

use camino::Utf8PathBuf;
use lexis_common::i18n::I18nError;
use thiserror::Error;

/// Errors raised while bootstrapping a catalog from configuration.
#[derive(Debug, Error)]
pub enum LexisError {
    /// A configuration or bundle file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration or bundle file could not be parsed.
    #[error("invalid contents in {origin}: {reason}")]
    Parse {
        /// File name or description of the parsed input.
        origin: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A bundle file has an extension the loader does not understand.
    #[error("unsupported bundle file {path}; expected a .toml or .json extension")]
    UnsupportedBundle {
        /// Offending bundle path.
        path: Utf8PathBuf,
    },

    /// The catalog rejected its built-in data.
    #[error(transparent)]
    Catalog(#[from] I18nError),

    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type for catalog bootstrap operations.
pub type Result<T> = std::result::Result<T, LexisError>;
