//! Lexis binds the message catalog to host configuration.
//!
//! Hosts describe their catalog in a [`CatalogConfig`], build it with
//! [`Localisation::init`] and hand the resulting
//! [`MessageCatalog`](lexis_common::i18n::MessageCatalog) to their renderers.

pub mod bundle_files;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;

pub use config::CatalogConfig;
pub use error::{LexisError, Result};
pub use host::Localisation;
