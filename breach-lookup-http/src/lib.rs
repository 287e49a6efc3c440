//! Thin HTTP surface over the breach-lookup core: a status probe and a
//! password check endpoint, plus the file-backed tenant configuration
//! provider injected into the core.

pub mod error;
pub mod provider;
pub mod routes;

pub use error::Error;
pub use provider::FileConfigProvider;
pub use routes::{AppState, DEFAULT_TENANT, app};
