//! Domain error types.

mod catalog_error;

pub use catalog_error::{CatalogError, CatalogOperation};
