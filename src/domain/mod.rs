//! Domain layer with catalog entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Collection reconciliation.
pub mod services;

pub use entities::{NewProductDraft, Product, ProductId, Review};
pub use errors::{CatalogError, CatalogOperation};
pub use ports::{CatalogActions, CatalogPort};
