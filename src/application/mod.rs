//! Application layer with the catalog controller, state and DTOs.

/// Data transfer objects.
pub mod dto;
/// Catalog state and view capabilities.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{CatalogCommand, CatalogOutcome};
pub use services::{CatalogCommandSender, CatalogState, CatalogView};
pub use use_cases::CatalogController;
