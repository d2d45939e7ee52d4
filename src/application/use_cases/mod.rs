//! Use case implementations.

mod catalog_controller;

pub use catalog_controller::CatalogController;
