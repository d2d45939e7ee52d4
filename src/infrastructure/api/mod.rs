//! Catalog backend client.

mod client;
mod dto;

pub use client::RestCatalogClient;
