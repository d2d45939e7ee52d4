mod catalog_actions;
mod catalog_port;

pub use catalog_actions::CatalogActions;
pub use catalog_port::CatalogPort;
