//! UI screens.

mod app;
mod catalog_screen;

pub use app::App;
pub use catalog_screen::{CatalogScreen, CatalogScreenState, Focus};
