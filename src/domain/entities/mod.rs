//! Domain entity definitions.

mod draft;
mod product;
mod review;

pub use draft::NewProductDraft;
pub use product::{Product, ProductId};
pub use review::{MAX_RATING, MIN_RATING, Review};
