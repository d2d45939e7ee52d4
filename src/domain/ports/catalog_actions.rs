//! Capability handed to views that trigger catalog mutations.

use crate::domain::entities::{NewProductDraft, ProductId, Review};

/// Mutations a child view may request from the catalog owner.
///
/// Implementations only dispatch; the owner performs the request and applies
/// the result to its own state.
pub trait CatalogActions: Send + Sync {
    /// Requests creation of a product from the draft.
    fn add_product(&self, draft: NewProductDraft);

    /// Requests a review submission for a product.
    fn submit_review(&self, product_id: ProductId, review: Review);

    /// Requests deletion of a product.
    fn delete_product(&self, product_id: ProductId);
}
