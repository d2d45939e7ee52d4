//! Catalog command and outcome DTOs.

use crate::domain::entities::{NewProductDraft, Product, ProductId, Review};
use crate::domain::errors::{CatalogError, CatalogOperation};

/// A request to mutate or read the remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Fetch the full collection.
    Load,
    /// Create a product from a draft.
    AddProduct(NewProductDraft),
    /// Submit a review for a product.
    SubmitReview {
        /// Target product.
        product_id: ProductId,
        /// Review to attach.
        review: Review,
    },
    /// Delete a product.
    DeleteProduct(ProductId),
}

impl CatalogCommand {
    /// Returns the operation kind.
    #[must_use]
    pub const fn operation(&self) -> CatalogOperation {
        match self {
            Self::Load => CatalogOperation::Fetch,
            Self::AddProduct(_) => CatalogOperation::Add,
            Self::SubmitReview { .. } => CatalogOperation::SubmitReview,
            Self::DeleteProduct(_) => CatalogOperation::Delete,
        }
    }
}

/// The server's answer to a [`CatalogCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Collection fetched.
    Loaded(Result<Vec<Product>, CatalogError>),
    /// Product created.
    Added(Result<Product, CatalogError>),
    /// Review submitted.
    ReviewSubmitted {
        /// Product the review was sent for.
        product_id: ProductId,
        /// Updated product as stored by the server.
        result: Result<Product, CatalogError>,
    },
    /// Product deleted.
    Deleted {
        /// Product the delete was sent for.
        product_id: ProductId,
        /// Delete confirmation.
        result: Result<(), CatalogError>,
    },
}

impl CatalogOutcome {
    /// Returns the operation kind.
    #[must_use]
    pub const fn operation(&self) -> CatalogOperation {
        match self {
            Self::Loaded(_) => CatalogOperation::Fetch,
            Self::Added(_) => CatalogOperation::Add,
            Self::ReviewSubmitted { .. } => CatalogOperation::SubmitReview,
            Self::Deleted { .. } => CatalogOperation::Delete,
        }
    }

    /// Returns whether the server accepted the request.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Loaded(result) => result.is_ok(),
            Self::Added(result) => result.is_ok(),
            Self::ReviewSubmitted { result, .. } => result.is_ok(),
            Self::Deleted { result, .. } => result.is_ok(),
        }
    }
}
