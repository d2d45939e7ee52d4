//! Client-side catalog state.

use tracing::{debug, error, warn};

use crate::application::dto::CatalogOutcome;
use crate::domain::entities::{NewProductDraft, Product};
use crate::domain::errors::{CatalogError, CatalogOperation};
use crate::domain::services::reconcile;

/// What the catalog area should currently show.
///
/// Loading wins over an error, which wins over content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogView<'a> {
    /// The initial load has not finished.
    Loading,
    /// An operation failed; holds the user-facing message.
    Error(&'a str),
    /// The product collection, possibly empty.
    Content(&'a [Product]),
}

/// Owned state of the catalog view.
///
/// Only [`CatalogState::apply`] and the draft setters mutate it. The error
/// slot is shared by all operations and is never cleared by a later success.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    draft: NewProductDraft,
    loading: bool,
    error: Option<String>,
    load_requested: bool,
}

impl CatalogState {
    /// Creates the initial state: loading, no products, no error.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            draft: NewProductDraft::default(),
            loading: true,
            error: None,
            load_requested: false,
        }
    }

    /// Returns the product collection in server order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the unsaved add-product draft.
    #[must_use]
    pub const fn draft(&self) -> &NewProductDraft {
        &self.draft
    }

    /// Replaces the draft with the form's current values.
    pub fn set_draft(&mut self, draft: NewProductDraft) {
        self.draft = draft;
    }

    /// Returns whether the initial load is still pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the render gate for the catalog area.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        if self.loading {
            CatalogView::Loading
        } else if let Some(message) = &self.error {
            CatalogView::Error(message)
        } else {
            CatalogView::Content(&self.products)
        }
    }

    /// Marks the initial load as issued.
    ///
    /// Returns `false` if a load was already requested; the collection is
    /// fetched at most once.
    pub fn begin_load(&mut self) -> bool {
        if self.load_requested {
            return false;
        }
        self.load_requested = true;
        self.loading = true;
        true
    }

    /// Applies a server response to the state.
    pub fn apply(&mut self, outcome: CatalogOutcome) {
        let operation = outcome.operation();
        match outcome {
            CatalogOutcome::Loaded(Ok(products)) => {
                debug!(count = products.len(), "Product collection loaded");
                self.products = products;
                self.loading = false;
            }
            CatalogOutcome::Loaded(Err(e)) => {
                self.fail(operation, &e);
                self.loading = false;
            }
            CatalogOutcome::Added(Ok(product)) => {
                debug!(product_id = %product.id(), "Product created");
                reconcile::append(&mut self.products, product);
                self.draft.clear();
            }
            CatalogOutcome::ReviewSubmitted {
                product_id,
                result: Ok(product),
            } => {
                if product.id() != &product_id {
                    warn!(
                        requested = %product_id,
                        returned = %product.id(),
                        "Review response carries a different product id"
                    );
                }
                let returned_id = product.id().clone();
                if !reconcile::replace_by_id(&mut self.products, product) {
                    warn!(product_id = %returned_id, "Reviewed product is not in the collection");
                }
            }
            CatalogOutcome::Deleted {
                product_id,
                result: Ok(()),
            } => {
                if !reconcile::remove_by_id(&mut self.products, &product_id) {
                    warn!(product_id = %product_id, "Deleted product was not in the collection");
                }
            }
            CatalogOutcome::Added(Err(e))
            | CatalogOutcome::ReviewSubmitted { result: Err(e), .. }
            | CatalogOutcome::Deleted { result: Err(e), .. } => {
                self.fail(operation, &e);
            }
        }
    }

    fn fail(&mut self, operation: CatalogOperation, e: &CatalogError) {
        error!(operation = %operation, error = %e, "Catalog operation failed");
        self.error = Some(operation.failure_message().to_string());
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
