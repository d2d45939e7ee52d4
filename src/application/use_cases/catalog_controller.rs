//! Catalog controller: mediates every backend call and owns the state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::{CatalogCommand, CatalogOutcome};
use crate::application::services::CatalogState;
use crate::domain::entities::{NewProductDraft, ProductId, Review};
use crate::domain::ports::CatalogPort;

/// Owns [`CatalogState`] and the port used to reach the backend.
///
/// Each operation runs in two steps: [`CatalogController::perform`] talks to
/// the backend without touching state, and [`CatalogController::apply`]
/// folds the response in. The UI runs `perform` on a background task and
/// calls `apply` from its event loop.
#[derive(Clone)]
pub struct CatalogController {
    port: Arc<dyn CatalogPort>,
    state: CatalogState,
}

impl CatalogController {
    /// Creates a controller in the initial loading state.
    #[must_use]
    pub fn new(port: Arc<dyn CatalogPort>) -> Self {
        Self {
            port,
            state: CatalogState::new(),
        }
    }

    /// Returns the catalog state.
    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Returns a handle to the backend port.
    #[must_use]
    pub fn port(&self) -> Arc<dyn CatalogPort> {
        Arc::clone(&self.port)
    }

    /// Records local side effects of a command before it is sent.
    ///
    /// Returns `None` when the command must not reach the backend, which only
    /// happens for a repeated load.
    pub fn prepare(&mut self, command: CatalogCommand) -> Option<CatalogCommand> {
        match &command {
            CatalogCommand::Load => {
                if !self.state.begin_load() {
                    debug!("Product collection already requested, ignoring load");
                    return None;
                }
            }
            CatalogCommand::AddProduct(draft) => {
                self.state.set_draft(draft.clone());
            }
            CatalogCommand::SubmitReview { .. } | CatalogCommand::DeleteProduct(_) => {}
        }
        Some(command)
    }

    /// Sends a command to the backend and wraps the response.
    pub async fn perform(port: &dyn CatalogPort, command: CatalogCommand) -> CatalogOutcome {
        debug!(operation = %command.operation(), "Performing catalog request");
        match command {
            CatalogCommand::Load => CatalogOutcome::Loaded(port.fetch_products().await),
            CatalogCommand::AddProduct(draft) => {
                CatalogOutcome::Added(port.create_product(&draft).await)
            }
            CatalogCommand::SubmitReview { product_id, review } => {
                let result = port.submit_review(&product_id, &review).await;
                CatalogOutcome::ReviewSubmitted { product_id, result }
            }
            CatalogCommand::DeleteProduct(product_id) => {
                let result = port.delete_product(&product_id).await;
                CatalogOutcome::Deleted { product_id, result }
            }
        }
    }

    /// Applies a backend response.
    pub fn apply(&mut self, outcome: CatalogOutcome) {
        if outcome.is_success() {
            info!(operation = %outcome.operation(), "Catalog request succeeded");
        }
        self.state.apply(outcome);
    }

    /// Runs a command to completion.
    pub async fn execute(&mut self, command: CatalogCommand) {
        if let Some(command) = self.prepare(command) {
            let outcome = Self::perform(self.port.as_ref(), command).await;
            self.apply(outcome);
        }
    }

    /// Loads the product collection.
    pub async fn load(&mut self) {
        self.execute(CatalogCommand::Load).await;
    }

    /// Creates a product from the draft.
    pub async fn add_product(&mut self, draft: NewProductDraft) {
        self.execute(CatalogCommand::AddProduct(draft)).await;
    }

    /// Submits a review for a product.
    pub async fn submit_review(&mut self, product_id: ProductId, review: Review) {
        self.execute(CatalogCommand::SubmitReview { product_id, review })
            .await;
    }

    /// Deletes a product.
    pub async fn delete_product(&mut self, product_id: ProductId) {
        self.execute(CatalogCommand::DeleteProduct(product_id)).await;
    }
}
