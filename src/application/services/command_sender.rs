//! Channel-backed [`CatalogActions`] implementation.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::application::dto::CatalogCommand;
use crate::domain::entities::{NewProductDraft, ProductId, Review};
use crate::domain::ports::CatalogActions;

/// Forwards view requests to the catalog owner's command queue.
#[derive(Debug, Clone)]
pub struct CatalogCommandSender {
    tx: mpsc::UnboundedSender<CatalogCommand>,
}

impl CatalogCommandSender {
    /// Creates a sender and the receiving end of its queue.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CatalogCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn dispatch(&self, command: CatalogCommand) {
        debug!(operation = %command.operation(), "Dispatching catalog command");
        if let Err(e) = self.tx.send(command) {
            warn!(operation = %e.0.operation(), "Catalog command queue is closed");
        }
    }
}

impl CatalogActions for CatalogCommandSender {
    fn add_product(&self, draft: NewProductDraft) {
        self.dispatch(CatalogCommand::AddProduct(draft));
    }

    fn submit_review(&self, product_id: ProductId, review: Review) {
        self.dispatch(CatalogCommand::SubmitReview { product_id, review });
    }

    fn delete_product(&self, product_id: ProductId) {
        self.dispatch(CatalogCommand::DeleteProduct(product_id));
    }
}
