//! Catalog backend port.

use async_trait::async_trait;

use crate::domain::entities::{NewProductDraft, Product, ProductId, Review};
use crate::domain::errors::CatalogError;

/// Port for the remote product collection.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetches the full product collection in server order.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Creates a product from the draft and returns the stored product.
    async fn create_product(&self, draft: &NewProductDraft) -> Result<Product, CatalogError>;

    /// Adds a review and returns the product with reviews merged server-side.
    async fn submit_review(
        &self,
        product_id: &ProductId,
        review: &Review,
    ) -> Result<Product, CatalogError>;

    /// Deletes a product.
    async fn delete_product(&self, product_id: &ProductId) -> Result<(), CatalogError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory catalog backend for testing.
    pub struct MockCatalogPort {
        products: Arc<RwLock<Vec<Product>>>,
        should_succeed: Arc<AtomicBool>,
        next_id: AtomicUsize,
        fetch_calls: AtomicUsize,
    }

    impl MockCatalogPort {
        /// Creates a backend holding the given products.
        pub fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: Arc::new(RwLock::new(products)),
                should_succeed: Arc::new(AtomicBool::new(true)),
                next_id: AtomicUsize::new(100),
                fetch_calls: AtomicUsize::new(0),
            }
        }

        /// Creates a backend that rejects every request.
        pub fn failing() -> Self {
            let port = Self::with_products(Vec::new());
            port.set_should_succeed(false);
            port
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns how many times the collection was fetched.
        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }

        /// Returns a snapshot of the server-side collection.
        pub async fn snapshot(&self) -> Vec<Product> {
            self.products.read().await.clone()
        }

        fn check(&self) -> Result<(), CatalogError> {
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(CatalogError::status(500, "mock failure"))
            }
        }
    }

    #[async_trait]
    impl CatalogPort for MockCatalogPort {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            Ok(self.products.read().await.clone())
        }

        async fn create_product(&self, draft: &NewProductDraft) -> Result<Product, CatalogError> {
            self.check()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let product = Product::new(
                format!("id-{id}"),
                draft.name.clone(),
                draft.description.clone(),
                draft.image.clone(),
            );
            self.products.write().await.push(product.clone());
            Ok(product)
        }

        async fn submit_review(
            &self,
            product_id: &ProductId,
            review: &Review,
        ) -> Result<Product, CatalogError> {
            self.check()?;
            let mut products = self.products.write().await;
            let product = products
                .iter_mut()
                .find(|p| p.id() == product_id)
                .ok_or_else(|| CatalogError::status(404, "product not found"))?;
            let mut reviews = product.reviews().to_vec();
            reviews.push(review.clone());
            *product = product.clone().with_reviews(reviews);
            Ok(product.clone())
        }

        async fn delete_product(&self, product_id: &ProductId) -> Result<(), CatalogError> {
            self.check()?;
            let mut products = self.products.write().await;
            let before = products.len();
            products.retain(|p| p.id() != product_id);
            if products.len() == before {
                return Err(CatalogError::status(404, "product not found"));
            }
            Ok(())
        }
    }
}
