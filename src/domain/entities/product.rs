//! Catalog product entity.

use serde::{Deserialize, Serialize};

use super::Review;

/// Server-assigned product identifier.
///
/// Opaque to the client; only compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A product in the review catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    image: String,
    reviews: Vec<Review>,
}

impl Product {
    /// Creates a product with no reviews.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            reviews: Vec::new(),
        }
    }

    /// Sets the product reviews.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Returns the server-assigned id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the image URL.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns reviews in server order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns the mean rating, if any reviews exist.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u64 = self.reviews.iter().map(|r| u64::from(r.rating())).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("abc123", "Kettle", "Boils water", "http://img/kettle.png");

        assert_eq!(product.id().as_str(), "abc123");
        assert_eq!(product.name(), "Kettle");
        assert!(product.reviews().is_empty());
        assert!(product.average_rating().is_none());
    }

    #[test]
    fn test_average_rating() {
        let product = Product::new("p1", "Lamp", "Bright", "").with_reviews(vec![
            Review::new("ann", 4, "good"),
            Review::new("bob", 5, "great"),
        ]);

        assert_eq!(product.average_rating(), Some(4.5));
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("64f1c0ffee");
        assert_eq!(format!("{id}"), "64f1c0ffee");
    }
}
