use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewProductDraft, Product, Review};
use crate::domain::serde_utils::string_or_u32;

/// Catalog product as returned by the backend.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub reviews: Vec<ReviewResponse>,
}

/// Review embedded in a product response.
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub user: String,
    #[serde(with = "string_or_u32")]
    pub rating: u32,
    #[serde(default)]
    pub comment: String,
}

impl From<ReviewResponse> for Review {
    fn from(value: ReviewResponse) -> Self {
        Self::new(value.user, value.rating, value.comment)
    }
}

impl From<ProductResponse> for Product {
    fn from(value: ProductResponse) -> Self {
        Self::new(value.id, value.name, value.description, value.image)
            .with_reviews(value.reviews.into_iter().map(Review::from).collect())
    }
}

/// Body of `POST /products`.
#[derive(Debug, Serialize)]
pub struct CreateProductRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image: &'a str,
}

impl<'a> From<&'a NewProductDraft> for CreateProductRequest<'a> {
    fn from(draft: &'a NewProductDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            image: &draft.image,
        }
    }
}

/// Body of `POST /products/:id/review`.
#[derive(Debug, Serialize)]
pub struct ReviewRequest<'a> {
    pub user: &'a str,
    pub rating: u32,
    pub comment: &'a str,
}

impl<'a> From<&'a Review> for ReviewRequest<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            user: review.user(),
            rating: review.rating(),
            comment: review.comment(),
        }
    }
}

/// Backend error body.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}
