//! Catalog backend error types.

use thiserror::Error;

/// Failure talking to the catalog backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("unexpected catalog error: {message}")]
    Unexpected { message: String },
}

impl CatalogError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Catalog operation kinds, used to pick the user-facing failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    /// Loading the product collection.
    Fetch,
    /// Creating a product.
    Add,
    /// Attaching a review to a product.
    SubmitReview,
    /// Deleting a product.
    Delete,
}

impl CatalogOperation {
    /// Returns the message shown when this operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch products",
            Self::Add => "Failed to add product",
            Self::SubmitReview => "Failed to submit review",
            Self::Delete => "Failed to delete product",
        }
    }
}

impl std::fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Add => write!(f, "add"),
            Self::SubmitReview => write!(f, "submit-review"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            CatalogOperation::Fetch.failure_message(),
            "Failed to fetch products"
        );
        assert_eq!(CatalogOperation::Add.failure_message(), "Failed to add product");
        assert_eq!(
            CatalogOperation::SubmitReview.failure_message(),
            "Failed to submit review"
        );
        assert_eq!(
            CatalogOperation::Delete.failure_message(),
            "Failed to delete product"
        );
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::status(404, "product not found");
        assert_eq!(err.to_string(), "backend returned 404: product not found");
        assert_eq!(
            CatalogError::network("refused").to_string(),
            "network error: refused"
        );
    }
}
