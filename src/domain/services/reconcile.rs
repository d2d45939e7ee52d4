//! Reconciliation of the local product collection with server responses.
//!
//! The server is authoritative: every successful mutation hands back the
//! entity as stored and the local copy is patched to match it. Order is never
//! changed beyond appending and removing.

use crate::domain::entities::{Product, ProductId};

/// Replaces the entry whose id matches `updated` with `updated`.
///
/// Returns `false` and leaves the collection untouched when no entry matches.
pub fn replace_by_id(products: &mut [Product], updated: Product) -> bool {
    match products.iter_mut().find(|p| p.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Appends a newly created product.
///
/// An entry already holding the same id is replaced in place so ids stay
/// unique within the collection.
pub fn append(products: &mut Vec<Product>, created: Product) {
    if products.iter().any(|p| p.id() == created.id()) {
        replace_by_id(products, created);
    } else {
        products.push(created);
    }
}

/// Removes the entry with the given id, keeping the order of the rest.
///
/// Returns whether an entry was removed.
pub fn remove_by_id(products: &mut Vec<Product>, product_id: &ProductId) -> bool {
    let before = products.len();
    products.retain(|p| p.id() != product_id);
    products.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Review;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("a", "Alpha", "first", "img-a"),
            Product::new("b", "Beta", "second", "img-b"),
            Product::new("c", "Gamma", "third", "img-c"),
        ]
    }

    #[test]
    fn test_replace_only_touches_matching_entry() {
        let mut products = sample();
        let original = products.clone();
        let updated = Product::new("b", "Beta", "second", "img-b")
            .with_reviews(vec![Review::new("ann", 5, "love it")]);

        assert!(replace_by_id(&mut products, updated.clone()));

        assert_eq!(products.len(), 3);
        assert_eq!(products[0], original[0]);
        assert_eq!(products[1], updated);
        assert_eq!(products[2], original[2]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut products = sample();
        let original = products.clone();

        assert!(!replace_by_id(&mut products, Product::new("zzz", "", "", "")));
        assert_eq!(products, original);
    }

    #[test]
    fn test_append_adds_at_end() {
        let mut products = sample();
        let created = Product::new("d", "Delta", "fourth", "img-d");

        append(&mut products, created.clone());

        assert_eq!(products.len(), 4);
        assert_eq!(products.last(), Some(&created));
    }

    #[test]
    fn test_append_existing_id_keeps_ids_unique() {
        let mut products = sample();
        append(&mut products, Product::new("a", "Alpha v2", "first", "img-a"));

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name(), "Alpha v2");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut products = sample();

        assert!(remove_by_id(&mut products, &ProductId::new("b")));

        let ids: Vec<&str> = products.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut products = sample();
        assert!(!remove_by_id(&mut products, &ProductId::new("nope")));
        assert_eq!(products.len(), 3);
    }
}
