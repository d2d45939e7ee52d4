//! Domain services.

/// Reconciles the local collection with server responses.
pub mod reconcile;
