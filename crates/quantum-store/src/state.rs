//! # Catalog State
//!
//! Shared ownership wrapper around the catalog.
//!
//! ## Thread Safety
//! The catalog is wrapped in `Arc<Mutex<T>>` because:
//! 1. The storefront may be shared across threads by its host
//! 2. Only one caller may run a purchase transaction at a time
//! 3. The whole-catalog lock is the transaction boundary: every
//!    validate-then-mutate sequence runs under one acquisition, so a
//!    concurrent caller can never observe a half-applied purchase
//!
//! ## Why Not RwLock?
//! Catalog operations are quick, and the hot path (purchasing) writes.
//! A RwLock would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use quantum_core::Catalog;

/// Shared catalog state.
///
/// ## Usage
/// ```rust
/// use quantum_store::CatalogState;
///
/// let state = CatalogState::new();
/// let count = state.with_catalog(|catalog| catalog.len());
/// assert_eq!(count, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Creates state holding an empty catalog.
    pub fn new() -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(Catalog::new())),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    ///
    /// The closure runs under the lock; a purchase transaction performs
    /// its whole validate-and-decrement sequence inside one call.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
