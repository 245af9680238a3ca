//! # quantum-core: Pure Business Logic for the Quantum Bookstore
//!
//! This crate is the **heart** of the Quantum Bookstore. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Quantum Bookstore Architecture                    │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 quantum-store (storefront)                  │   │
//! │  │   add_book ──► buy_book ──► remove_outdated_books           │   │
//! │  │   CatalogState (Arc<Mutex>) • fulfillment dispatch          │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              ★ quantum-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │  │  book   │ │  money  │ │ catalog │ │ factory │ │ valid │ │   │
//! │  │  │  Book   │ │  Money  │ │ Catalog │ │  tags   │ │ ation │ │   │
//! │  │  │ BookKind│ │  cents  │ │  ISBN   │ │ extras  │ │ rules │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The book entity, its variants, and capability rules
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The ISBN-keyed owning collection
//! - [`factory`] - Type-tag construction from loosely-typed parameters
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quantum_core::{factory, Catalog};
//!
//! let mut catalog = Catalog::new();
//!
//! // "paper" tag with an initial stock of 10, price $45.99 (4599 cents)
//! let book = factory::create_book(
//!     "paper",
//!     "978-1234567890",
//!     "Clean Code",
//!     2008,
//!     4599,
//!     &[serde_json::json!(10)],
//! ).unwrap();
//!
//! catalog.add(book).unwrap();
//! assert!(catalog.get("978-1234567890").is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod catalog;
pub mod error;
pub mod factory;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quantum_core::Book` instead of
// `use quantum_core::book::Book`

pub use book::{Book, BookKind, Capability};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// File format assigned to an ebook when the caller does not supply one.
///
/// ## Why a constant?
/// The default lives in exactly one place, shared by the factory and by
/// callers that construct [`BookKind::Ebook`] directly.
pub const DEFAULT_EBOOK_FORMAT: &str = "pdf";
