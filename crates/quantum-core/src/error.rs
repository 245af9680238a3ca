//! # Error Types
//!
//! Domain-specific error types for quantum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  quantum-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog and purchase rule violations        │
//! │  └── ValidationError  - Field-level validation failures             │
//! │                                                                     │
//! │  quantum-store errors (separate crate)                              │
//! │  └── StoreError       - What the storefront caller sees             │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Caller            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ISBN, title, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent catalog or purchase rule violations. Every one
/// of them is an expected, recoverable condition local to a single
/// operation; none is process-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No book with the given ISBN exists in the catalog.
    #[error("Book not found: no book with ISBN {0}")]
    BookNotFound(String),

    /// A book with the given ISBN already exists in the catalog.
    ///
    /// ## When This Occurs
    /// - Adding a book whose ISBN key is already taken
    ///
    /// The original entry is left untouched.
    #[error("Duplicate ISBN: a book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    /// The construction type tag is not one of the recognized set.
    #[error("Invalid book type: {0}")]
    InvalidBookType(String),

    /// Purchase attempted on a book without the purchase capability.
    #[error("Not for sale: the book titled '{title}' is not for sale")]
    NotPurchasable { title: String },

    /// Insufficient stock to complete a purchase.
    ///
    /// ## When This Occurs
    /// - Requesting more copies of a paper book than are on hand
    ///
    /// ## User Workflow
    /// ```text
    /// Buy (qty: 20)
    ///      │
    ///      ▼
    /// Check stock: available = 8
    ///      │
    ///      ▼
    /// InsufficientStock { title: "Clean Code", requested: 20, available: 8 }
    ///      │
    ///      ▼
    /// Result message: "only 8 copies are available"
    /// ```
    #[error(
        "Insufficient stock: {requested} copies of '{title}' were requested \
         but only {available} copies are available"
    )]
    InsufficientStock {
        title: String,
        requested: i64,
        available: i64,
    },

    /// Purchase quantity was zero or negative.
    #[error("Invalid purchase quantity: {quantity}, quantity must be positive")]
    InvalidQuantity { quantity: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// These errors occur when input doesn't meet field requirements.
/// Used for early validation before catalog or purchase logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (wrong characters, wrong parameter type).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
