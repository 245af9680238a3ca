//! # Store Error Type
//!
//! Unified error type for storefront operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Quantum Store                    │
//! │                                                                     │
//! │  Caller                          Storefront                         │
//! │  ──────                          ──────────                         │
//! │                                                                     │
//! │  add_book("paper", ...)                                             │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  BookStore operation                                         │  │
//! │  │  Result<T, StoreError>                                       │  │
//! │  │         │                                                    │  │
//! │  │  CoreError::DuplicateIsbn ──────► StoreError ───────────────►│  │
//! │  │  CoreError::Validation ─────────► StoreError ───────────────►│  │
//! │  │  Success ───────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  A purchase never surfaces a StoreError: buy_book always returns   │
//! │  a PurchaseResult, carrying the failure message when it fails.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use quantum_core::CoreError;

/// Store error returned from catalog-mutating operations.
///
/// ## Serialization
/// This is what a caller at a JSON boundary receives on failure:
/// ```json
/// {
///   "code": "DUPLICATE_ISBN",
///   "message": "Duplicate ISBN: a book with ISBN 978-1 already exists"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for storefront responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No book under the requested ISBN
    NotFound,

    /// Field or parameter validation failed
    ValidationError,

    /// ISBN key already taken
    DuplicateIsbn,

    /// Construction type tag not recognized
    InvalidBookType,

    /// Purchase attempted on a non-purchasable variant
    NotPurchasable,

    /// Requested quantity exceeds available stock
    InsufficientStock,

    /// Non-positive purchase quantity
    InvalidQuantity,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to store errors, preserving the message text.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::BookNotFound(_) => ErrorCode::NotFound,
            CoreError::DuplicateIsbn(_) => ErrorCode::DuplicateIsbn,
            CoreError::InvalidBookType(_) => ErrorCode::InvalidBookType,
            CoreError::NotPurchasable { .. } => ErrorCode::NotPurchasable,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        StoreError::new(code, err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// Unit Tests
// =============================================================================
