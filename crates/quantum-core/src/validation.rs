//! # Validation Module
//!
//! Field-level validation rules for the Quantum Bookstore.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Factory boundary                                          │
//! │  ├── Type tag recognition                                           │
//! │  └── Extra-parameter shape (integer stock, string format)           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field rules                                 │
//! │  ├── ISBN, title, price, year, file format                          │
//! │  └── Rejected before any Book is constructed                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Catalog / purchase rules (CoreError)                      │
//! │  ├── Duplicate ISBN                                                 │
//! │  └── Capability and stock checks                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quantum_core::validation::{validate_isbn, validate_title};
//!
//! validate_isbn("978-1234567890").unwrap();
//! validate_title("Clean Code").unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an ISBN.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Must not contain whitespace
///
/// The store accepts legacy catalog keys alongside ISBN-10/13 strings,
/// so no checksum is computed.
///
/// ## Example
/// ```rust
/// use quantum_core::validation::validate_isbn;
///
/// assert!(validate_isbn("978-1234567890").is_ok());
/// assert!(validate_isbn("").is_err());
/// assert!(validate_isbn("has space").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(ValidationError::Required {
            field: "isbn".to_string(),
        });
    }

    if isbn.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "isbn".to_string(),
            max: 50,
        });
    }

    if isbn.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an ebook file format.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 10 characters
/// - Must be alphanumeric ("pdf", "epub", "mobi", ...)
pub fn validate_file_format(format: &str) -> ValidationResult<()> {
    let format = format.trim();

    if format.is_empty() {
        return Err(ValidationError::Required {
            field: "file_format".to_string(),
        });
    }

    if format.len() > 10 {
        return Err(ValidationError::TooLong {
            field: "file_format".to_string(),
            max: 10,
        });
    }

    if !format.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "file_format".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (showcase entries carry no price)
///
/// ## Example
/// ```rust
/// use quantum_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4599).is_ok()); // $45.99
/// assert!(validate_price_cents(0).is_ok());    // Showcase entry
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a publication year.
///
/// ## Rules
/// - Must be between 1 and 9999
pub fn validate_year(year: i32) -> ValidationResult<()> {
    if !(1..=9999).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "year".to_string(),
            min: 1,
            max: 9999,
        });
    }

    Ok(())
}

/// Validates an initial stock count for a paper book.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out-of-print titles stay listed)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_isbn() {
        // Valid ISBNs and legacy keys
        assert!(validate_isbn("978-1234567890").is_ok());
        assert!(validate_isbn("X1").is_ok());
        assert!(validate_isbn("123-dup").is_ok());

        // Invalid ISBNs
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("   ").is_err());
        assert!(validate_isbn("has space").is_err());
        assert!(validate_isbn(&"9".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Clean Code").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_file_format() {
        assert!(validate_file_format("pdf").is_ok());
        assert!(validate_file_format("epub").is_ok());
        assert!(validate_file_format("").is_err());
        assert!(validate_file_format("e-pub").is_err());
        assert!(validate_file_format("averylongformat").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(4599).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(2008).is_ok());
        assert!(validate_year(1).is_ok());
        assert!(validate_year(9999).is_ok());
        assert!(validate_year(0).is_err());
        assert!(validate_year(-50).is_err());
        assert!(validate_year(10000).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
