//! # Construction Factory
//!
//! Translates a type tag and loosely-typed extra parameters into a
//! validated [`Book`].
//!
//! ## Recognized Tags
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   Tag (case-insensitive)   Extra parameter        Default           │
//! │   ──────────────────────   ──────────────────     ───────           │
//! │   "paper"                  initial stock (int)    0                 │
//! │   "ebook"                  file format (string)   "pdf"             │
//! │   "showcase"               none                   -                 │
//! │                                                                     │
//! │   Anything else fails with InvalidBookType carrying the tag.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extra parameters arrive as `serde_json::Value`, the shape a JSON
//! boundary hands over. A type mismatch (a string where an integer stock
//! is expected) is a construction error, never silently coerced. The tag
//! resolves to a [`BookKind`] carrying exactly the fields the variant
//! needs, so no loose typing survives past this boundary.

use serde_json::Value;

use crate::book::{Book, BookKind};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::DEFAULT_EBOOK_FORMAT;

/// Resolves a type tag and extra parameters into a variant configuration.
///
/// ## Example
/// ```rust
/// use quantum_core::{factory, BookKind};
/// use serde_json::json;
///
/// let kind = factory::resolve_kind("paper", &[json!(10)]).unwrap();
/// assert_eq!(kind, BookKind::Paper { stock: 10 });
///
/// // Omitted extras fall back to defaults
/// let kind = factory::resolve_kind("ebook", &[]).unwrap();
/// assert_eq!(kind, BookKind::Ebook { file_format: "pdf".to_string() });
/// ```
pub fn resolve_kind(type_tag: &str, extra: &[Value]) -> CoreResult<BookKind> {
    match type_tag.to_lowercase().as_str() {
        "paper" => {
            let stock = match extra.first() {
                Some(value) => value.as_i64().ok_or_else(|| ValidationError::InvalidFormat {
                    field: "stock".to_string(),
                    reason: "must be an integer".to_string(),
                })?,
                None => 0,
            };
            Ok(BookKind::Paper { stock })
        }
        "ebook" => {
            let file_format = match extra.first() {
                Some(value) => value
                    .as_str()
                    .ok_or_else(|| ValidationError::InvalidFormat {
                        field: "file_format".to_string(),
                        reason: "must be a string".to_string(),
                    })?
                    .to_string(),
                None => DEFAULT_EBOOK_FORMAT.to_string(),
            };
            Ok(BookKind::Ebook { file_format })
        }
        "showcase" => Ok(BookKind::Showcase),
        _ => Err(CoreError::InvalidBookType(type_tag.to_string())),
    }
}

/// Creates a fully validated book from a type tag and identity fields.
///
/// Composes [`resolve_kind`] with [`Book::new`]; every field and
/// per-variant value passes validation before a `Book` exists.
pub fn create_book(
    type_tag: &str,
    isbn: &str,
    title: &str,
    year: i32,
    price_cents: i64,
    extra: &[Value],
) -> CoreResult<Book> {
    let kind = resolve_kind(type_tag, extra)?;
    Ok(Book::new(isbn, title, year, price_cents, kind)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paper_with_initial_stock() {
        let book = create_book("paper", "978-1", "Clean Code", 2008, 4599, &[json!(10)]).unwrap();
        assert_eq!(book.stock(), Some(10));
        assert!(book.requires_shipping());
    }

    #[test]
    fn test_paper_stock_defaults_to_zero() {
        let book = create_book("paper", "978-1", "Clean Code", 2008, 4599, &[]).unwrap();
        assert_eq!(book.stock(), Some(0));
    }

    #[test]
    fn test_ebook_with_file_format() {
        let book = create_book(
            "ebook",
            "978-2",
            "Design Patterns",
            1994,
            2999,
            &[json!("epub")],
        )
        .unwrap();
        assert_eq!(book.file_format(), Some("epub"));
        assert!(book.is_emailable());
    }

    #[test]
    fn test_ebook_format_defaults_to_pdf() {
        let book = create_book("ebook", "978-2", "Java Programming", 2020, 2599, &[]).unwrap();
        assert_eq!(book.file_format(), Some("pdf"));
    }

    #[test]
    fn test_showcase_ignores_extras() {
        let book =
            create_book("showcase", "978-3", "New Release Preview", 2024, 0, &[json!(42)]).unwrap();
        assert_eq!(*book.kind(), BookKind::Showcase);
        assert!(!book.is_purchasable());
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        assert!(resolve_kind("PAPER", &[json!(1)]).is_ok());
        assert!(resolve_kind("EBook", &[]).is_ok());
        assert!(resolve_kind("ShowCase", &[]).is_ok());
    }

    #[test]
    fn test_unrecognized_tag_carries_the_offending_value() {
        let err = create_book("audiobook", "978-4", "Spoken Word", 2021, 1999, &[]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBookType(tag) if tag == "audiobook"));
    }

    #[test]
    fn test_non_integer_stock_is_a_construction_error() {
        // A string where an integer is expected is never coerced
        let err = resolve_kind("paper", &[json!("10")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { field, .. }) if field == "stock"
        ));

        // Fractional values are not integers either
        assert!(resolve_kind("paper", &[json!(10.5)]).is_err());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let err = create_book("paper", "978-1", "Clean Code", 2008, 4599, &[json!(-3)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_non_string_format_is_a_construction_error() {
        let err = resolve_kind("ebook", &[json!(7)]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { field, .. })
                if field == "file_format"
        ));
    }
}
