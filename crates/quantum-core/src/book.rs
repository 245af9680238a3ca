//! # Book Model
//!
//! The book entity, its variants, and the capability rules that decide
//! which operations are legal on each variant.
//!
//! ## Variant/Capability Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Book Variants & Capabilities                     │
//! │                                                                     │
//! │  Variant     Extra State          Purchase   Ship    Email         │
//! │  ─────────   ──────────────────   ────────   ─────   ─────         │
//! │  Paper       stock (mutable)        ✅        ✅      ─            │
//! │  Ebook       file_format            ✅        ─       ✅           │
//! │  Showcase    none                   ─         ─       ─            │
//! │                                                                     │
//! │  The capability set is fixed at construction and never changes.    │
//! │  Callers query capabilities; they never compare type names.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Invariant
//! `stock` for a paper book never goes negative. The only code path that
//! decrements it is [`Book::apply_purchase`], which re-validates the
//! requested quantity even when the purchase pipeline has already
//! pre-checked it, so the operation stays safe called standalone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_file_format, validate_isbn, validate_price_cents, validate_stock, validate_title,
    validate_year,
};

// =============================================================================
// Capability
// =============================================================================

/// A named behavior a book variant may or may not support.
///
/// The purchase pipeline asks a [`Book`] whether it supports a capability
/// and obtains the appropriate behavior; there is no type-name comparison
/// anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The book can be bought (stock or unlimited digital copies).
    Purchase,
    /// A successful purchase is fulfilled by shipping to an address.
    Ship,
    /// A successful purchase is fulfilled by emailing a digital copy.
    Email,
}

// =============================================================================
// Book Kind
// =============================================================================

/// The fixed set of book variants, carrying exactly the per-variant state
/// each one needs.
///
/// Serialized internally tagged; the tag values double as the factory's
/// construction type tags (`"paper"`, `"ebook"`, `"showcase"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookKind {
    /// Physical book with on-hand stock; shipped on purchase.
    Paper { stock: i64 },
    /// Digital book with unlimited copies; emailed on purchase.
    Ebook { file_format: String },
    /// Display-only entry; not for sale.
    Showcase,
}

// =============================================================================
// Book
// =============================================================================

/// A catalog entry.
///
/// ## Identity and Ownership
/// - `isbn` is the unique catalog key
/// - `isbn`, `title`, `year`, and `price_cents` are immutable for the
///   lifetime of the entity
/// - Once added, the [`Catalog`](crate::Catalog) is the sole owner; other
///   components only see short-lived references or cloned snapshots
///
/// Fields are private: the stock invariant would not survive arbitrary
/// external mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    year: i32,
    price_cents: i64,
    #[serde(flatten)]
    kind: BookKind,
}

impl Book {
    /// Creates a book after validating identity fields and per-variant
    /// state.
    ///
    /// ## Example
    /// ```rust
    /// use quantum_core::{Book, BookKind};
    ///
    /// let book = Book::new(
    ///     "978-1234567890",
    ///     "Clean Code",
    ///     2008,
    ///     4599,
    ///     BookKind::Paper { stock: 10 },
    /// ).unwrap();
    ///
    /// assert_eq!(book.stock(), Some(10));
    /// ```
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        price_cents: i64,
        kind: BookKind,
    ) -> Result<Self, ValidationError> {
        let isbn = isbn.into();
        let title = title.into();

        validate_isbn(&isbn)?;
        validate_title(&title)?;
        validate_year(year)?;
        validate_price_cents(price_cents)?;

        match &kind {
            BookKind::Paper { stock } => validate_stock(*stock)?,
            BookKind::Ebook { file_format } => validate_file_format(file_format)?,
            BookKind::Showcase => {}
        }

        Ok(Book {
            isbn,
            title,
            year,
            price_cents,
            kind,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The unique catalog key.
    #[inline]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Display title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publication year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Unit price in cents.
    #[inline]
    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    /// Unit price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The variant and its state.
    #[inline]
    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    /// On-hand stock for a paper book, `None` for other variants.
    pub fn stock(&self) -> Option<i64> {
        match &self.kind {
            BookKind::Paper { stock } => Some(*stock),
            _ => None,
        }
    }

    /// File format for an ebook, `None` for other variants.
    pub fn file_format(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Ebook { file_format } => Some(file_format),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Capability Queries
    // -------------------------------------------------------------------------

    /// The capability set of this book's variant, fixed at construction.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self.kind {
            BookKind::Paper { .. } => &[Capability::Purchase, Capability::Ship],
            BookKind::Ebook { .. } => &[Capability::Purchase, Capability::Email],
            BookKind::Showcase => &[],
        }
    }

    /// Checks whether this book supports the given capability.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Checks whether this book can be bought at all.
    #[inline]
    pub fn is_purchasable(&self) -> bool {
        self.supports(Capability::Purchase)
    }

    /// Checks whether a successful purchase is fulfilled by shipping.
    #[inline]
    pub fn requires_shipping(&self) -> bool {
        self.supports(Capability::Ship)
    }

    /// Checks whether a successful purchase is fulfilled by email.
    #[inline]
    pub fn is_emailable(&self) -> bool {
        self.supports(Capability::Email)
    }

    // -------------------------------------------------------------------------
    // Purchase Rules
    // -------------------------------------------------------------------------

    /// Checks whether the requested quantity could be purchased right now.
    ///
    /// ## Per Variant
    /// - Paper: `stock >= quantity`
    /// - Ebook: always true (unlimited digital copies)
    /// - Showcase: always false
    pub fn can_purchase(&self, quantity: i64) -> bool {
        match &self.kind {
            BookKind::Paper { stock } => *stock >= quantity,
            BookKind::Ebook { .. } => true,
            BookKind::Showcase => false,
        }
    }

    /// Applies a purchase of `quantity` copies to this book's state.
    ///
    /// ## Per Variant
    /// - Paper: decrements stock, failing with
    ///   [`CoreError::InsufficientStock`] when `quantity > stock`
    /// - Ebook: no state change
    /// - Showcase: fails with [`CoreError::NotPurchasable`]
    ///
    /// The quantity and stock are re-validated here even though the
    /// purchase pipeline pre-checks them; a failed call never changes
    /// stock.
    pub fn apply_purchase(&mut self, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity { quantity });
        }

        match &mut self.kind {
            BookKind::Paper { stock } => {
                if quantity > *stock {
                    return Err(CoreError::InsufficientStock {
                        title: self.title.clone(),
                        requested: quantity,
                        available: *stock,
                    });
                }
                *stock -= quantity;
                Ok(())
            }
            BookKind::Ebook { .. } => Ok(()),
            BookKind::Showcase => Err(CoreError::NotPurchasable {
                title: self.title.clone(),
            }),
        }
    }
}

/// Catalog-listing format, one line per book.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Year: {}, Price: {}",
            self.isbn,
            self.title,
            self.year,
            self.price()
        )?;
        match &self.kind {
            BookKind::Paper { stock } => write!(f, ", Stock: {}", stock),
            BookKind::Ebook { file_format } => write!(f, ", Format: {}", file_format),
            BookKind::Showcase => write!(f, " (Showcase - Not for sale)"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(stock: i64) -> Book {
        Book::new("978-1", "Clean Code", 2008, 4599, BookKind::Paper { stock }).unwrap()
    }

    fn ebook() -> Book {
        Book::new(
            "978-2",
            "Design Patterns",
            1994,
            2999,
            BookKind::Ebook {
                file_format: "epub".to_string(),
            },
        )
        .unwrap()
    }

    fn showcase() -> Book {
        Book::new("978-3", "New Release Preview", 2024, 0, BookKind::Showcase).unwrap()
    }

    #[test]
    fn test_capability_sets_are_fixed_per_variant() {
        assert_eq!(
            paper(1).capabilities(),
            &[Capability::Purchase, Capability::Ship]
        );
        assert_eq!(
            ebook().capabilities(),
            &[Capability::Purchase, Capability::Email]
        );
        assert!(showcase().capabilities().is_empty());
    }

    #[test]
    fn test_capability_predicates() {
        let p = paper(1);
        assert!(p.is_purchasable());
        assert!(p.requires_shipping());
        assert!(!p.is_emailable());

        let e = ebook();
        assert!(e.is_purchasable());
        assert!(!e.requires_shipping());
        assert!(e.is_emailable());

        let s = showcase();
        assert!(!s.is_purchasable());
        assert!(!s.requires_shipping());
        assert!(!s.is_emailable());
    }

    #[test]
    fn test_can_purchase_stock_boundary() {
        let p = paper(10);
        assert!(p.can_purchase(10)); // exactly the stock on hand
        assert!(!p.can_purchase(11));

        assert!(ebook().can_purchase(1_000_000)); // unlimited copies
        assert!(!showcase().can_purchase(1));
    }

    #[test]
    fn test_apply_purchase_decrements_paper_stock() {
        let mut p = paper(10);
        p.apply_purchase(2).unwrap();
        assert_eq!(p.stock(), Some(8));

        p.apply_purchase(8).unwrap();
        assert_eq!(p.stock(), Some(0));
    }

    #[test]
    fn test_apply_purchase_insufficient_stock_leaves_stock_unchanged() {
        let mut p = paper(8);
        let err = p.apply_purchase(20).unwrap_err();

        match err {
            CoreError::InsufficientStock {
                title,
                requested,
                available,
            } => {
                assert_eq!(title, "Clean Code");
                assert_eq!(requested, 20);
                assert_eq!(available, 8);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
        assert_eq!(p.stock(), Some(8));
    }

    #[test]
    fn test_apply_purchase_ebook_is_a_no_op() {
        let mut e = ebook();
        let before = e.clone();
        e.apply_purchase(500).unwrap();
        assert_eq!(e, before);
    }

    #[test]
    fn test_apply_purchase_showcase_is_rejected() {
        let mut s = showcase();
        let err = s.apply_purchase(1).unwrap_err();
        assert!(matches!(err, CoreError::NotPurchasable { title } if title == "New Release Preview"));
    }

    #[test]
    fn test_apply_purchase_rejects_non_positive_quantity() {
        let mut p = paper(10);
        assert!(matches!(
            p.apply_purchase(0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        ));
        assert!(matches!(
            p.apply_purchase(-5),
            Err(CoreError::InvalidQuantity { quantity: -5 })
        ));
        assert_eq!(p.stock(), Some(10));
    }

    #[test]
    fn test_new_validates_fields() {
        assert!(Book::new("", "T", 2020, 100, BookKind::Showcase).is_err());
        assert!(Book::new("978-1", "", 2020, 100, BookKind::Showcase).is_err());
        assert!(Book::new("978-1", "T", 0, 100, BookKind::Showcase).is_err());
        assert!(Book::new("978-1", "T", 2020, -1, BookKind::Showcase).is_err());
        assert!(Book::new("978-1", "T", 2020, 100, BookKind::Paper { stock: -1 }).is_err());
        assert!(Book::new(
            "978-1",
            "T",
            2020,
            100,
            BookKind::Ebook {
                file_format: String::new()
            }
        )
        .is_err());
    }

    #[test]
    fn test_display_per_variant() {
        assert_eq!(
            paper(10).to_string(),
            "ISBN: 978-1, Title: Clean Code, Year: 2008, Price: $45.99, Stock: 10"
        );
        assert_eq!(
            ebook().to_string(),
            "ISBN: 978-2, Title: Design Patterns, Year: 1994, Price: $29.99, Format: epub"
        );
        assert_eq!(
            showcase().to_string(),
            "ISBN: 978-3, Title: New Release Preview, Year: 2024, Price: $0.00 (Showcase - Not for sale)"
        );
    }

    #[test]
    fn test_serde_tag_matches_factory_tags() {
        let json = serde_json::to_value(paper(10)).unwrap();
        assert_eq!(json["type"], "paper");
        assert_eq!(json["stock"], 10);

        let json = serde_json::to_value(ebook()).unwrap();
        assert_eq!(json["type"], "ebook");

        let json = serde_json::to_value(showcase()).unwrap();
        assert_eq!(json["type"], "showcase");
    }
}
