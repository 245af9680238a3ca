//! # Book Store Service
//!
//! The public storefront surface and the purchase transaction pipeline.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use quantum_core::{factory, Book, CoreError, CoreResult, Money};

use crate::error::StoreError;
use crate::fulfillment::{ConsoleMailer, ConsoleShipping, MailService, ShippingService};
use crate::state::CatalogState;

// =============================================================================
// Purchase Result
// =============================================================================

/// The outcome of one purchase transaction.
///
/// Produced fresh per transaction and never mutated after construction.
/// Failures carry a zero paid amount alongside the failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    /// Total amount paid; zero when the purchase failed.
    pub paid_amount: Money,

    /// Human-readable outcome description.
    pub message: String,

    /// Whether the purchase went through.
    pub successful: bool,
}

impl PurchaseResult {
    /// Builds a successful result carrying the paid total.
    pub fn success(amount: Money, message: impl Into<String>) -> Self {
        PurchaseResult {
            paid_amount: amount,
            message: message.into(),
            successful: true,
        }
    }

    /// Builds a failed result; the paid amount is always zero.
    pub fn failure(message: impl Into<String>) -> Self {
        PurchaseResult {
            paid_amount: Money::zero(),
            message: message.into(),
            successful: false,
        }
    }
}

// =============================================================================
// Book Store
// =============================================================================

/// The Quantum Bookstore storefront.
///
/// Owns the shared catalog state and the fulfillment collaborator seams.
/// All business rules live in `quantum-core`; this type sequences them
/// and dispatches delivery.
///
/// ## Usage
/// ```rust
/// use quantum_store::BookStore;
/// use serde_json::json;
///
/// let store = BookStore::new();
/// store.add_book("paper", "978-1", "Clean Code", 2008, 4599, &[json!(10)]).unwrap();
///
/// let result = store.buy_book("978-1", 2, "reader@example.com", "12 Baker St");
/// assert!(result.successful);
/// assert_eq!(result.paid_amount.cents(), 9198);
/// ```
pub struct BookStore {
    catalog: CatalogState,
    shipping: Box<dyn ShippingService>,
    mail: Box<dyn MailService>,
}

impl BookStore {
    /// Creates a storefront with console-logging fulfillment stubs.
    pub fn new() -> Self {
        BookStore::with_services(Box::new(ConsoleShipping), Box::new(ConsoleMailer))
    }

    /// Creates a storefront with the given fulfillment collaborators.
    pub fn with_services(shipping: Box<dyn ShippingService>, mail: Box<dyn MailService>) -> Self {
        BookStore {
            catalog: CatalogState::new(),
            shipping,
            mail,
        }
    }

    // -------------------------------------------------------------------------
    // Catalog Operations
    // -------------------------------------------------------------------------

    /// Constructs a book from its type tag and adds it to the catalog.
    ///
    /// ## Failure Modes
    /// - Unrecognized type tag
    /// - Extra-parameter type mismatch or invalid field value
    /// - Duplicate ISBN (the original entry stays unmodified)
    pub fn add_book(
        &self,
        type_tag: &str,
        isbn: &str,
        title: &str,
        year: i32,
        price_cents: i64,
        extra: &[Value],
    ) -> Result<(), StoreError> {
        debug!(type_tag = %type_tag, isbn = %isbn, "add_book");

        let book = factory::create_book(type_tag, isbn, title, year, price_cents, extra)?;
        let added = self.catalog.with_catalog_mut(|catalog| catalog.add(book));

        match added {
            Ok(()) => {
                info!(isbn = %isbn, title = %title, "Added book");
                Ok(())
            }
            Err(err) => {
                warn!(isbn = %isbn, error = %err, "Failed to add book");
                Err(err.into())
            }
        }
    }

    /// Looks up a cloned snapshot of a book. Never mutates state.
    pub fn get_book(&self, isbn: &str) -> Option<Book> {
        self.catalog
            .with_catalog(|catalog| catalog.get(isbn).cloned())
    }

    /// A read-only snapshot of the whole inventory, in ISBN order.
    pub fn list_inventory(&self) -> Vec<Book> {
        self.catalog
            .with_catalog(|catalog| catalog.list().into_iter().cloned().collect())
    }

    /// Removes and returns every book published more than `years` years
    /// ago, judged against the current calendar year.
    ///
    /// `cutoff = current_year - years`; a book with `year == cutoff` is
    /// retained (strict inequality). `years = 0` removes everything
    /// published before the current year.
    pub fn remove_outdated_books(&self, years: i32) -> Vec<Book> {
        let cutoff_year = Utc::now().year() - years;
        debug!(years = %years, cutoff_year = %cutoff_year, "remove_outdated_books");

        let removed = self
            .catalog
            .with_catalog_mut(|catalog| catalog.remove_published_before(cutoff_year));

        for book in &removed {
            info!(isbn = %book.isbn(), year = %book.year(), "Removed outdated book");
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Purchase Pipeline
    // -------------------------------------------------------------------------

    /// Executes a purchase transaction.
    ///
    /// Validation and the stock mutation run under one catalog lock
    /// acquisition; fulfillment dispatch happens afterwards from a cloned
    /// snapshot, so collaborator behavior can never touch catalog state
    /// or the computed outcome. Any failure short-circuits to a failure
    /// result with no state change.
    pub fn buy_book(
        &self,
        isbn: &str,
        quantity: i64,
        email: &str,
        address: &str,
    ) -> PurchaseResult {
        debug!(isbn = %isbn, quantity = %quantity, "buy_book");

        match self.execute_purchase(isbn, quantity) {
            Ok((book, total)) => {
                // Dispatch order when both apply: shipping first, then email
                if book.requires_shipping() {
                    self.shipping.ship(&book, address);
                }
                if book.is_emailable() {
                    self.mail.send_digital_copy(&book, email);
                }

                let message = format!(
                    "Successfully purchased {} copies of {}",
                    quantity,
                    book.title()
                );
                info!(isbn = %isbn, quantity = %quantity, total = %total, "Purchase completed");
                PurchaseResult::success(total, message)
            }
            Err(err) => {
                warn!(isbn = %isbn, quantity = %quantity, error = %err, "Purchase failed");
                PurchaseResult::failure(format!("Purchase failed - {}", err))
            }
        }
    }

    /// The validate-and-mutate half of the transaction, entirely under
    /// the catalog lock. Returns a snapshot of the purchased book and
    /// the computed total.
    fn execute_purchase(&self, isbn: &str, quantity: i64) -> CoreResult<(Book, Money)> {
        self.catalog.with_catalog_mut(|catalog| {
            if quantity <= 0 {
                return Err(CoreError::InvalidQuantity { quantity });
            }

            let book = catalog
                .get_mut(isbn)
                .ok_or_else(|| CoreError::BookNotFound(isbn.to_string()))?;

            if !book.is_purchasable() {
                return Err(CoreError::NotPurchasable {
                    title: book.title().to_string(),
                });
            }

            book.apply_purchase(quantity)?;

            let total = book.price().multiply_quantity(quantity);
            Ok((book.clone(), total))
        })
    }
}

impl Default for BookStore {
    fn default() -> Self {
        BookStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
