//! # Storefront Demo
//!
//! Drives the Quantum Bookstore end to end with log output.
//!
//! ## Usage
//! ```bash
//! cargo run -p quantum-store --bin demo
//!
//! # Verbose pipeline logging
//! RUST_LOG=debug cargo run -p quantum-store --bin demo
//! ```
//!
//! ## Walkthrough
//! 1. Initialize tracing (default INFO, `RUST_LOG` override)
//! 2. Seed the catalog with the three variants
//! 3. Purchase a paper book (shipped) and an ebook (emailed)
//! 4. Exercise the failure paths (stock, capability, quantity)
//! 5. Prune outdated entries and list what remains

use chrono::{Datelike, Utc};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quantum_store::BookStore;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_tracing();

    info!("Starting Quantum Bookstore demo");

    let store = BookStore::new();

    // Seed one of each variant
    store
        .add_book("paper", "978-1234567890", "Clean Code", 2008, 4599, &[json!(10)])
        .expect("seeding paper book");
    store
        .add_book(
            "ebook",
            "978-0987654321",
            "Design Patterns",
            1994,
            2999,
            &[json!("epub")],
        )
        .expect("seeding ebook");
    store
        .add_book("showcase", "978-1111111111", "New Release Preview", 2024, 0, &[])
        .expect("seeding showcase entry");

    // A duplicate ISBN is rejected and the original entry survives
    if let Err(err) = store.add_book("paper", "978-1234567890", "Clean Code (2nd)", 2011, 4999, &[])
    {
        info!(error = %err, "Duplicate add rejected");
    }

    // Successful purchases: shipped paper copies, an emailed digital copy
    let result = store.buy_book("978-1234567890", 2, "reader@example.com", "12 Baker St");
    info!(paid = %result.paid_amount, message = %result.message, "Paper purchase");

    let result = store.buy_book("978-0987654321", 1, "reader@example.com", "12 Baker St");
    info!(paid = %result.paid_amount, message = %result.message, "Ebook purchase");

    // Failure paths leave the catalog untouched
    for (isbn, quantity) in [
        ("978-1234567890", 20), // more copies than remain on hand
        ("978-1111111111", 1),  // showcase entries are not for sale
        ("978-1234567890", 0),  // quantity must be positive
        ("978-0000000000", 1),  // unknown ISBN
    ] {
        let result = store.buy_book(isbn, quantity, "reader@example.com", "12 Baker St");
        info!(message = %result.message, "Rejected purchase");
    }

    // Prune anything published more than 20 years ago
    let cutoff = Utc::now().year() - 20;
    let removed = store.remove_outdated_books(20);
    info!(cutoff = %cutoff, removed = removed.len(), "Pruned outdated books");

    info!("Current inventory:");
    for book in store.list_inventory() {
        info!("  {}", book);
    }
}
