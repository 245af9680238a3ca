//! # Quantum Store Library
//!
//! The storefront service layer of the Quantum Bookstore.
//!
//! ## Module Organization
//! ```text
//! quantum_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── BookStore surface & purchase pipeline
//! ├── state.rs        ◄─── Shared catalog state wrapper
//! ├── fulfillment.rs  ◄─── Shipping / email collaborator seams
//! ├── error.rs        ◄─── Store error type for callers
//! └── bin/
//!     └── demo.rs     ◄─── End-to-end storefront walkthrough
//! ```
//!
//! ## The Purchase Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                buy_book(isbn, qty, email, address)                  │
//! │                                                                     │
//! │   1. quantity > 0            ── else InvalidQuantity ──┐            │
//! │   2. catalog lookup          ── else BookNotFound ─────┤            │
//! │   3. purchase capability     ── else NotPurchasable ───┤            │
//! │   4. apply_purchase (stock)  ── else InsufficientStock ┤            │
//! │   5. total = price × qty                               │            │
//! │           │                                            │            │
//! │           │  steps 1-5 under ONE catalog lock          │            │
//! │           ▼                                            ▼            │
//! │   6. fulfillment dispatch                    failure result         │
//! │      (ship first, then email)                (paid amount $0.00,    │
//! │           │                                   no state change)      │
//! │           ▼                                                         │
//! │   7. success result (paid amount = total)                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Either every validation passes and exactly one stock mutation plus one
//! fulfillment dispatch occurs, or nothing happens and only a failure
//! result is returned.

pub mod error;
pub mod fulfillment;
pub mod state;
pub mod store;

pub use error::{ErrorCode, StoreError};
pub use fulfillment::{ConsoleMailer, ConsoleShipping, MailService, ShippingService};
pub use state::CatalogState;
pub use store::{BookStore, PurchaseResult};
