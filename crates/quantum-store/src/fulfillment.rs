//! # Fulfillment Collaborators
//!
//! The delivery seams invoked after a successful purchase.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Fulfillment Dispatch                             │
//! │                                                                     │
//! │  successful purchase                                                │
//! │         │                                                           │
//! │         ├── book ships?  ──► ShippingService::ship(book, address)   │
//! │         │                                                           │
//! │         └── book emails? ──► MailService::send_digital_copy(...)    │
//! │                                                                     │
//! │  Best-effort notifications: no return value, no failure contract.  │
//! │  Nothing a collaborator does can change an already-computed        │
//! │  purchase outcome.                                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The console implementations stand in for real carrier and SMTP
//! integrations, which live outside this system. Tests substitute
//! recording fakes through the same traits.

use tracing::info;

use quantum_core::Book;

/// Ships a purchased book to a street address.
pub trait ShippingService: Send + Sync {
    fn ship(&self, book: &Book, address: &str);
}

/// Delivers a purchased digital copy to an email address.
pub trait MailService: Send + Sync {
    fn send_digital_copy(&self, book: &Book, email: &str);
}

/// Console-logging shipping stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleShipping;

impl ShippingService for ConsoleShipping {
    fn ship(&self, book: &Book, address: &str) {
        info!(title = %book.title(), address = %address, "Shipping book");
    }
}

/// Console-logging mail stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailer;

impl MailService for ConsoleMailer {
    fn send_digital_copy(&self, book: &Book, email: &str) {
        let format = book.file_format().unwrap_or("digital");
        info!(title = %book.title(), format = %format, email = %email, "Sending digital copy");
    }
}
