//! # Catalog Module
//!
//! The ISBN-keyed owning collection of books.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Ownership                              │
//! │                                                                     │
//! │  factory::create_book ──► Catalog::add ──► HashMap<ISBN, Book>      │
//! │                                                │                    │
//! │        get / list  ◄── borrow ────────────────┤                    │
//! │        remove_published_before ◄── move ──────┘                    │
//! │                                                                     │
//! │  The catalog is the sole owner of every book it holds. Other       │
//! │  components see short-lived references or cloned snapshots only.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every held book has a unique ISBN (enforced by [`Catalog::add`])
//! - A rejected duplicate leaves the original entry unmodified
//! - Listing and pruning orders are deterministic (ascending ISBN),
//!   never HashMap iteration order

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::error::{CoreError, CoreResult};

/// The in-memory collection of all known books, keyed by ISBN.
///
/// Created empty at store startup. Entries are added through the factory
/// path and removed by pruning, or stay indefinitely otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    books: HashMap<String, Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            books: HashMap::new(),
        }
    }

    /// Inserts a book under its ISBN key.
    ///
    /// Fails with [`CoreError::DuplicateIsbn`] when the key is already
    /// taken; the existing entry is left untouched.
    pub fn add(&mut self, book: Book) -> CoreResult<()> {
        if self.books.contains_key(book.isbn()) {
            return Err(CoreError::DuplicateIsbn(book.isbn().to_string()));
        }
        self.books.insert(book.isbn().to_string(), book);
        Ok(())
    }

    /// Looks up a book by ISBN. Pure read, no side effects.
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Mutable lookup for the purchase pipeline's stock decrement.
    pub fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.get_mut(isbn)
    }

    /// Checks whether an ISBN key is present.
    pub fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    /// Removes and returns every book published strictly before
    /// `cutoff_year`, in ascending ISBN order.
    ///
    /// Books with `year == cutoff_year` are retained. An empty catalog
    /// yields an empty vec.
    ///
    /// ## Example
    /// ```rust
    /// use quantum_core::{Book, BookKind, Catalog};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add(Book::new("A", "Old", 1995, 1000, BookKind::Showcase).unwrap()).unwrap();
    /// catalog.add(Book::new("B", "New", 2023, 1000, BookKind::Showcase).unwrap()).unwrap();
    ///
    /// let removed = catalog.remove_published_before(2006);
    /// assert_eq!(removed.len(), 1);
    /// assert_eq!(removed[0].title(), "Old");
    /// ```
    pub fn remove_published_before(&mut self, cutoff_year: i32) -> Vec<Book> {
        let mut outdated: Vec<String> = self
            .books
            .values()
            .filter(|book| book.year() < cutoff_year)
            .map(|book| book.isbn().to_string())
            .collect();
        outdated.sort();

        outdated
            .iter()
            .filter_map(|isbn| self.books.remove(isbn))
            .collect()
    }

    /// A read-only view of every book, in ascending ISBN order.
    pub fn list(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.values().collect();
        books.sort_by(|a, b| a.isbn().cmp(b.isbn()));
        books
    }

    /// Number of books held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Checks whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookKind;

    fn book(isbn: &str, title: &str, year: i32) -> Book {
        Book::new(isbn, title, year, 1999, BookKind::Showcase).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = Catalog::new();
        catalog.add(book("978-1", "First", 2020)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("978-1").unwrap().title(), "First");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_isbn_leaves_original_unmodified() {
        let mut catalog = Catalog::new();
        catalog.add(book("123-dup", "First Title", 2020)).unwrap();

        let err = catalog.add(book("123-dup", "Second Title", 2021)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateIsbn(isbn) if isbn == "123-dup"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("123-dup").unwrap().title(), "First Title");
    }

    #[test]
    fn test_remove_published_before_strict_cutoff() {
        let mut catalog = Catalog::new();
        catalog.add(book("A", "Ancient", 1995)).unwrap();
        catalog.add(book("B", "Boundary", 2006)).unwrap();
        catalog.add(book("C", "Current", 2023)).unwrap();

        let removed = catalog.remove_published_before(2006);

        // Strict inequality: the 2006 book sits exactly on the cutoff and stays
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].isbn(), "A");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("B"));
        assert!(catalog.contains("C"));
    }

    #[test]
    fn test_remove_published_before_returns_isbn_order() {
        let mut catalog = Catalog::new();
        catalog.add(book("C", "Third", 1990)).unwrap();
        catalog.add(book("A", "First", 1991)).unwrap();
        catalog.add(book("B", "Second", 1992)).unwrap();

        let removed = catalog.remove_published_before(2000);
        let isbns: Vec<&str> = removed.iter().map(|b| b.isbn()).collect();
        assert_eq!(isbns, vec!["A", "B", "C"]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove_published_before_empty_catalog() {
        let mut catalog = Catalog::new();
        assert!(catalog.remove_published_before(2020).is_empty());
    }

    #[test]
    fn test_list_is_sorted_by_isbn() {
        let mut catalog = Catalog::new();
        catalog.add(book("B", "Second", 2020)).unwrap();
        catalog.add(book("A", "First", 2021)).unwrap();

        let isbns: Vec<&str> = catalog.list().iter().map(|b| b.isbn()).collect();
        assert_eq!(isbns, vec!["A", "B"]);
    }

    #[test]
    fn test_get_does_not_mutate() {
        let mut catalog = Catalog::new();
        catalog.add(book("978-1", "First", 2020)).unwrap();

        for _ in 0..3 {
            assert!(catalog.get("978-1").is_some());
        }
        assert_eq!(catalog.len(), 1);
    }
}
