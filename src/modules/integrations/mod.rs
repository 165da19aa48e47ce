//! Clients for external book services

pub mod google_books;

pub use google_books::GoogleBooksClient;
