//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only domain types, trait definitions and domain error types.

pub mod catalog;
pub mod errors;
pub mod reading_list;
pub mod repositories;

pub use catalog::*;
pub use errors::DomainError;
pub use reading_list::*;
pub use repositories::*;
