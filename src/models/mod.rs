pub mod book;
pub mod user;
pub mod user_book;
