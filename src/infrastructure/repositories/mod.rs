//! Repository implementations using SeaORM

pub mod book_repository;
pub mod reading_list_repository;

pub use book_repository::SeaOrmBookRepository;
pub use reading_list_repository::SeaOrmReadingListRepository;
