//! Domain types for the sample catalog. Plain serde structs; the engine
//! instantiates them whenever a candidate resolves to their declared name.

pub mod author;
pub mod book;

pub use author::Author;
pub use book::Book;
