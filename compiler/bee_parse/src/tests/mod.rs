//! Parser unit tests.
//!
//! - `parser`: node shapes, definition chains and parser state after a unit

mod parser;
