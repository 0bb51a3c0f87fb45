//! Diagnostics for the Bee compiler.
//!
//! Compilation is fail-fast: the first problem becomes an [`Error`] that is
//! propagated with `?` up to the driver, which prints it verbatim. Errors
//! anchored at a token embed the offending source line with a caret run
//! under the token (see [`snippet`]).

mod error;
pub mod snippet;

pub use error::{Error, ErrorKind};
pub use snippet::LineTable;
