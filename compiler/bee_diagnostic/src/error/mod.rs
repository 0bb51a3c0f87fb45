use std::fmt;

use bee_ir::{ArenaError, AstError, Span, SpanError};

use crate::snippet;

/// What went wrong, independent of which component noticed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Arena overflow or frame depth limit.
    Capacity,
    /// Input the lexer cannot tokenize.
    Lexical,
    /// Token did not match the accepted set.
    Syntax,
    /// Unknown identifier or redefinition in the same frame.
    Resolution,
    /// Failed cast, bad operand, arity mismatch and friends.
    Type,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Capacity => "capacity",
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Resolution => "resolution",
            ErrorKind::Type => "type",
        };
        f.write_str(name)
    }
}

/// A fatal compilation error.
///
/// `message` is what the driver prints after the category. For errors
/// anchored at a token it embeds the source snippet; `description` keeps the
/// bare text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{category}: {message}")]
pub struct Error {
    pub category: &'static str,
    pub kind: ErrorKind,
    pub span: Option<Span>,
    pub description: String,
    pub message: String,
}

impl Error {
    pub const PARSER: &'static str = "parser error";
    pub const SCANNER: &'static str = "scanner error";
    pub const FRAME: &'static str = "frame error";
    pub const ARENA: &'static str = "arena error";

    /// An error without a source location.
    pub fn new(kind: ErrorKind, category: &'static str, description: impl Into<String>) -> Self {
        let description = description.into();
        Error {
            category,
            kind,
            span: None,
            message: description.clone(),
            description,
        }
    }

    /// An error anchored at `span` in `source`.
    pub fn at(
        kind: ErrorKind,
        category: &'static str,
        source: &str,
        span: Span,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Error {
            category,
            kind,
            span: Some(span),
            message: snippet::render(source, span, &description),
            description,
        }
    }

    /// Shorthand for a parser error anchored at `span`.
    pub fn parser(kind: ErrorKind, source: &str, span: Span, description: impl Into<String>) -> Self {
        Self::at(kind, Self::PARSER, source, span, description)
    }

    /// Attach a source location to an error raised without one.
    #[must_use]
    pub fn with_span(mut self, source: &str, span: Span) -> Self {
        self.message = snippet::render(source, span, &self.description);
        self.span = Some(span);
        self
    }
}

impl From<ArenaError> for Error {
    fn from(err: ArenaError) -> Self {
        Error::new(ErrorKind::Capacity, Error::ARENA, err.to_string())
    }
}

impl From<AstError> for Error {
    fn from(err: AstError) -> Self {
        match err {
            AstError::Arena(err) => err.into(),
            AstError::FrameDepth { .. } | AstError::PopMain | AstError::NotChild { .. } => {
                Error::new(ErrorKind::Capacity, Error::FRAME, err.to_string())
            }
        }
    }
}

impl From<SpanError> for Error {
    fn from(err: SpanError) -> Self {
        Error::new(ErrorKind::Capacity, Error::SCANNER, err.to_string())
    }
}
