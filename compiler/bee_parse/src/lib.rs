//! Single-pass parser and checker for Bee.
//!
//! Parsing, name resolution and type checking happen together: every
//! production resolves its identifiers against the frame stack of the
//! [`Ast`] and asks the [`TypeSystem`] to validate the node before it is
//! pushed. The first error aborts the whole unit.

mod cursor;
mod grammar;

pub use cursor::{Cursor, Scan};

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{Ast, AstError, EntityId, Expr, ExprId, ExprKind, Span, Token, TokenList};
use bee_types::TypeSystem;
use tracing::debug;

/// Everything a backend needs from a successful parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub ast: Ast,
    pub types: TypeSystem,
}

impl ParseOutput {
    /// Root scope holding the top-level expressions.
    pub fn main_scope(&self) -> Option<ExprId> {
        self.ast.main_scope()
    }

    /// Top-level expressions in source order.
    pub fn top_level(&self) -> &[ExprId] {
        match self.main_scope().map(|scope| &self.ast.expr(scope).kind) {
            Some(ExprKind::Scope { body, .. }) => body.as_slice(),
            _ => &[],
        }
    }
}

/// Enclosing construct, innermost last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Construct {
    Function(EntityId),
    Record,
}

pub struct Parser<'a, 'src> {
    cursor: Cursor<'a, 'src>,
    ast: Ast,
    types: TypeSystem,
    constructs: Vec<Construct>,
}

impl<'a, 'src> Parser<'a, 'src> {
    /// A parser with the built-in types installed in the main frame.
    pub fn new(tokens: &'a TokenList<'src>) -> Self {
        let mut ast = Ast::new();
        let types = TypeSystem::install(&mut ast);
        Parser {
            cursor: Cursor::new(tokens),
            ast,
            types,
            constructs: Vec::new(),
        }
    }

    /// Parse the whole unit.
    pub fn parse(mut self) -> Result<ParseOutput, Error> {
        self.parse_program()?;
        Ok(ParseOutput {
            ast: self.ast,
            types: self.types,
        })
    }

    // Helpers shared by the grammar modules

    #[inline]
    fn source(&self) -> &'src str {
        self.cursor.source()
    }

    fn push_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.ast.push_expr(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, expr: ExprId) -> Span {
        self.ast.expr(expr).span
    }

    /// A parser error anchored at `token`.
    fn error(&self, kind: ErrorKind, token: Token<'_>, description: impl Into<String>) -> Error {
        Error::parser(kind, self.source(), token.span, description)
    }

    /// A frame stack failure, anchored at the token that opened the frame.
    fn frame_error(&self, token: Token<'_>, err: AstError) -> Error {
        Error::from(err).with_span(self.source(), token.span)
    }

    fn type_name(&self, entity: EntityId) -> &str {
        self.types.type_name(&self.ast, entity)
    }

    /// Innermost enclosing function. A record body in between hides it.
    fn enclosing_function(&self) -> Option<EntityId> {
        match self.constructs.last()? {
            Construct::Function(function) => Some(*function),
            Construct::Record => None,
        }
    }
}

/// Parse a token list into a checked AST.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList<'_>) -> Result<ParseOutput, Error> {
    let output = Parser::new(tokens).parse()?;
    debug!(
        exprs = output.ast.expr_count(),
        top_level = output.top_level().len(),
        "parsed"
    );
    Ok(output)
}

/// Lex and parse `source`.
pub fn parse_source(source: &str) -> Result<ParseOutput, Error> {
    let tokens = bee_lexer::lex(source)?;
    parse(&tokens)
}

#[cfg(test)]
mod tests;
