//! Token cursor over a [`TokenList`].
//!
//! Every query takes a [`TokenType`] set: `peek` inspects the next token,
//! `scan` additionally consumes it when it is in the set.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{Span, Token, TokenList, TokenType};
use tracing::trace;

/// Result of a `peek`/`scan`: the inspected token and whether it matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scan<'src> {
    pub token: Token<'src>,
    pub ok: bool,
}

pub struct Cursor<'a, 'src> {
    tokens: &'a TokenList<'src>,
    pos: usize,
}

impl<'a, 'src> Cursor<'a, 'src> {
    pub fn new(tokens: &'a TokenList<'src>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.tokens.source()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next token, not consumed.
    #[inline]
    pub fn current(&self) -> Token<'src> {
        self.tokens.get(self.pos)
    }

    /// Span of the last consumed token; the first token's span at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.tokens.get(self.pos.saturating_sub(1)).span
    }

    /// Inspect the next token without consuming it.
    #[inline]
    pub fn peek(&self, types: TokenType) -> Scan<'src> {
        let token = self.current();
        Scan {
            token,
            ok: types.intersects(token.ty),
        }
    }

    /// Consume the next token if it is in `types`.
    pub fn scan(&mut self, types: TokenType) -> Scan<'src> {
        let scan = self.peek(types);
        if scan.ok && scan.token.ty != TokenType::EOF {
            trace!(token = scan.token.ty.name(), text = scan.token.text, "scan");
            self.pos += 1;
        }
        scan
    }

    /// Only the `EOF` terminator remains.
    #[inline]
    pub fn eof(&self) -> bool {
        self.current().ty == TokenType::EOF
    }

    pub fn skip_newlines(&mut self) {
        while self.scan(TokenType::NEWLINE).ok {}
    }

    /// `expected '<a>', '<b>', got '<c>'`, anchored at `token`.
    pub fn expected(&self, token: Token<'src>, types: TokenType) -> Error {
        let mut description = String::from("expected ");
        for kind in types.kinds() {
            description.push('\'');
            description.push_str(kind.name());
            description.push_str("', ");
        }
        description.push_str("got '");
        description.push_str(token.ty.name());
        description.push('\'');
        Error::parser(ErrorKind::Syntax, self.source(), token.span, description)
    }
}

#[cfg(test)]
mod tests;
