//! Grammar productions.
//!
//! There is no precedence table. [`Parser::parse_one_expr`] consumes one
//! token and returns the node it produced; the driving loops feed that node
//! back in as `prev`, so a binary operator takes the whole rest of the
//! expression as its right operand.

mod control_flow;
mod definitions;
mod invoke;
mod literals;
mod operators;
mod records;

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{EntityKind, ExprId, ExprKind, FrameId, Token, TokenType};
use bee_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::Parser;

/// Statement separators.
const SEPARATORS: TokenType = TokenType::NEWLINE.union(TokenType::SEMICOLON);

const BINARY: TokenType = TokenType::ASSIGN
    .union(TokenType::ARITHMETIC)
    .union(TokenType::LOGIC);

/// Tokens that never follow a complete operand.
const PRIMARY: TokenType = TokenType::ID
    .union(TokenType::LITERAL)
    .union(TokenType::IF)
    .union(TokenType::FOR)
    .union(TokenType::RETURN)
    .union(TokenType::STRUCT)
    .union(TokenType::ENUM);

/// Everything `parse_one_expr` dispatches on.
const EXPR_START: TokenType = PRIMARY
    .union(BINARY)
    .union(TokenType::NESTED_BEGIN)
    .union(TokenType::SCOPE_BEGIN)
    .union(TokenType::DOT)
    .union(TokenType::NEWLINE);

const PREFIX: TokenType = TokenType::ADD
    .union(TokenType::SUB)
    .union(TokenType::NOT)
    .union(TokenType::BIN_NOT)
    .union(TokenType::INCREMENT)
    .union(TokenType::DECREMENT);

const POSTFIX: TokenType = TokenType::INCREMENT.union(TokenType::DECREMENT);

impl Parser<'_, '_> {
    /// Top level: a compound in the main frame, wrapped in the main scope.
    pub(crate) fn parse_program(&mut self) -> Result<(), Error> {
        let start = self.cursor.current().span;
        let body = self.parse_compound(SEPARATORS, TokenType::EOF)?;
        let span = start.merge(self.cursor.previous_span());
        let scope = self.push_expr(
            ExprKind::Scope {
                body,
                frame: self.ast.main_frame(),
            },
            span,
        );
        self.ast.set_main_scope(scope);
        Ok(())
    }

    /// Sibling expressions up to (and including) a token in `end`.
    pub(crate) fn parse_compound(
        &mut self,
        sep: TokenType,
        end: TokenType,
    ) -> Result<Vec<ExprId>, Error> {
        let mut body = Vec::new();
        loop {
            while self.cursor.scan(sep).ok {}
            if self.cursor.scan(end).ok {
                return Ok(body);
            }
            if self.cursor.eof() {
                return Err(self.cursor.expected(self.cursor.current(), end));
            }
            if let Some(expr) = self.parse_expr(sep | end)? {
                body.push(expr);
            }
        }
    }

    /// One expression, stopping before a token in `end`.
    pub(crate) fn parse_expr(&mut self, end: TokenType) -> Result<Option<ExprId>, Error> {
        self.parse_expr_from(None, end)
    }

    /// Continue the expression whose left part is `head`.
    pub(crate) fn parse_expr_from(
        &mut self,
        mut head: Option<ExprId>,
        end: TokenType,
    ) -> Result<Option<ExprId>, Error> {
        loop {
            if self.cursor.peek(end).ok {
                return Ok(head);
            }
            if self.cursor.eof() {
                return Err(self.cursor.expected(self.cursor.current(), end));
            }
            // A scope after a complete operand starts the next construct,
            // unless the operand names a struct being instantiated.
            if let Some(expr) = head {
                if self.cursor.peek(TokenType::SCOPE_BEGIN).ok && !self.names_struct(expr) {
                    return Ok(head);
                }
            }
            if let Some(expr) = self.parse_one_expr(head, end)? {
                head = Some(expr);
            }
        }
    }

    /// Consume one token and build the node it starts.
    ///
    /// Returns `None` when nothing was built: at a token in `end`, or after
    /// skipping a newline with no left operand.
    pub(crate) fn parse_one_expr(
        &mut self,
        prev: Option<ExprId>,
        end: TokenType,
    ) -> Result<Option<ExprId>, Error> {
        ensure_sufficient_stack(|| self.dispatch(prev, end))
    }

    fn dispatch(&mut self, prev: Option<ExprId>, end: TokenType) -> Result<Option<ExprId>, Error> {
        if self.cursor.peek(end).ok {
            return Ok(None);
        }

        match prev {
            None => {
                let prefix = self.cursor.scan(PREFIX);
                if prefix.ok {
                    return self.parse_prefix(prefix.token, end).map(Some);
                }
            }
            Some(prev) => {
                let postfix = self.cursor.scan(POSTFIX);
                if postfix.ok {
                    return self.parse_postfix(prev, postfix.token).map(Some);
                }
            }
        }

        let scan = self.cursor.scan(EXPR_START);
        let token = scan.token;
        if !scan.ok {
            return Err(self.cursor.expected(token, end));
        }
        trace!(token = token.ty.name(), text = token.text, "dispatch");

        if token.ty == TokenType::NEWLINE {
            return Ok(prev);
        }
        if BINARY.contains(token.ty) {
            return self.parse_binary(prev, token, end).map(Some);
        }
        if prev.is_some() && PRIMARY.contains(token.ty) {
            return Err(self.cursor.expected(token, end));
        }

        let ty = token.ty;
        let expr = if ty == TokenType::ID {
            self.parse_id(token, end)?
        } else if TokenType::INT.contains(ty) {
            self.parse_int(token)?
        } else if ty == TokenType::FLOAT {
            self.parse_float(token)?
        } else if ty == TokenType::CHAR {
            self.parse_char(token)?
        } else if ty == TokenType::STR {
            self.parse_str(token)?
        } else if ty == TokenType::IF {
            self.parse_if(token)?
        } else if ty == TokenType::FOR {
            self.parse_for(token)?
        } else if ty == TokenType::RETURN {
            self.parse_return(token, end)?
        } else if ty == TokenType::STRUCT || ty == TokenType::ENUM {
            self.parse_record(token)?
        } else if ty == TokenType::NESTED_BEGIN {
            match prev {
                Some(callee) => self.parse_invoke(callee, token)?,
                None => self.parse_nested(token)?,
            }
        } else if ty == TokenType::SCOPE_BEGIN {
            match prev {
                Some(target) => self.parse_struct_lit(target, token)?,
                None => self.parse_scope(token)?,
            }
        } else if ty == TokenType::DOT {
            let Some(base) = prev else {
                return Err(self.error(ErrorKind::Syntax, token, "expected expression before '.'"));
            };
            self.parse_member(base, token)?
        } else {
            return Err(self.cursor.expected(token, end));
        };
        Ok(Some(expr))
    }

    /// `{ ... }` in a fresh frame.
    pub(crate) fn parse_scope(&mut self, open: Token<'_>) -> Result<ExprId, Error> {
        let frame = self
            .ast
            .stack_push()
            .map_err(|err| self.frame_error(open, err))?;
        let scope = self.parse_scope_body(open, frame)?;
        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(open, err))?;
        Ok(scope)
    }

    /// Body of a scope whose `{` was consumed, parsed in the current frame `frame`.
    pub(crate) fn parse_scope_body(
        &mut self,
        open: Token<'_>,
        frame: FrameId,
    ) -> Result<ExprId, Error> {
        let body = self.parse_compound(SEPARATORS, TokenType::SCOPE_END)?;
        let span = open.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(ExprKind::Scope { body, frame }, span))
    }

    /// Whether `expr` is an identifier naming a struct type.
    fn names_struct(&self, expr: ExprId) -> bool {
        match &self.ast.expr(expr).kind {
            ExprKind::Id {
                entity: Some(entity),
                ..
            } => matches!(self.ast.entity(*entity).kind, EntityKind::Struct(_)),
            _ => false,
        }
    }

    /// Parse one nested scope after skipping newlines, or fail with `what`.
    pub(crate) fn expect_scope(&mut self, anchor: Token<'_>, what: &str) -> Result<ExprId, Error> {
        self.cursor.skip_newlines();
        let open = self.cursor.scan(TokenType::SCOPE_BEGIN);
        if !open.ok {
            return Err(self.error(
                ErrorKind::Syntax,
                anchor,
                format!("expected scope after '{what}'"),
            ));
        }
        self.parse_scope(open.token)
    }
}
