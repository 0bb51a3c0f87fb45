//! `if`, `for` and `return`.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{ExprId, ExprKind, Token, TokenType};

use crate::Parser;

impl Parser<'_, '_> {
    /// A condition must convert into `bool` implicitly.
    fn parse_condition(&self, anchor: Token<'_>, expr: Option<ExprId>) -> Result<ExprId, Error> {
        let Some(expr) = expr else {
            return Err(self.error(ErrorKind::Syntax, anchor, "expression expected"));
        };
        let ty = self.types.expr_type(&self.ast, expr);
        if !self.types.cast(&self.ast, ty, self.types.bool).is_implicit() {
            return Err(self.error(
                ErrorKind::Type,
                anchor,
                format!(
                    "cannot evaluate condition of type '{}' as a boolean expression",
                    self.type_name(ty)
                ),
            ));
        }
        Ok(expr)
    }

    /// `if cond { ... } [else { ... }]`, all in one frame.
    pub(crate) fn parse_if(&mut self, keyword: Token<'_>) -> Result<ExprId, Error> {
        let frame = self
            .ast
            .stack_push()
            .map_err(|err| self.frame_error(keyword, err))?;

        let cond = self.parse_expr(TokenType::SCOPE_BEGIN)?;
        let cond = self.parse_condition(keyword, cond)?;
        let then_scope = self.expect_scope(keyword, "if")?;

        let else_keyword = self.cursor.scan(TokenType::ELSE);
        let else_scope = if else_keyword.ok {
            Some(self.expect_scope(else_keyword.token, "else")?)
        } else {
            None
        };

        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(keyword, err))?;
        let span = keyword.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(
            ExprKind::If {
                cond,
                then_scope,
                else_scope,
                frame,
            },
            span,
        ))
    }

    /// `for { }`, `for cond { }` or `for init; cond; step { }`.
    pub(crate) fn parse_for(&mut self, keyword: Token<'_>) -> Result<ExprId, Error> {
        let frame = self
            .ast
            .stack_push()
            .map_err(|err| self.frame_error(keyword, err))?;

        let first = self.parse_expr(TokenType::SEMICOLON | TokenType::SCOPE_BEGIN)?;

        if self.cursor.peek(TokenType::SCOPE_BEGIN).ok {
            let cond = match first {
                Some(cond) => cond,
                None => self.push_expr(ExprKind::Bool(true), keyword.span),
            };
            let cond = self.parse_condition(keyword, Some(cond))?;
            let scope = self.expect_scope(keyword, "for")?;
            self.ast
                .stack_pop()
                .map_err(|err| self.frame_error(keyword, err))?;
            let span = keyword.span.merge(self.cursor.previous_span());
            return Ok(self.push_expr(ExprKind::ForWhile { cond, scope, frame }, span));
        }

        let start_sep = self.cursor.scan(TokenType::SEMICOLON);
        if !start_sep.ok {
            return Err(self
                .cursor
                .expected(start_sep.token, TokenType::SEMICOLON | TokenType::SCOPE_BEGIN));
        }
        let Some(init) = first else {
            return Err(self.error(
                ErrorKind::Syntax,
                start_sep.token,
                "expected initialization expression",
            ));
        };

        let cond = self.parse_expr(TokenType::SEMICOLON)?;
        let cond = self.parse_condition(start_sep.token, cond)?;

        let cond_sep = self.cursor.scan(TokenType::SEMICOLON);
        if !cond_sep.ok {
            return Err(self.error(
                ErrorKind::Syntax,
                start_sep.token,
                "expected iteration expression",
            ));
        }
        let Some(step) = self.parse_expr(TokenType::SCOPE_BEGIN)? else {
            return Err(self.error(
                ErrorKind::Syntax,
                cond_sep.token,
                "expected iteration expression",
            ));
        };

        let scope = self.expect_scope(keyword, "for")?;
        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(keyword, err))?;
        let span = keyword.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(
            ExprKind::For {
                init,
                cond,
                step,
                scope,
                frame,
            },
            span,
        ))
    }

    /// `return [expr]` inside a function body.
    pub(crate) fn parse_return(&mut self, keyword: Token<'_>, end: TokenType) -> Result<ExprId, Error> {
        let Some(function) = self.enclosing_function() else {
            return Err(self.error(
                ErrorKind::Syntax,
                keyword,
                "cannot return outside of a function scope",
            ));
        };
        let expected = self
            .ast
            .entity(function)
            .as_function()
            .map_or(self.types.void, |function| function.ret);

        let expr = self.parse_expr(end)?;
        let ty = expr.map_or(self.types.void, |expr| self.types.expr_type(&self.ast, expr));
        if !self.types.cast(&self.ast, ty, expected).is_implicit() {
            return Err(self.error(
                ErrorKind::Type,
                keyword,
                format!(
                    "cannot return '{}' expected '{}'",
                    self.type_name(ty),
                    self.type_name(expected)
                ),
            ));
        }

        let span = keyword.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(ExprKind::Return { expr, function }, span))
    }
}
