//! Function invocation and positional argument binding.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{EntityId, ExprId, ExprKind, Token, TokenType};

use crate::Parser;

impl Parser<'_, '_> {
    /// `callee(args)`; the callee must have a function type.
    pub(crate) fn parse_invoke(&mut self, callee: ExprId, open: Token<'_>) -> Result<ExprId, Error> {
        let function = self.types.expr_type(&self.ast, callee);
        let Some(params) = self
            .ast
            .entity(function)
            .as_function()
            .map(|function| function.params.clone())
        else {
            return Err(self.error(
                ErrorKind::Type,
                open,
                format!(
                    "cannot invoke expression of type '{}'",
                    self.type_name(function)
                ),
            ));
        };

        let args = self.parse_argument(&params, TokenType::NESTED_END)?;
        let span = self.span_of(callee).merge(self.cursor.previous_span());
        Ok(self.push_expr(
            ExprKind::Invoke {
                callee,
                function,
                args,
            },
            span,
        ))
    }

    /// Bind one argument per remaining parameter, then consume `close`.
    ///
    /// Each argument must cast into its parameter's type implicitly.
    pub(crate) fn parse_argument(
        &mut self,
        params: &[EntityId],
        close: TokenType,
    ) -> Result<Option<ExprId>, Error> {
        self.cursor.skip_newlines();
        let Some((&param, rest)) = params.split_first() else {
            let end = self.cursor.scan(close);
            if end.ok {
                return Ok(None);
            }
            return Err(self.error(ErrorKind::Type, end.token, "too many arguments"));
        };

        let Some(expr) = self.parse_expr(TokenType::COMMA | close)? else {
            return Err(self.missing_argument(param));
        };

        let arg_type = self.types.expr_type(&self.ast, expr);
        let param_type = self.types.entity_type(&self.ast, param);
        if !self.types.cast(&self.ast, arg_type, param_type).is_implicit() {
            let span = self.span_of(expr);
            return Err(Error::parser(
                ErrorKind::Type,
                self.source(),
                span,
                format!(
                    "cannot cast argument of type '{}' into '{}'",
                    self.type_name(arg_type),
                    self.type_name(param_type)
                ),
            ));
        }

        self.cursor.skip_newlines();
        let comma = self.cursor.scan(TokenType::COMMA);
        if !comma.ok {
            if let Some(&missing) = rest.first() {
                return Err(self.missing_argument(missing));
            }
        } else if rest.is_empty() {
            self.cursor.skip_newlines();
            if self.cursor.peek(close).ok {
                return Err(self.error(
                    ErrorKind::Syntax,
                    comma.token,
                    "expected new argument after comma",
                ));
            }
        }
        let next = self.parse_argument(rest, close)?;

        let span = self.span_of(expr);
        Ok(Some(self.push_expr(ExprKind::Argument { expr, next }, span)))
    }

    fn missing_argument(&self, param: EntityId) -> Error {
        self.error(
            ErrorKind::Type,
            self.cursor.current(),
            format!("missing argument '{}'", self.ast.entity(param).name),
        )
    }
}
