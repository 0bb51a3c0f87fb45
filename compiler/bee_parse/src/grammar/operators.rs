//! Unary and binary operators.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{BinaryOp, EntityId, EntityKind, ExprId, ExprKind, OpFamily, Order, Token, TokenType, UnaryOp};

use crate::Parser;

impl Parser<'_, '_> {
    /// `+x`, `-x`, `!x`, `~x`, `++x`, `--x`.
    pub(crate) fn parse_prefix(&mut self, token: Token<'_>, end: TokenType) -> Result<ExprId, Error> {
        let op = unary_op(self, token)?;
        let Some(operand) = self.parse_one_expr(None, end)? else {
            return Err(self.error(
                ErrorKind::Syntax,
                token,
                format!("expected operand after '{}'", op.symbol()),
            ));
        };
        let ty = self.expect_atom_operand(token, op, operand)?;
        let span = token.span.merge(self.span_of(operand));
        Ok(self.push_expr(
            ExprKind::Unary {
                op,
                order: Order::Prev,
                ty,
                expr: operand,
            },
            span,
        ))
    }

    /// `x++`, `x--`.
    pub(crate) fn parse_postfix(&mut self, prev: ExprId, token: Token<'_>) -> Result<ExprId, Error> {
        let op = unary_op(self, token)?;
        let ty = self.expect_atom_operand(token, op, prev)?;
        let span = self.span_of(prev).merge(token.span);
        Ok(self.push_expr(
            ExprKind::Unary {
                op,
                order: Order::Post,
                ty,
                expr: prev,
            },
            span,
        ))
    }

    /// The operand's type, which must be an atom.
    fn expect_atom_operand(
        &self,
        token: Token<'_>,
        op: UnaryOp,
        operand: ExprId,
    ) -> Result<EntityId, Error> {
        let ty = self.types.expr_type(&self.ast, operand);
        if self.ast.entity(ty).as_atom().is_some() {
            return Ok(ty);
        }
        Err(self.error(
            ErrorKind::Type,
            token,
            format!(
                "cannot apply unary '{}' to expression of type '{}'",
                op.symbol(),
                self.type_name(ty)
            ),
        ))
    }

    /// `prev <op> rest-of-expression`.
    pub(crate) fn parse_binary(
        &mut self,
        prev: Option<ExprId>,
        token: Token<'_>,
        end: TokenType,
    ) -> Result<ExprId, Error> {
        let Some(op) = BinaryOp::from_token(token.ty) else {
            return Err(self.cursor.expected(token, end));
        };
        let Some(prev) = prev else {
            return Err(self.error(
                ErrorKind::Syntax,
                token,
                "missing prev operand for binary expression",
            ));
        };
        let Some(post) = self.parse_expr(end)? else {
            return Err(self.error(
                ErrorKind::Syntax,
                token,
                "missing post operand for binary expression",
            ));
        };

        let prev_type = self.types.expr_type(&self.ast, prev);
        let post_type = self.types.expr_type(&self.ast, post);

        let ty = match op.family() {
            OpFamily::Assign => {
                self.expect_assignable(token, prev)?;
                if !self.types.cast(&self.ast, post_type, prev_type).is_implicit() {
                    return Err(self.error(
                        ErrorKind::Type,
                        token,
                        format!(
                            "cannot assign expression of type '{}' to '{}'",
                            self.type_name(post_type),
                            self.type_name(prev_type)
                        ),
                    ));
                }
                prev_type
            }
            OpFamily::Arithmetic => {
                let (Some(a), Some(b)) = (
                    self.ast.entity(prev_type).as_atom(),
                    self.ast.entity(post_type).as_atom(),
                ) else {
                    return Err(self.operand_error(token, "arithmetic", prev_type, post_type));
                };
                let size = a.size.max(b.size);
                self.types
                    .compose_atom(&self.ast, a.desc | b.desc, size)
                    .ok_or_else(|| {
                        self.error(
                            ErrorKind::Type,
                            token,
                            format!(
                                "no atom type composes '{}' {} '{}'",
                                self.type_name(prev_type),
                                token.text,
                                self.type_name(post_type)
                            ),
                        )
                    })?
            }
            OpFamily::Logic => {
                let atoms = self.ast.entity(prev_type).as_atom().is_some()
                    && self.ast.entity(post_type).as_atom().is_some();
                if !atoms {
                    return Err(self.operand_error(token, "boolean", prev_type, post_type));
                }
                self.types.bool
            }
        };

        let span = self.span_of(prev).merge(self.span_of(post));
        Ok(self.push_expr(ExprKind::Binary { op, ty, prev, post }, span))
    }

    /// The left side of `=` must name a variable.
    fn expect_assignable(&self, token: Token<'_>, target: ExprId) -> Result<(), Error> {
        let entity = match &self.ast.expr(target).kind {
            ExprKind::Id { entity, .. } => *entity,
            ExprKind::Member { entity, .. } => Some(*entity),
            _ => None,
        };
        let is_var = entity.is_some_and(|entity| matches!(self.ast.entity(entity).kind, EntityKind::Var(_)));
        if is_var {
            return Ok(());
        }
        Err(self.error(
            ErrorKind::Type,
            token,
            format!(
                "cannot assign to expression of kind '{}'",
                self.ast.expr(target).kind.name()
            ),
        ))
    }

    fn operand_error(&self, token: Token<'_>, what: &str, prev: EntityId, post: EntityId) -> Error {
        self.error(
            ErrorKind::Type,
            token,
            format!(
                "cannot perform {what} expression: '{}' {} '{}'",
                self.type_name(prev),
                token.text,
                self.type_name(post)
            ),
        )
    }
}

fn unary_op(parser: &Parser<'_, '_>, token: Token<'_>) -> Result<UnaryOp, Error> {
    UnaryOp::from_token(token.ty).ok_or_else(|| {
        parser.error(
            ErrorKind::Syntax,
            token,
            format!("'{}' is not a unary operator", token.text),
        )
    })
}
