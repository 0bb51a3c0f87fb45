//! Identifiers, definitions, signatures and functions.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{
    DefOp, Entity, EntityId, EntityKind, ExprId, ExprKind, FrameId, Function, Token, TokenType,
};
use bee_types::signature_name;
use tracing::debug;

use crate::{Construct, Parser};

impl Parser<'_, '_> {
    /// A use of `name`, or a definition site when followed by `::` / `:`.
    pub(crate) fn parse_id(&mut self, name: Token<'_>, end: TokenType) -> Result<ExprId, Error> {
        let op = self.cursor.scan(TokenType::DECLARE | TokenType::DEFINE);
        if op.ok {
            return self.parse_def(name, op.token, end);
        }
        let Some(entity) = self.ast.find(name.text) else {
            return Err(self.error(
                ErrorKind::Resolution,
                name,
                format!("use of unknown identifier '{}'", name.text),
            ));
        };
        Ok(self.push_expr(
            ExprKind::Id {
                name: name.text.to_owned(),
                entity: Some(entity),
            },
            name.span,
        ))
    }

    /// `name :: init` or `name : [type] [= init]`.
    fn parse_def(&mut self, name: Token<'_>, op_token: Token<'_>, end: TokenType) -> Result<ExprId, Error> {
        if self.ast.find_local(name.text).is_some() {
            return Err(self.error(
                ErrorKind::Resolution,
                name,
                format!("redefinition of identifier '{}'", name.text),
            ));
        }

        let init_end = end | TokenType::COMMA;
        let op = if op_token.ty == TokenType::DECLARE {
            DefOp::Declare
        } else {
            DefOp::Define
        };

        let ty = match op {
            DefOp::Declare => None,
            DefOp::Define if self.cursor.peek(TokenType::ASSIGN).ok => None,
            DefOp::Define => Some(self.parse_type(op_token)?),
        };
        let init = match op {
            DefOp::Declare => Some(self.expect_initializer(op_token, init_end)?),
            DefOp::Define => {
                let assign = self.cursor.scan(TokenType::ASSIGN);
                if assign.ok {
                    Some(self.expect_initializer(assign.token, init_end)?)
                } else {
                    None
                }
            }
        };

        if let Some(init) = init {
            match self.ast.expr(init).kind {
                ExprKind::Signature { .. } => return self.parse_function(name, init),
                ExprKind::Record { .. } => return self.parse_typedef(name, op, init),
                _ => {}
            }
        }

        let ty = match (ty, init) {
            (Some(ty), Some(init)) => {
                let init_type = self.types.expr_type(&self.ast, init);
                if !self.types.cast(&self.ast, init_type, ty).is_implicit() {
                    return Err(self.error(
                        ErrorKind::Type,
                        op_token,
                        format!(
                            "cannot initialize '{}' of type '{}' with expression of type '{}'",
                            name.text,
                            self.type_name(ty),
                            self.type_name(init_type)
                        ),
                    ));
                }
                ty
            }
            (Some(ty), None) => ty,
            (None, Some(init)) => self.types.expr_type(&self.ast, init),
            (None, None) => {
                return Err(self.error(
                    ErrorKind::Syntax,
                    op_token,
                    "expected expression or type during definition",
                ))
            }
        };

        self.parse_var(name, op, init, ty, end)
    }

    fn expect_initializer(&mut self, after: Token<'_>, end: TokenType) -> Result<ExprId, Error> {
        self.parse_expr(end)?.ok_or_else(|| {
            self.error(
                ErrorKind::Syntax,
                after,
                format!("expected expression after '{}'", after.text),
            )
        })
    }

    /// Install the variable, then any co-declared definitions after a comma.
    fn parse_var(
        &mut self,
        name: Token<'_>,
        op: DefOp,
        init: Option<ExprId>,
        ty: EntityId,
        end: TokenType,
    ) -> Result<ExprId, Error> {
        let entity = self.ast.install(Entity::var(name.text, ty));
        debug!(name = name.text, ty = self.type_name(ty), "define variable");

        let comma = self.cursor.scan(TokenType::COMMA);
        let next = if comma.ok {
            self.cursor.skip_newlines();
            match self.parse_one_expr(None, end)? {
                Some(next) if matches!(self.ast.expr(next).kind, ExprKind::Def { .. }) => Some(next),
                _ => {
                    return Err(self.error(
                        ErrorKind::Syntax,
                        comma.token,
                        "expected new definition after comma",
                    ))
                }
            }
        } else {
            None
        };

        let span = name.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(
            ExprKind::Def {
                name: name.text.to_owned(),
                op,
                init,
                entity,
                next,
            },
            span,
        ))
    }

    /// An identifier naming a type.
    pub(crate) fn parse_type(&mut self, after: Token<'_>) -> Result<EntityId, Error> {
        let id = self.cursor.scan(TokenType::ID);
        if !id.ok {
            return Err(self.error(
                ErrorKind::Syntax,
                id.token,
                format!("expected type expression after '{}'", after.text),
            ));
        }
        let name = id.token;
        let Some(entity) = self.ast.find(name.text) else {
            return Err(self.error(
                ErrorKind::Resolution,
                name,
                format!("use of unknown identifier '{}'", name.text),
            ));
        };
        if !self.ast.entity(entity).is_type_like() {
            return Err(self.error(
                ErrorKind::Type,
                name,
                format!("'{}' does not name a type", name.text),
            ));
        }
        Ok(entity)
    }

    /// `( ... )`: a parameter list when empty or made of definitions,
    /// otherwise a nested expression.
    pub(crate) fn parse_nested(&mut self, open: Token<'_>) -> Result<ExprId, Error> {
        let frame = self
            .ast
            .stack_push()
            .map_err(|err| self.frame_error(open, err))?;
        let content = self.parse_expr(TokenType::NESTED_END)?;
        let close = self.cursor.scan(TokenType::NESTED_END);
        if !close.ok {
            return Err(self.cursor.expected(close.token, TokenType::NESTED_END));
        }

        let is_params =
            content.map_or(true, |expr| matches!(self.ast.expr(expr).kind, ExprKind::Def { .. }));
        if is_params {
            return self.parse_signature(open, content, frame);
        }

        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(open, err))?;
        let span = open.span.merge(close.token.span);
        match content {
            Some(expr) => Ok(self.push_expr(ExprKind::Nested(expr), span)),
            None => Err(self.error(ErrorKind::Syntax, open, "expected expression")),
        }
    }

    /// Optional `-> type` after a parameter list; closes the parameter frame.
    fn parse_signature(
        &mut self,
        open: Token<'_>,
        params: Option<ExprId>,
        frame: FrameId,
    ) -> Result<ExprId, Error> {
        let arrow = self.cursor.scan(TokenType::ARROW);
        let ret = if arrow.ok {
            self.parse_type(arrow.token)?
        } else {
            self.types.void
        };
        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(open, err))?;
        let span = open.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(ExprKind::Signature { params, ret, frame }, span))
    }

    /// `name :: (params) -> ret { body }`.
    ///
    /// The function is bound before its body so the body can recurse. The
    /// body reuses the signature frame, keeping parameters in scope.
    fn parse_function(&mut self, name: Token<'_>, signature: ExprId) -> Result<ExprId, Error> {
        let ExprKind::Signature { ret, frame, .. } = self.ast.expr(signature).kind else {
            return Err(self.error(ErrorKind::Syntax, name, "expected function signature"));
        };
        let params: Vec<EntityId> = self
            .ast
            .frame(frame)
            .entities()
            .filter(|id| self.ast.entity(*id).as_var().is_some())
            .collect();
        let canonical = signature_name(&self.ast, &self.types, &params, ret);

        let function = self.ast.push_entity(Entity::new(
            canonical.clone(),
            EntityKind::Function(Function { params, ret }),
        ));
        self.ast.bind(name.text, function);
        if self.ast.find_local(&canonical).is_none() {
            self.ast.bind(canonical.as_str(), function);
        }
        debug!(name = name.text, signature = %canonical, "define function");

        self.ast
            .stack_enter(frame)
            .map_err(|err| self.frame_error(name, err))?;
        self.constructs.push(Construct::Function(function));

        self.cursor.skip_newlines();
        let open = self.cursor.scan(TokenType::SCOPE_BEGIN);
        if !open.ok {
            return Err(self.error(
                ErrorKind::Syntax,
                name,
                "expected function scope after signature",
            ));
        }
        let scope = self.parse_scope_body(open.token, frame)?;

        self.constructs.pop();
        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(name, err))?;

        let enclosing = self.ast.current_frame();
        if self.ast.frame_mut(enclosing).bind_function(function, scope).is_err() {
            return Err(self.error(
                ErrorKind::Resolution,
                name,
                format!("function '{}' already has a body", name.text),
            ));
        }

        let span = name.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(
            ExprKind::Function {
                name: name.text.to_owned(),
                function,
                signature,
                scope,
            },
            span,
        ))
    }
}
