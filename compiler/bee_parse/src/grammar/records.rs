//! `struct` / `enum` bodies, type definitions, member access and struct literals.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{
    DefOp, Entity, EntityId, EntityKind, ExprId, ExprKind, Record, RecordKind, Token, TokenType,
};
use tracing::debug;

use crate::{Construct, Parser};

use super::SEPARATORS;

impl Parser<'_, '_> {
    /// `struct { ... }` or `enum { ... }` in a fresh frame.
    pub(crate) fn parse_record(&mut self, keyword: Token<'_>) -> Result<ExprId, Error> {
        let kind = if keyword.ty == TokenType::STRUCT {
            RecordKind::Struct
        } else {
            RecordKind::Enum
        };

        self.cursor.skip_newlines();
        let open = self.cursor.scan(TokenType::SCOPE_BEGIN);
        if !open.ok {
            return Err(self.cursor.expected(open.token, TokenType::SCOPE_BEGIN));
        }

        let frame = self
            .ast
            .stack_push()
            .map_err(|err| self.frame_error(open.token, err))?;
        self.constructs.push(Construct::Record);
        let body = self.parse_compound(SEPARATORS, TokenType::SCOPE_END)?;
        for expr in &body {
            self.check_member(kind, *expr)?;
        }
        self.constructs.pop();
        self.ast
            .stack_pop()
            .map_err(|err| self.frame_error(open.token, err))?;

        let span = keyword.span.merge(self.cursor.previous_span());
        Ok(self.push_expr(ExprKind::Record { kind, body, frame }, span))
    }

    /// Structs hold variables and functions; enums hold `::` constants.
    fn check_member(&self, kind: RecordKind, expr: ExprId) -> Result<(), Error> {
        let node = self.ast.expr(expr);
        let allowed = match (kind, &node.kind) {
            (RecordKind::Struct, ExprKind::Def { .. } | ExprKind::Function { .. }) => true,
            (RecordKind::Enum, ExprKind::Def { op, .. }) => *op == DefOp::Declare,
            _ => false,
        };
        if allowed {
            return Ok(());
        }
        let description = match kind {
            RecordKind::Struct => format!(
                "struct body cannot contain expression of kind '{}'",
                node.kind.name()
            ),
            RecordKind::Enum => format!(
                "enum body can only contain '::' declarations, found '{}'",
                node.kind.name()
            ),
        };
        Err(Error::parser(
            ErrorKind::Type,
            self.source(),
            node.span,
            description,
        ))
    }

    /// Bind a record body to `name`.
    pub(crate) fn parse_typedef(
        &mut self,
        name: Token<'_>,
        op: DefOp,
        record: ExprId,
    ) -> Result<ExprId, Error> {
        let ExprKind::Record { kind, frame, .. } = self.ast.expr(record).kind else {
            return Err(self.error(ErrorKind::Syntax, name, "expected record body"));
        };
        let entity_kind = match kind {
            RecordKind::Struct => EntityKind::Struct(Record { frame }),
            RecordKind::Enum => EntityKind::Enum(Record { frame }),
        };
        let entity = self.ast.install(Entity::new(name.text, entity_kind));
        debug!(name = name.text, kind = kind.keyword(), "define record");

        let span = name.span.merge(self.span_of(record));
        Ok(self.push_expr(
            ExprKind::Typedef {
                name: name.text.to_owned(),
                op,
                record,
                entity,
            },
            span,
        ))
    }

    /// `base.name`, looked up in the record frame only.
    pub(crate) fn parse_member(&mut self, base: ExprId, dot: Token<'_>) -> Result<ExprId, Error> {
        let member = self.cursor.scan(TokenType::ID);
        if !member.ok {
            return Err(self.cursor.expected(member.token, TokenType::ID));
        }
        let name = member.token;

        let base_type = self.types.expr_type(&self.ast, base);
        let Some(frame) = self.ast.entity(base_type).record_frame() else {
            return Err(self.error(
                ErrorKind::Type,
                dot,
                format!(
                    "cannot access member '{}' of type '{}'",
                    name.text,
                    self.type_name(base_type)
                ),
            ));
        };
        let Some(entity) = self.ast.frame(frame).find_local(name.text) else {
            return Err(self.error(
                ErrorKind::Resolution,
                name,
                format!(
                    "no member named '{}' in '{}'",
                    name.text,
                    self.type_name(base_type)
                ),
            ));
        };

        let span = self.span_of(base).merge(name.span);
        Ok(self.push_expr(
            ExprKind::Member {
                base,
                name: name.text.to_owned(),
                entity,
            },
            span,
        ))
    }

    /// `Name{a, b}`: one value per member variable, in declaration order.
    pub(crate) fn parse_struct_lit(&mut self, ty: ExprId, open: Token<'_>) -> Result<ExprId, Error> {
        let target = match self.ast.expr(ty).kind {
            ExprKind::Id {
                entity: Some(entity),
                ..
            } => Some(entity),
            _ => None,
        };
        let Some((entity, frame)) = target.and_then(|entity| {
            match self.ast.entity(entity).kind {
                EntityKind::Struct(record) => Some((entity, record.frame)),
                _ => None,
            }
        }) else {
            return Err(self.error(ErrorKind::Type, open, "expected struct type before '{'"));
        };

        let members: Vec<EntityId> = self
            .ast
            .frame(frame)
            .entities()
            .filter(|id| self.ast.entity(*id).as_var().is_some())
            .collect();
        let args = self.parse_argument(&members, TokenType::SCOPE_END)?;

        let span = self.span_of(ty).merge(self.cursor.previous_span());
        Ok(self.push_expr(ExprKind::StructLit { ty: entity, args }, span))
    }
}
