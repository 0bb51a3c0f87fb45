//! Tab-indented textual rendering of the expression tree.
//!
//! One node per line, children one tab deeper. Absent optional children print
//! as `(NULL)`.

use std::fmt::{self, Write};

use bee_stack::ensure_sufficient_stack;

use crate::{Ast, EntityId, EntityKind, ExprId, ExprKind, FrameId};

pub struct AstDump<'a> {
    ast: &'a Ast,
    out: String,
}

impl<'a> AstDump<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        AstDump {
            ast,
            out: String::new(),
        }
    }

    /// Render the main scope, or nothing if parsing never completed.
    pub fn render(ast: &Ast) -> String {
        let mut dump = AstDump::new(ast);
        if let Some(scope) = ast.main_scope() {
            dump.expr(Some(scope), 0);
        }
        dump.out
    }

    /// Render every frame with its bindings in definition order.
    pub fn render_frames(ast: &Ast) -> String {
        let mut dump = AstDump::new(ast);
        for (id, _) in ast.frames() {
            dump.frame(id);
        }
        dump.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, depth: usize, args: fmt::Arguments<'_>) {
        self.out.extend(std::iter::repeat('\t').take(depth));
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    fn type_name(&self, id: EntityId) -> &'a str {
        &self.ast.entity(id).name
    }

    pub fn frame(&mut self, id: FrameId) {
        let frame = self.ast.frame(id);
        match frame.parent() {
            Some(parent) => self.line(
                0,
                format_args!("Frame {} (parent: {}, depth: {})", id.raw(), parent.raw(), frame.depth()),
            ),
            None => self.line(0, format_args!("Frame {} (main)", id.raw())),
        }
        for (name, entity) in frame.entries() {
            let entity = self.ast.entity(entity);
            self.line(
                1,
                format_args!("'{}' -> {} '{}'", name, entity.tag().name(), entity.name),
            );
        }
    }

    pub fn expr(&mut self, id: Option<ExprId>, depth: usize) {
        ensure_sufficient_stack(|| self.expr_node(id, depth));
    }

    fn expr_node(&mut self, id: Option<ExprId>, depth: usize) {
        let Some(id) = id else {
            self.line(depth, format_args!("(NULL)"));
            return;
        };
        let ast = self.ast;
        let kind = &ast.expr(id).kind;
        let name = kind.name();

        match kind {
            ExprKind::Char(c) => {
                let c = char::from(*c).escape_default();
                self.line(depth, format_args!("{name} (data: '{c}')"));
            }
            ExprKind::Str(s) => {
                let s = s.escape_default();
                self.line(depth, format_args!("{name} (data: '{s}')"));
            }
            ExprKind::Int { value, size } => {
                self.line(depth, format_args!("{name} (data: {value}, size: {size})"));
            }
            ExprKind::Float { value, size } => {
                self.line(depth, format_args!("{name} (data: {value:.6}, size: {size})"));
            }
            ExprKind::Bool(value) => {
                self.line(depth, format_args!("{name} (data: {value})"));
            }
            ExprKind::Unary {
                op, order, expr, ..
            } => {
                let (op, order) = (op.symbol(), order.name());
                self.line(depth, format_args!("{name} (op: '{op}', order: '{order}')"));
                self.expr(Some(*expr), depth + 1);
            }
            ExprKind::Binary { op, ty, prev, post } => {
                let (op, ty) = (op.symbol(), self.type_name(*ty));
                self.line(depth, format_args!("{name} (op: '{op}', type: '{ty}')"));
                self.expr(Some(*prev), depth + 1);
                self.expr(Some(*post), depth + 1);
            }
            ExprKind::Nested(expr) => {
                self.line(depth, format_args!("{name}"));
                self.expr(Some(*expr), depth + 1);
            }
            ExprKind::Scope { body, .. } => {
                self.line(depth, format_args!("{name}"));
                for expr in body {
                    self.expr(Some(*expr), depth + 1);
                }
            }
            ExprKind::Return { expr, .. } => {
                self.line(depth, format_args!("{name}"));
                self.expr(*expr, depth + 1);
            }
            ExprKind::Id {
                name: ident,
                entity,
            } => {
                self.line(depth, format_args!("{name} (name: '{ident}')"));
                self.entity(*entity, depth + 1);
            }
            ExprKind::Def {
                name: def,
                op,
                init,
                entity,
                next,
            } => {
                let op = op.symbol();
                self.line(depth, format_args!("{name} (op: '{op}', name: '{def}')"));
                self.expr(*init, depth + 1);
                self.entity(Some(*entity), depth + 1);
                if next.is_some() {
                    self.expr(*next, depth);
                }
            }
            ExprKind::Signature { params, ret, .. } => {
                let ret = self.type_name(*ret);
                self.line(depth, format_args!("{name} (return: '{ret}')"));
                self.expr(*params, depth + 1);
            }
            ExprKind::Function {
                name: function_name,
                function,
                signature,
                scope,
            } => {
                let signature_name = self.type_name(*function);
                self.line(
                    depth,
                    format_args!("{name} (name: '{function_name}', signature: '{signature_name}')"),
                );
                self.expr(Some(*signature), depth + 1);
                self.expr(Some(*scope), depth + 1);
            }
            ExprKind::Invoke { function, args, .. } => {
                let function = self.type_name(*function);
                self.line(depth, format_args!("{name} (function: '{function}')"));
                self.expr(*args, depth + 1);
            }
            ExprKind::Argument { expr, next } => {
                self.line(depth, format_args!("{name}"));
                self.expr(Some(*expr), depth + 1);
                if next.is_some() {
                    self.expr(*next, depth);
                }
            }
            ExprKind::If {
                cond,
                then_scope,
                else_scope,
                ..
            } => {
                self.line(depth, format_args!("{name}"));
                self.expr(Some(*cond), depth + 1);
                self.expr(Some(*then_scope), depth + 1);
                self.expr(*else_scope, depth + 1);
            }
            ExprKind::For {
                init,
                cond,
                step,
                scope,
                ..
            } => {
                self.line(depth, format_args!("{name}"));
                for part in [init, cond, step, scope] {
                    self.expr(Some(*part), depth + 1);
                }
            }
            ExprKind::ForWhile { cond, scope, .. } => {
                self.line(depth, format_args!("{name}"));
                self.expr(Some(*cond), depth + 1);
                self.expr(Some(*scope), depth + 1);
            }
            ExprKind::Record { kind, body, .. } => {
                let keyword = kind.keyword();
                self.line(depth, format_args!("{name} (kind: '{keyword}')"));
                for expr in body {
                    self.expr(Some(*expr), depth + 1);
                }
            }
            ExprKind::Typedef {
                name: type_name,
                op,
                record,
                ..
            } => {
                let op = op.symbol();
                self.line(depth, format_args!("{name} (op: '{op}', name: '{type_name}')"));
                self.expr(Some(*record), depth + 1);
            }
            ExprKind::Member {
                base,
                name: member,
                entity,
            } => {
                self.line(depth, format_args!("{name} (name: '{member}')"));
                self.expr(Some(*base), depth + 1);
                self.entity(Some(*entity), depth + 1);
            }
            ExprKind::StructLit { ty, args } => {
                let ty = self.type_name(*ty);
                self.line(depth, format_args!("{name} (type: '{ty}')"));
                self.expr(*args, depth + 1);
            }
        }
    }

    pub fn entity(&mut self, id: Option<EntityId>, depth: usize) {
        let Some(id) = id else {
            self.line(depth, format_args!("(NULL)"));
            return;
        };
        let ast = self.ast;
        let entity = ast.entity(id);
        let tag = entity.tag().name();
        let name = &entity.name;

        match &entity.kind {
            EntityKind::Var(var) => {
                self.line(depth, format_args!("{tag} (name: '{name}')"));
                self.type_header(var.ty, depth + 1);
            }
            EntityKind::Function(function) => {
                self.line(depth, format_args!("{tag} (name: '{name}')"));
                for param in &function.params {
                    self.entity(Some(*param), depth + 1);
                }
                self.type_header(function.ret, depth + 1);
            }
            _ => self.type_header(id, depth),
        }
    }

    /// One line describing a type entity, without descending into it.
    fn type_header(&mut self, id: EntityId, depth: usize) {
        let entity = self.ast.entity(id);
        let tag = entity.tag().name();
        let name = &entity.name;
        match &entity.kind {
            EntityKind::Atom(atom) => {
                let desc = atom.desc.name();
                let size = atom.size;
                self.line(
                    depth,
                    format_args!("{tag} (name: '{name}', desc: {desc}, size: {size})"),
                );
            }
            _ => self.line(depth, format_args!("{tag} (name: '{name}')")),
        }
    }
}
