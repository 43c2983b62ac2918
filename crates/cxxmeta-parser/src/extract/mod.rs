//! Declaration extraction engine.
//!
//! A pre-order, depth-first walk over the cursor tree that builds the typed
//! declaration tree. Policy applied at every level:
//! - cursors located in system headers are dropped with their whole subtree;
//!   a cursor without a location is kept
//! - records met inside another record are truncated to name and type
//! - variables initialized by a lambda get the type spelling `lambda`
//! - unmodelled kinds in scope position are reported and skipped
//!
//! The walk never prints. Depth and the optional symbol index live in the
//! [`TraversalContext`] handed in by the caller.

mod callables;
mod enums;
mod records;
mod variables;

#[cfg(test)]
mod tests;

pub use callables::default_value;

use cxxmeta_core::{Declaration, Diagnostic, Namespace, TranslationUnit, TraversalContext};

use crate::frontend::{Cursor, CursorKind};
use records::Nesting;

/// Walk the tree under `root` and return everything extracted from it.
pub fn extract<C: Cursor>(root: &C, ctx: &mut TraversalContext) -> TranslationUnit {
    let mut extractor = Extractor {
        ctx,
        diagnostics: Vec::new(),
        path: Vec::new(),
    };
    let declarations = extractor.scope(root);
    tracing::debug!(
        declarations = declarations.len(),
        diagnostics = extractor.diagnostics.len(),
        "extraction finished"
    );
    TranslationUnit {
        name: root.spelling(),
        declarations,
        diagnostics: extractor.diagnostics,
    }
}

struct Extractor<'a> {
    ctx: &'a mut TraversalContext,
    diagnostics: Vec<Diagnostic>,
    /// Position of the enclosing namespace fragments, outermost first.
    path: Vec<usize>,
}

impl Extractor<'_> {
    // ── Scope dispatch (translation unit and namespaces) ───────────────

    fn scope<C: Cursor>(&mut self, cursor: &C) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        for child in user_children(cursor) {
            let position = declarations.len();
            let declaration = match child.kind() {
                CursorKind::Namespace => {
                    self.path.push(position);
                    let namespace = self.namespace(&child);
                    self.path.pop();
                    Declaration::Namespace(namespace)
                }
                CursorKind::ClassDecl | CursorKind::StructDecl => self.record(&child, Nesting::Outer),
                CursorKind::EnumDecl => Declaration::Enum(self.enumeration(&child)),
                CursorKind::VarDecl => Declaration::Variable(variables::variable(&child)),
                CursorKind::FunctionDecl => Declaration::Function(callables::function(&child)),
                other => {
                    self.unrecognized(&child, &other);
                    continue;
                }
            };
            self.index(&child, &declaration, position);
            declarations.push(declaration);
        }
        declarations
    }

    /// Fragments of the same namespace stay separate nodes.
    fn namespace<C: Cursor>(&mut self, cursor: &C) -> Namespace {
        let name = cursor.spelling();
        self.ctx.enter_namespace(&name);
        let children = self.scope(cursor);
        self.ctx.exit_namespace();
        Namespace { name, children }
    }

    /// Record a scope-level declaration in the symbol index, if one is enabled.
    ///
    /// Forward declarations of records and enums are left out so they cannot
    /// replace the definition.
    fn index<C: Cursor>(&mut self, cursor: &C, declaration: &Declaration, position: usize) {
        if self.ctx.symbols().is_none() {
            return;
        }
        let definition = cursor.is_definition();
        let key = match declaration {
            Declaration::Namespace(ns) => self.ctx.qualify(&ns.name),
            Declaration::Class(record) | Declaration::Struct(record) if definition => {
                record.type_spelling.clone()
            }
            Declaration::Enum(e) if definition => e.type_spelling.clone(),
            _ => return,
        };
        let mut path = self.path.clone();
        path.push(position);

        let Some(symbols) = self.ctx.symbols_mut() else {
            return;
        };
        match declaration {
            Declaration::Namespace(_) => symbols.insert_namespace(key, path),
            Declaration::Class(_) => symbols.insert_class(key, path),
            Declaration::Struct(_) => symbols.insert_struct(key, path),
            Declaration::Enum(_) => symbols.insert_enum(key, path),
            _ => {}
        }
    }

    fn unrecognized<C: Cursor>(&mut self, cursor: &C, kind: &CursorKind) {
        let name = cursor.spelling();
        tracing::warn!(
            kind = %kind,
            name = %name,
            depth = self.ctx.depth(),
            "unrecognized declaration kind, skipping"
        );
        self.diagnostics.push(Diagnostic::UnrecognizedKind {
            kind: kind.to_string(),
            name,
        });
    }
}

/// Children of `cursor` that are not located in a system header.
fn user_children<C: Cursor>(cursor: &C) -> impl Iterator<Item = C> {
    cursor
        .children()
        .into_iter()
        .filter(|child| !in_system_header(child))
}

/// Missing location data counts as user code.
fn in_system_header<C: Cursor>(cursor: &C) -> bool {
    cursor
        .location()
        .is_some_and(|location| location.in_system_header)
}
