//! Classes and structs.

use cxxmeta_core::{Base, Declaration, Record};

use super::{Extractor, callables, user_children, variables};
use crate::frontend::{Cursor, CursorKind};

/// Whether a record was reached from a scope or from another record's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Nesting {
    Outer,
    /// Truncated: name and type only, no recursion.
    Inner,
}

impl Extractor<'_> {
    /// A class or struct declaration, tagged by the cursor's kind.
    pub(super) fn record<C: Cursor>(&mut self, cursor: &C, nesting: Nesting) -> Declaration {
        let record = self.record_body(cursor, nesting);
        if cursor.kind() == CursorKind::StructDecl {
            Declaration::Struct(record)
        } else {
            Declaration::Class(record)
        }
    }

    fn record_body<C: Cursor>(&mut self, cursor: &C, nesting: Nesting) -> Record {
        let mut record = Record {
            name: cursor.spelling(),
            type_spelling: cursor.type_spelling(),
            truncated: nesting == Nesting::Inner,
            ..Record::default()
        };
        if record.truncated {
            return record;
        }

        self.ctx.indent();
        for child in user_children(cursor) {
            match child.kind() {
                CursorKind::BaseSpecifier => record.bases.push(Base {
                    access: child.access(),
                    type_spelling: child.type_spelling(),
                }),
                CursorKind::Method => {
                    record
                        .members
                        .push(Declaration::Method(callables::method(&child)));
                }
                CursorKind::FieldDecl | CursorKind::VarDecl => {
                    record
                        .members
                        .push(Declaration::Field(variables::field(&child)));
                }
                CursorKind::ClassDecl | CursorKind::StructDecl => {
                    record.members.push(self.record(&child, Nesting::Inner));
                }
                other => {
                    // Constructors, destructors, friends, access labels, ...
                    tracing::trace!(
                        kind = %other,
                        name = %child.spelling(),
                        record = %record.name,
                        "member not extracted"
                    );
                }
            }
        }
        self.ctx.unindent();
        record
    }
}
