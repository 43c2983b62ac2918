//! Enumerations.

use cxxmeta_core::{Enum, EnumConstant};

use super::{Extractor, user_children};
use crate::frontend::{Cursor, CursorKind};

impl Extractor<'_> {
    pub(super) fn enumeration<C: Cursor>(&mut self, cursor: &C) -> Enum {
        self.ctx.indent();
        // Used only when the front end cannot resolve a constant: an implicit
        // enumerator is the previous value plus one, starting at zero.
        let mut next_implicit: i64 = 0;
        let constants = user_children(cursor)
            .filter(|child| child.kind() == CursorKind::EnumConstantDecl)
            .map(|child| {
                let value = child.enum_value().unwrap_or(next_implicit);
                next_implicit = value.wrapping_add(1);
                EnumConstant {
                    name: child.spelling(),
                    type_spelling: child.type_spelling(),
                    value,
                }
            })
            .collect();
        self.ctx.unindent();

        Enum {
            name: cursor.spelling(),
            type_spelling: cursor.type_spelling(),
            underlying_type: cursor.enum_underlying_type(),
            constants,
        }
    }
}
