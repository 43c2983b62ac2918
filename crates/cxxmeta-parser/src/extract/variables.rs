//! Variables and fields.

use cxxmeta_core::{Field, ValueType, Variable};

use crate::frontend::{Cursor, CursorKind};

pub(super) fn variable<C: Cursor>(cursor: &C) -> Variable {
    Variable {
        name: cursor.spelling(),
        value_type: value_type(cursor),
    }
}

pub(super) fn field<C: Cursor>(cursor: &C) -> Field {
    Field {
        name: cursor.spelling(),
        access: cursor.access(),
        value_type: value_type(cursor),
    }
}

/// Closure types have no printable name, so a declaration whose first child is
/// a lambda expression records [`ValueType::LAMBDA`] instead.
fn value_type<C: Cursor>(cursor: &C) -> ValueType {
    let initialized_by_lambda = cursor
        .children()
        .first()
        .is_some_and(|init| init.kind() == CursorKind::LambdaExpr);
    let spelling = if initialized_by_lambda {
        ValueType::LAMBDA.to_string()
    } else {
        cursor.type_spelling()
    };
    ValueType {
        spelling,
        storage: cursor.storage(),
    }
}
