//! Free functions, methods, and their parameters.

use cxxmeta_core::{Function, Method, Parameter, Signature};

use super::user_children;
use crate::frontend::{Cursor, CursorKind, Token};

pub(super) fn function<C: Cursor>(cursor: &C) -> Function {
    Function {
        name: cursor.spelling(),
        signature: signature(cursor),
    }
}

pub(super) fn method<C: Cursor>(cursor: &C) -> Method {
    Method {
        name: cursor.spelling(),
        access: cursor.access(),
        signature: signature(cursor),
    }
}

/// Only parameter children are visited; bodies are never parsed.
fn signature<C: Cursor>(cursor: &C) -> Signature {
    Signature {
        return_type: cursor.result_type_spelling(),
        storage: cursor.storage(),
        params: user_children(cursor)
            .filter(|child| child.kind() == CursorKind::ParmDecl)
            .map(|child| parameter(&child))
            .collect(),
    }
}

fn parameter<C: Cursor>(cursor: &C) -> Parameter {
    Parameter {
        name: cursor.spelling(),
        type_spelling: cursor.type_spelling(),
        default_value: default_value(&cursor.tokens()),
    }
}

/// The single token following the first `=` punctuation token, verbatim.
///
/// Lexical only: `x = 1+2` yields `"1"` and `p = Foo::Bar` yields `"Foo"`.
/// `None` when there is no `=` or nothing follows it.
#[must_use]
pub fn default_value(tokens: &[Token]) -> Option<String> {
    let equals = tokens.iter().position(|token| token.is_punctuation("="))?;
    tokens.get(equals + 1).map(|token| token.spelling.clone())
}
