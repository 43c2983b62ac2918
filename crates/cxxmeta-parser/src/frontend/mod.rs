//! The cursor contract the extraction engine consumes.
//!
//! [`Cursor`] is everything the engine may ask of one AST node. The libclang
//! implementation lives in [`libclang`]; tests drive the engine through an
//! in-memory tree instead.

pub mod libclang;

use std::fmt;

use cxxmeta_core::{Access, StorageClass};

/// Cursor kinds the engine dispatches on.
///
/// The front end's kind set is open and versioned; anything not modelled here
/// arrives as [`CursorKind::Other`] carrying the front end's own kind name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CursorKind {
    TranslationUnit,
    Namespace,
    ClassDecl,
    StructDecl,
    EnumDecl,
    EnumConstantDecl,
    VarDecl,
    FunctionDecl,
    BaseSpecifier,
    Method,
    FieldDecl,
    ParmDecl,
    LambdaExpr,
    Other(String),
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(name) => f.write_str(name),
            known => write!(f, "{known:?}"),
        }
    }
}

/// Where a cursor's declaration sits, as far as filtering cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    pub in_system_header: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Punctuation,
    Keyword,
    Identifier,
    Literal,
    Comment,
}

/// One lexical token of a declaration's source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, spelling: impl Into<String>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
        }
    }

    #[must_use]
    pub fn is_punctuation(&self, spelling: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.spelling == spelling
    }
}

/// Read-only view of one AST node.
///
/// Queries that the front end cannot answer fall back to empty spellings,
/// `Access::None`, `StorageClass::None`, or `None`.
pub trait Cursor: Sized {
    fn kind(&self) -> CursorKind;

    /// Declared name; empty for anonymous entities.
    fn spelling(&self) -> String;

    fn type_spelling(&self) -> String;

    /// Direct children, in source order.
    fn children(&self) -> Vec<Self>;

    /// `None` when the front end has no location for this cursor.
    fn location(&self) -> Option<Location>;

    /// Whether this cursor is the defining declaration of its entity, as
    /// opposed to a forward declaration.
    fn is_definition(&self) -> bool;

    fn access(&self) -> Access;

    fn storage(&self) -> StorageClass;

    fn result_type_spelling(&self) -> String;

    /// Tokens covering this cursor's source range, in order.
    fn tokens(&self) -> Vec<Token>;

    /// Resolved value of an enum constant.
    fn enum_value(&self) -> Option<i64>;

    /// Integer type backing an enum declaration.
    fn enum_underlying_type(&self) -> String;
}
