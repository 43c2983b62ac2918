//! The typed declaration tree produced by one extraction run.
//!
//! Each `Declaration` variant owns exactly the children its kind allows:
//! namespaces and records own nested declarations, enums own constants, and
//! callables own parameters. Child order is source order throughout.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Access, DeclKind, StorageClass};

/// Root of the tree: the synthesized translation unit and everything extracted
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub name: String,
    pub declarations: Vec<Declaration>,
    /// Non-fatal conditions met during the walk, in encounter order.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslationUnit {
    /// Depth-first, pre-order iterator over every declaration in the unit.
    ///
    /// Parameters and enum constants are not `Declaration`s and are reached
    /// through their owners.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        Descendants {
            stack: self.declarations.iter().rev().collect(),
        }
    }

    /// First declaration (pre-order) with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.iter().find(|decl| decl.name() == name)
    }

    /// The declaration at `path`: an index into `declarations`, then an index
    /// into each successive declaration's children.
    #[must_use]
    pub fn at(&self, path: &[usize]) -> Option<&Declaration> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.declarations.get(*first)?, |decl, &i| decl.children().get(i))
    }
}

struct Descendants<'a> {
    stack: Vec<&'a Declaration>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Declaration;

    fn next(&mut self) -> Option<Self::Item> {
        let decl = self.stack.pop()?;
        self.stack.extend(decl.children().iter().rev());
        Some(decl)
    }
}

/// One extracted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Namespace(Namespace),
    Class(Record),
    Struct(Record),
    Enum(Enum),
    Function(Function),
    Variable(Variable),
    Field(Field),
    Method(Method),
}

impl Declaration {
    #[must_use]
    pub const fn kind(&self) -> DeclKind {
        match self {
            Self::Namespace(_) => DeclKind::Namespace,
            Self::Class(_) => DeclKind::Class,
            Self::Struct(_) => DeclKind::Struct,
            Self::Enum(_) => DeclKind::Enum,
            Self::Function(_) => DeclKind::Function,
            Self::Variable(_) => DeclKind::Variable,
            Self::Field(_) => DeclKind::Field,
            Self::Method(_) => DeclKind::Method,
        }
    }

    /// Spelling of the declared name. Empty for anonymous entities.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Namespace(ns) => &ns.name,
            Self::Class(record) | Self::Struct(record) => &record.name,
            Self::Enum(e) => &e.name,
            Self::Function(f) => &f.name,
            Self::Variable(v) => &v.name,
            Self::Field(f) => &f.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Nested declarations: namespace contents or record members.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Namespace(ns) => &ns.children,
            Self::Class(record) | Self::Struct(record) => &record.members,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Class(record) | Self::Struct(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub children: Vec<Declaration>,
}

/// A class or struct.
///
/// A `truncated` record was met inside another record's member list; only its
/// name and type were captured, so `bases` and `members` stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub type_spelling: String,
    pub bases: Vec<Base>,
    pub truncated: bool,
    pub members: Vec<Declaration>,
}

/// One base-class specifier, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    pub access: Access,
    pub type_spelling: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub type_spelling: String,
    pub underlying_type: String,
    pub constants: Vec<EnumConstant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    pub type_spelling: String,
    pub value: i64,
}

/// Return type, storage class, and parameters shared by functions and methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub return_type: String,
    pub storage: StorageClass,
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub signature: Signature,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub access: Access,
    pub signature: Signature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_spelling: String,
    /// First lexical token after `=`, verbatim. Never evaluated.
    pub default_value: Option<String>,
}

/// Type and storage shared by variables and fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueType {
    /// Front-end type spelling, or [`ValueType::LAMBDA`] for closures.
    pub spelling: String,
    pub storage: StorageClass,
}

impl ValueType {
    /// Spelling recorded in place of an unnameable closure type.
    pub const LAMBDA: &'static str = "lambda";

    #[must_use]
    pub fn is_lambda(&self) -> bool {
        self.spelling == Self::LAMBDA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value_type: ValueType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub access: Access,
    pub value_type: ValueType,
}

/// A non-fatal condition recorded during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A cursor kind the dispatcher does not model, skipped with its subtree.
    UnrecognizedKind { kind: String, name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedKind { kind, name } => {
                write!(f, "unrecognized declaration kind {kind} ({name})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit() -> TranslationUnit {
        TranslationUnit {
            name: "input.h".into(),
            declarations: vec![
                Declaration::Namespace(Namespace {
                    name: "outer".into(),
                    children: vec![
                        Declaration::Struct(Record {
                            name: "Point".into(),
                            type_spelling: "outer::Point".into(),
                            members: vec![Declaration::Field(Field {
                                name: "x".into(),
                                access: Access::Public,
                                value_type: ValueType {
                                    spelling: "int".into(),
                                    storage: StorageClass::None,
                                },
                            })],
                            ..Record::default()
                        }),
                        Declaration::Variable(Variable {
                            name: "origin".into(),
                            value_type: ValueType::default(),
                        }),
                    ],
                }),
                Declaration::Function(Function {
                    name: "free".into(),
                    signature: Signature::default(),
                }),
            ],
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn iter_is_preorder_in_source_order() {
        let unit = unit();
        let names: Vec<_> = unit.iter().map(Declaration::name).collect();
        assert_eq!(names, vec!["outer", "Point", "x", "origin", "free"]);
    }

    #[test]
    fn find_reaches_nested_members() {
        let unit = unit();
        let field = unit.find("x").expect("field should be found");
        assert_eq!(field.kind(), DeclKind::Field);
        assert!(unit.find("missing").is_none());
    }

    #[test]
    fn at_follows_child_indices() {
        let unit = unit();
        assert_eq!(unit.at(&[0]).map(Declaration::name), Some("outer"));
        assert_eq!(unit.at(&[0, 1]).map(Declaration::name), Some("origin"));
        assert_eq!(unit.at(&[0, 0, 0]).map(Declaration::name), Some("x"));
        assert!(unit.at(&[]).is_none());
        assert!(unit.at(&[2]).is_none());
        assert!(unit.at(&[1, 0]).is_none());
    }

    #[test]
    fn leaf_declarations_have_no_children() {
        let unit = unit();
        let function = unit.find("free").expect("function should be found");
        assert!(function.children().is_empty());
        assert!(function.as_record().is_none());
    }

    #[test]
    fn lambda_marker() {
        let value_type = ValueType {
            spelling: ValueType::LAMBDA.into(),
            storage: StorageClass::None,
        };
        assert!(value_type.is_lambda());
        assert!(!ValueType::default().is_lambda());
    }

    #[test]
    fn diagnostic_display() {
        let diagnostic = Diagnostic::UnrecognizedKind {
            kind: "ClassTemplate".into(),
            name: "Box".into(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "unrecognized declaration kind ClassTemplate (Box)"
        );
    }
}
