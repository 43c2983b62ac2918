//! Classification enums reported by the front end and carried by declarations.
//!
//! All enums use `snake_case` serialization and render through `as_str()`, which
//! is also the spelling used in the text report.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// C++ access specifier of a class member or base-class relationship.
///
/// `None` is what the front end reports for entities outside any class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Protected,
    Private,
    #[default]
    None,
}

impl Access {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StorageClass
// ---------------------------------------------------------------------------

/// Storage duration and linkage of a variable or function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    #[default]
    None,
    Extern,
    Static,
    PrivateExtern,
    Auto,
    Register,
    /// A storage class the front end knows but the model does not name.
    Other,
}

impl StorageClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Extern => "extern",
            Self::Static => "static",
            Self::PrivateExtern => "private_extern",
            Self::Auto => "auto",
            Self::Register => "register",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeclKind
// ---------------------------------------------------------------------------

/// The kind tag of an extracted declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Namespace,
    Class,
    Struct,
    Enum,
    Function,
    Variable,
    Field,
    Method,
}

impl DeclKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Field => "field",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Access::Public, "public")]
    #[case(Access::Protected, "protected")]
    #[case(Access::Private, "private")]
    #[case(Access::None, "none")]
    fn access_display(#[case] access: Access, #[case] expected: &str) {
        assert_eq!(access.to_string(), expected);
    }

    #[test]
    fn storage_defaults_to_none() {
        assert_eq!(StorageClass::default(), StorageClass::None);
        assert_eq!(StorageClass::PrivateExtern.to_string(), "private_extern");
    }

    #[test]
    fn decl_kind_display_is_snake_case() {
        assert_eq!(DeclKind::Function.to_string(), "function");
        assert_eq!(DeclKind::Namespace.to_string(), "namespace");
    }
}
