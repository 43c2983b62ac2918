use super::*;
use crate::frontend::{Location, Token, TokenKind};
use cxxmeta_core::{
    Access, DeclKind, Declaration, Enum, Record, StorageClass, SymbolIndex, TranslationUnit,
    TraversalContext,
};

mod system_header_tests;

// ════════════════════════════════════════════════════════════════
// In-memory cursor tree
// ════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
struct MockCursor {
    kind: CursorKind,
    spelling: String,
    type_spelling: String,
    children: Vec<MockCursor>,
    location: Option<Location>,
    definition: bool,
    access: Access,
    storage: StorageClass,
    result_type: String,
    tokens: Vec<Token>,
    enum_value: Option<i64>,
    underlying: String,
}

impl MockCursor {
    fn new(kind: CursorKind, spelling: &str) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            type_spelling: String::new(),
            children: Vec::new(),
            location: Some(Location::default()),
            definition: true,
            access: Access::None,
            storage: StorageClass::None,
            result_type: String::new(),
            tokens: Vec::new(),
            enum_value: None,
            underlying: String::new(),
        }
    }

    fn typed(mut self, type_spelling: &str) -> Self {
        self.type_spelling = type_spelling.into();
        self
    }

    fn with(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    fn with_storage(mut self, storage: StorageClass) -> Self {
        self.storage = storage;
        self
    }

    fn with_tokens(mut self, source: &str) -> Self {
        self.tokens = lex(source);
        self
    }

    /// Located in a system header.
    fn system(mut self) -> Self {
        self.location = Some(Location { in_system_header: true });
        self
    }

    fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    /// A declaration without a body, such as `class Pet;`.
    fn forward(mut self) -> Self {
        self.definition = false;
        self
    }

    fn unresolved_value(mut self) -> Self {
        self.enum_value = None;
        self
    }
}

impl Cursor for MockCursor {
    fn kind(&self) -> CursorKind {
        self.kind.clone()
    }

    fn spelling(&self) -> String {
        self.spelling.clone()
    }

    fn type_spelling(&self) -> String {
        self.type_spelling.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location
    }

    fn is_definition(&self) -> bool {
        self.definition
    }

    fn access(&self) -> Access {
        self.access
    }

    fn storage(&self) -> StorageClass {
        self.storage
    }

    fn result_type_spelling(&self) -> String {
        self.result_type.clone()
    }

    fn tokens(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    fn enum_value(&self) -> Option<i64> {
        self.enum_value
    }

    fn enum_underlying_type(&self) -> String {
        self.underlying.clone()
    }
}

/// Whitespace-separated tokens with a rough kind classification.
fn lex(source: &str) -> Vec<Token> {
    const KEYWORDS: &[&str] = &["int", "char", "double", "const", "void", "nullptr"];
    source
        .split_whitespace()
        .map(|word| {
            let kind = if word.chars().all(|c| !c.is_alphanumeric() && c != '_') {
                TokenKind::Punctuation
            } else if word.starts_with(|c: char| c.is_ascii_digit() || c == '"') {
                TokenKind::Literal
            } else if KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            Token::new(kind, word)
        })
        .collect()
}

// ── Builders ───────────────────────────────────────────────────────

fn tu(children: impl IntoIterator<Item = MockCursor>) -> MockCursor {
    MockCursor::new(CursorKind::TranslationUnit, "input.h").with(children)
}

fn namespace(name: &str) -> MockCursor {
    MockCursor::new(CursorKind::Namespace, name)
}

fn class(name: &str, type_spelling: &str) -> MockCursor {
    MockCursor::new(CursorKind::ClassDecl, name).typed(type_spelling)
}

fn struct_decl(name: &str, type_spelling: &str) -> MockCursor {
    MockCursor::new(CursorKind::StructDecl, name).typed(type_spelling)
}

fn base(access: Access, type_spelling: &str) -> MockCursor {
    MockCursor::new(CursorKind::BaseSpecifier, "")
        .typed(type_spelling)
        .with_access(access)
}

fn method(name: &str, return_type: &str) -> MockCursor {
    let mut cursor = MockCursor::new(CursorKind::Method, name).with_access(Access::Public);
    cursor.result_type = return_type.into();
    cursor
}

fn function(name: &str, return_type: &str) -> MockCursor {
    let mut cursor = MockCursor::new(CursorKind::FunctionDecl, name);
    cursor.result_type = return_type.into();
    cursor
}

fn param(name: &str, type_spelling: &str, source: &str) -> MockCursor {
    MockCursor::new(CursorKind::ParmDecl, name)
        .typed(type_spelling)
        .with_tokens(source)
}

fn field(name: &str, type_spelling: &str, access: Access) -> MockCursor {
    MockCursor::new(CursorKind::FieldDecl, name)
        .typed(type_spelling)
        .with_access(access)
}

fn var(name: &str, type_spelling: &str) -> MockCursor {
    MockCursor::new(CursorKind::VarDecl, name).typed(type_spelling)
}

fn lambda() -> MockCursor {
    MockCursor::new(CursorKind::LambdaExpr, "").typed("(lambda at input.h:1:11)")
}

fn enum_decl(name: &str, type_spelling: &str, underlying: &str) -> MockCursor {
    let mut cursor = MockCursor::new(CursorKind::EnumDecl, name).typed(type_spelling);
    cursor.underlying = underlying.into();
    cursor
}

fn constant(name: &str, type_spelling: &str, value: i64) -> MockCursor {
    let mut cursor = MockCursor::new(CursorKind::EnumConstantDecl, name).typed(type_spelling);
    cursor.enum_value = Some(value);
    cursor
}

fn other(kind: &str, name: &str) -> MockCursor {
    MockCursor::new(CursorKind::Other(kind.into()), name)
}

// ── Helpers ────────────────────────────────────────────────────────

fn run(root: &MockCursor) -> TranslationUnit {
    extract(root, &mut TraversalContext::new())
}

fn find_by_name<'a>(unit: &'a TranslationUnit, name: &str) -> &'a Declaration {
    unit.find(name).unwrap_or_else(|| {
        let available: Vec<_> = unit
            .iter()
            .map(|d| format!("{:?}: {}", d.kind(), d.name()))
            .collect();
        panic!(
            "declaration {name:?} not found. Available declarations:\n{}",
            available.join("\n")
        );
    })
}

fn record<'a>(unit: &'a TranslationUnit, name: &str) -> &'a Record {
    find_by_name(unit, name)
        .as_record()
        .unwrap_or_else(|| panic!("{name} is not a class or struct"))
}

fn names(unit: &TranslationUnit) -> Vec<&str> {
    unit.iter().map(Declaration::name).collect()
}
