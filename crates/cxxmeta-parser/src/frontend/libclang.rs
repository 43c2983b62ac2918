//! libclang implementation of the cursor contract.
//!
//! The `Clang` handle, the index, and the translation unit are created and
//! dropped inside [`LibClang::parse_with`]. Cursors borrow the translation
//! unit, so the borrow checker keeps every [`ClangCursor`] inside that call.

use clang::token::TokenKind as ClangTokenKind;
use clang::{Accessibility, Clang, Entity, EntityKind, Index, Unsaved};
use cxxmeta_core::{Access, StorageClass};

use super::{Cursor, CursorKind, Location, Token, TokenKind};
use crate::error::ParserError;
use crate::unit::SyntheticUnit;

/// Entry point to the libclang front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibClang;

impl LibClang {
    /// Parse `unit` and run `visit` on its root cursor while the parse is live.
    ///
    /// Function bodies are skipped, incomplete input is tolerated, and brief
    /// comments are retained.
    ///
    /// # Errors
    /// [`ParserError::FrontEndUnavailable`] if libclang cannot be loaded or is
    /// already in use, [`ParserError::ParseFailed`] if no translation unit is
    /// produced.
    pub fn parse_with<R>(
        self,
        unit: &SyntheticUnit,
        visit: impl FnOnce(&ClangCursor<'_>) -> R,
    ) -> Result<R, ParserError> {
        let clang = Clang::new().map_err(ParserError::FrontEndUnavailable)?;
        let index = Index::new(&clang, false, false);
        let unsaved = Unsaved::new(&unit.file_name, &unit.contents);

        tracing::debug!(
            file = %unit.file_name,
            arguments = ?unit.arguments,
            "parsing translation unit"
        );

        let translation_unit = index
            .parser(&unit.file_name)
            .arguments(unit.arguments.as_slice())
            .unsaved(&[unsaved])
            .incomplete(true)
            .skip_function_bodies(true)
            .briefs_in_completion_results(true)
            .parse()
            .map_err(|source| ParserError::ParseFailed {
                file: unit.file_name.clone(),
                source,
            })?;

        let root = ClangCursor(translation_unit.get_entity());
        Ok(visit(&root))
    }
}

/// A libclang entity seen through the [`Cursor`] contract.
#[derive(Debug, Clone, Copy)]
pub struct ClangCursor<'tu>(Entity<'tu>);

impl Cursor for ClangCursor<'_> {
    fn kind(&self) -> CursorKind {
        match self.0.get_kind() {
            EntityKind::TranslationUnit => CursorKind::TranslationUnit,
            EntityKind::Namespace => CursorKind::Namespace,
            EntityKind::ClassDecl => CursorKind::ClassDecl,
            EntityKind::StructDecl => CursorKind::StructDecl,
            EntityKind::EnumDecl => CursorKind::EnumDecl,
            EntityKind::EnumConstantDecl => CursorKind::EnumConstantDecl,
            EntityKind::VarDecl => CursorKind::VarDecl,
            EntityKind::FunctionDecl => CursorKind::FunctionDecl,
            EntityKind::BaseSpecifier => CursorKind::BaseSpecifier,
            EntityKind::Method => CursorKind::Method,
            EntityKind::FieldDecl => CursorKind::FieldDecl,
            EntityKind::ParmDecl => CursorKind::ParmDecl,
            EntityKind::LambdaExpr => CursorKind::LambdaExpr,
            other => CursorKind::Other(format!("{other:?}")),
        }
    }

    fn spelling(&self) -> String {
        self.0.get_name().unwrap_or_default()
    }

    fn type_spelling(&self) -> String {
        self.0
            .get_type()
            .map(|ty| ty.get_display_name())
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        self.0.get_children().into_iter().map(ClangCursor).collect()
    }

    fn location(&self) -> Option<Location> {
        self.0.get_location().map(|location| Location {
            in_system_header: location.is_in_system_header(),
        })
    }

    fn is_definition(&self) -> bool {
        self.0.is_definition()
    }

    fn access(&self) -> Access {
        match self.0.get_accessibility() {
            Some(Accessibility::Public) => Access::Public,
            Some(Accessibility::Protected) => Access::Protected,
            Some(Accessibility::Private) => Access::Private,
            None => Access::None,
        }
    }

    fn storage(&self) -> StorageClass {
        match self.0.get_storage_class() {
            None | Some(clang::StorageClass::None) => StorageClass::None,
            Some(clang::StorageClass::Extern) => StorageClass::Extern,
            Some(clang::StorageClass::Static) => StorageClass::Static,
            Some(clang::StorageClass::PrivateExtern) => StorageClass::PrivateExtern,
            Some(clang::StorageClass::Auto) => StorageClass::Auto,
            Some(clang::StorageClass::Register) => StorageClass::Register,
            Some(_) => StorageClass::Other,
        }
    }

    fn result_type_spelling(&self) -> String {
        self.0
            .get_result_type()
            .map(|ty| ty.get_display_name())
            .unwrap_or_default()
    }

    fn tokens(&self) -> Vec<Token> {
        let Some(range) = self.0.get_range() else {
            return Vec::new();
        };
        range
            .tokenize()
            .into_iter()
            .map(|token| {
                let kind = match token.get_kind() {
                    ClangTokenKind::Punctuation => TokenKind::Punctuation,
                    ClangTokenKind::Keyword => TokenKind::Keyword,
                    ClangTokenKind::Identifier => TokenKind::Identifier,
                    ClangTokenKind::Literal => TokenKind::Literal,
                    ClangTokenKind::Comment => TokenKind::Comment,
                };
                Token::new(kind, token.get_spelling())
            })
            .collect()
    }

    fn enum_value(&self) -> Option<i64> {
        self.0.get_enum_constant_value().map(|(signed, _)| signed)
    }

    fn enum_underlying_type(&self) -> String {
        self.0
            .get_enum_underlying_type()
            .map(|ty| ty.get_display_name())
            .unwrap_or_default()
    }
}
