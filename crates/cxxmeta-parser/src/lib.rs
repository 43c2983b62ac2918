//! # cxxmeta-parser
//!
//! libclang-driven extraction of C++ declarations.
//!
//! - [`unit`]: aggregates the configured headers into one in-memory
//!   translation unit with its include paths and macro flags
//! - [`frontend`]: the cursor contract and its libclang implementation
//! - [`extract`]: the recursive dispatcher that turns cursors into a
//!   [`cxxmeta_core::TranslationUnit`]

pub mod error;
pub mod extract;
pub mod frontend;
pub mod unit;

pub use error::ParserError;
pub use extract::{default_value, extract};
pub use frontend::libclang::{ClangCursor, LibClang};
pub use frontend::{Cursor, CursorKind, Location, Token, TokenKind};
pub use unit::SyntheticUnit;

use cxxmeta_core::{TranslationUnit, TraversalContext};

/// Parse `unit` with libclang and extract its declarations.
///
/// The parse state is released before this returns; the tree is fully owned.
///
/// # Errors
/// Returns [`ParserError`] if libclang is unavailable or the parse fails.
pub fn extract_unit(
    unit: &SyntheticUnit,
    ctx: &mut TraversalContext,
) -> Result<TranslationUnit, ParserError> {
    LibClang.parse_with(unit, |root| extract(root, ctx))
}
