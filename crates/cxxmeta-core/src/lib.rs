//! # cxxmeta-core
//!
//! Core types shared by every cxxmeta crate:
//! - The typed declaration tree produced by one extraction run
//! - Access and storage classifications reported by the front end
//! - The traversal context (depth, scope, optional symbol index)
//! - The indented text emitter
//!
//! Nothing here touches the compiler front end. The tree is plain owned data,
//! so renderers and tests can work on it without a parse in flight.

pub mod context;
pub mod declaration;
pub mod render;
pub mod symbols;
pub mod types;

pub use context::TraversalContext;
pub use declaration::{
    Base, Declaration, Diagnostic, Enum, EnumConstant, Field, Function, Method, Namespace,
    Parameter, Record, Signature, TranslationUnit, ValueType, Variable,
};
pub use render::{Emitter, TextEmitter, render_to_string};
pub use symbols::{DeclPath, SymbolIndex};
pub use types::{Access, DeclKind, StorageClass};
