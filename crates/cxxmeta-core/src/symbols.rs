//! Per-kind lookup maps over extracted declarations.
//!
//! Population is opt-in (see [`TraversalContext::with_symbol_index`]). The
//! index stores positions in the tree, not copies, so lookups take the
//! [`TranslationUnit`] it was built alongside. Records and enums are keyed by
//! the front end's fully qualified type spelling, which is the same spelling
//! base specifiers carry, so a base can be resolved to the record that declares
//! it. Only definitions are indexed; forward declarations never shadow them.
//!
//! [`TraversalContext::with_symbol_index`]: crate::TraversalContext::with_symbol_index

use std::collections::BTreeMap;

use crate::declaration::{Base, Declaration, Enum, Namespace, Record, TranslationUnit};

/// Child indices from the unit's top-level declarations down to one
/// declaration. See [`TranslationUnit::at`].
pub type DeclPath = Vec<usize>;

#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    namespaces: BTreeMap<String, Vec<DeclPath>>,
    classes: BTreeMap<String, DeclPath>,
    structs: BTreeMap<String, DeclPath>,
    enums: BTreeMap<String, DeclPath>,
}

impl SymbolIndex {
    /// Namespace fragments are never merged: every fragment is kept, in order.
    pub fn insert_namespace(&mut self, qualified_name: String, path: DeclPath) {
        self.namespaces.entry(qualified_name).or_default().push(path);
    }

    pub fn insert_class(&mut self, type_spelling: String, path: DeclPath) {
        self.classes.insert(type_spelling, path);
    }

    pub fn insert_struct(&mut self, type_spelling: String, path: DeclPath) {
        self.structs.insert(type_spelling, path);
    }

    pub fn insert_enum(&mut self, type_spelling: String, path: DeclPath) {
        self.enums.insert(type_spelling, path);
    }

    #[must_use]
    pub fn namespace_fragments<'u>(
        &self,
        unit: &'u TranslationUnit,
        qualified_name: &str,
    ) -> Vec<&'u Namespace> {
        self.namespaces
            .get(qualified_name)
            .into_iter()
            .flatten()
            .filter_map(|path| match unit.at(path) {
                Some(Declaration::Namespace(ns)) => Some(ns),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn record<'u>(
        &self,
        unit: &'u TranslationUnit,
        type_spelling: &str,
    ) -> Option<&'u Record> {
        self.classes
            .get(type_spelling)
            .or_else(|| self.structs.get(type_spelling))
            .and_then(|path| unit.at(path))
            .and_then(Declaration::as_record)
    }

    #[must_use]
    pub fn enumeration<'u>(
        &self,
        unit: &'u TranslationUnit,
        type_spelling: &str,
    ) -> Option<&'u Enum> {
        match unit.at(self.enums.get(type_spelling)?) {
            Some(Declaration::Enum(e)) => Some(e),
            _ => None,
        }
    }

    /// The extracted record a base specifier names, if it was seen.
    #[must_use]
    pub fn resolve_base<'u>(
        &self,
        unit: &'u TranslationUnit,
        base: &Base,
    ) -> Option<&'u Record> {
        self.record(unit, &base.type_spelling)
    }

    #[must_use]
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }
}
