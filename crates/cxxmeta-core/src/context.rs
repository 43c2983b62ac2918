//! Traversal bookkeeping passed explicitly into every extraction or rendering
//! step.

use crate::symbols::SymbolIndex;

/// Depth counter, enclosing-namespace stack, and optional symbol index for a
/// single walk.
///
/// A fresh context is built per run; nothing here outlives the tree it was
/// used to build or render.
#[derive(Debug, Default)]
pub struct TraversalContext {
    depth: usize,
    scope: Vec<String>,
    symbols: Option<SymbolIndex>,
}

impl TraversalContext {
    const INDENT: &'static str = "  ";

    /// How the front end spells an unnamed namespace in qualified names.
    pub const ANONYMOUS_NAMESPACE: &'static str = "(anonymous namespace)";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that populates a [`SymbolIndex`] as declarations complete.
    #[must_use]
    pub fn with_symbol_index() -> Self {
        Self {
            symbols: Some(SymbolIndex::default()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub const fn indent(&mut self) {
        self.depth += 1;
    }

    pub const fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Leading whitespace for a line at the current depth.
    #[must_use]
    pub fn padding(&self) -> String {
        Self::INDENT.repeat(self.depth)
    }

    /// Enter a namespace scope: one level deeper, name pushed for qualification.
    pub fn enter_namespace(&mut self, name: &str) {
        self.indent();
        self.scope.push(Self::segment(name).to_string());
    }

    pub fn exit_namespace(&mut self) {
        self.scope.pop();
        self.unindent();
    }

    /// `a::b::name` for `name` declared in the current namespace scope.
    ///
    /// Unnamed namespaces appear as `(anonymous namespace)`, so keys match the
    /// front end's type spellings.
    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        let name = Self::segment(name);
        if self.scope.is_empty() {
            return name.to_string();
        }
        let mut qualified = self.scope.join("::");
        qualified.push_str("::");
        qualified.push_str(name);
        qualified
    }

    const fn segment(name: &str) -> &str {
        if name.is_empty() {
            Self::ANONYMOUS_NAMESPACE
        } else {
            name
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> Option<&SymbolIndex> {
        self.symbols.as_ref()
    }

    pub const fn symbols_mut(&mut self) -> Option<&mut SymbolIndex> {
        self.symbols.as_mut()
    }

    /// Take the populated index, leaving the context without one.
    pub const fn take_symbols(&mut self) -> Option<SymbolIndex> {
        self.symbols.take()
    }
}
