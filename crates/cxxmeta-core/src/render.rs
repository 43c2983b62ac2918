//! Rendering of a finished declaration tree.
//!
//! Extraction never prints. An [`Emitter`] consumes the tree in a separate
//! pass, so another output format only needs another implementation.

use std::io::{self, Write};

use crate::context::TraversalContext;
use crate::declaration::{
    Declaration, Enum, Field, Function, Method, Namespace, Parameter, Record, Signature,
    TranslationUnit, Variable,
};

/// A renderer for a complete [`TranslationUnit`].
pub trait Emitter {
    /// # Errors
    /// Returns any I/O error raised by the underlying sink.
    fn emit(&mut self, unit: &TranslationUnit) -> io::Result<()>;
}

/// Indented text: one attribute per line, two spaces per depth level.
pub struct TextEmitter<W: Write> {
    out: W,
    ctx: TraversalContext,
}

impl<W: Write> TextEmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ctx: TraversalContext::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}{label}: {value}", self.ctx.padding())
    }

    fn declaration(&mut self, decl: &Declaration) -> io::Result<()> {
        match decl {
            Declaration::Namespace(ns) => self.namespace(ns),
            Declaration::Class(record) => self.record("class", record),
            Declaration::Struct(record) => self.record("struct", record),
            Declaration::Enum(e) => self.enumeration(e),
            Declaration::Function(f) => self.function(f),
            Declaration::Variable(v) => self.variable(v),
            Declaration::Field(f) => self.field(f),
            Declaration::Method(m) => self.method(m),
        }
    }

    fn namespace(&mut self, ns: &Namespace) -> io::Result<()> {
        self.line("namespace", display_name(&ns.name))?;
        self.ctx.indent();
        for child in &ns.children {
            self.declaration(child)?;
        }
        self.ctx.unindent();
        Ok(())
    }

    fn record(&mut self, keyword: &str, record: &Record) -> io::Result<()> {
        if record.truncated {
            self.line(&format!("inner {keyword}"), display_name(&record.name))?;
        } else {
            self.line(keyword, display_name(&record.name))?;
        }
        self.ctx.indent();
        self.line("type", &record.type_spelling)?;
        for base in &record.bases {
            self.line("base", format_args!("{} {}", base.access, base.type_spelling))?;
        }
        for member in &record.members {
            self.declaration(member)?;
        }
        self.ctx.unindent();
        Ok(())
    }

    fn enumeration(&mut self, e: &Enum) -> io::Result<()> {
        self.line("enum", display_name(&e.name))?;
        self.ctx.indent();
        self.line("type", &e.type_spelling)?;
        self.line("underlying", &e.underlying_type)?;
        for constant in &e.constants {
            self.line("constant", display_name(&constant.name))?;
            self.ctx.indent();
            self.line("type", &constant.type_spelling)?;
            self.line("value", constant.value)?;
            self.ctx.unindent();
        }
        self.ctx.unindent();
        Ok(())
    }

    fn function(&mut self, f: &Function) -> io::Result<()> {
        self.line("function", display_name(&f.name))?;
        self.ctx.indent();
        self.signature(&f.signature)?;
        self.ctx.unindent();
        Ok(())
    }

    fn method(&mut self, m: &Method) -> io::Result<()> {
        self.line("cxxmethod", display_name(&m.name))?;
        self.ctx.indent();
        self.line("access", m.access)?;
        self.signature(&m.signature)?;
        self.ctx.unindent();
        Ok(())
    }

    fn signature(&mut self, signature: &Signature) -> io::Result<()> {
        self.line("return", &signature.return_type)?;
        self.line("storage", signature.storage)?;
        for param in &signature.params {
            self.parameter(param)?;
        }
        Ok(())
    }

    fn parameter(&mut self, param: &Parameter) -> io::Result<()> {
        self.line("param", display_name(&param.name))?;
        self.ctx.indent();
        self.line("type", &param.type_spelling)?;
        if let Some(default) = &param.default_value {
            self.line("default", default)?;
        }
        self.ctx.unindent();
        Ok(())
    }

    fn variable(&mut self, v: &Variable) -> io::Result<()> {
        self.line("variable", display_name(&v.name))?;
        self.ctx.indent();
        self.line("type", &v.value_type.spelling)?;
        self.line("storage", v.value_type.storage)?;
        self.ctx.unindent();
        Ok(())
    }

    fn field(&mut self, f: &Field) -> io::Result<()> {
        self.line("field", display_name(&f.name))?;
        self.ctx.indent();
        self.line("access", f.access)?;
        self.line("type", &f.value_type.spelling)?;
        self.line("storage", f.value_type.storage)?;
        self.ctx.unindent();
        Ok(())
    }
}

impl<W: Write> Emitter for TextEmitter<W> {
    fn emit(&mut self, unit: &TranslationUnit) -> io::Result<()> {
        self.line("translation unit", &unit.name)?;
        for decl in &unit.declarations {
            self.declaration(decl)?;
        }
        self.out.flush()
    }
}

/// Render `unit` as text into a `String`.
#[must_use]
pub fn render_to_string(unit: &TranslationUnit) -> String {
    let mut emitter = TextEmitter::new(Vec::new());
    // Writing into a Vec<u8> cannot fail.
    let _ = emitter.emit(unit);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(anonymous)" } else { name }
}
