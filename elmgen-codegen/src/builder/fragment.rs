//! Declarative pieces of generated code.
//!
//! A backend describes a declaration as a tree of fragments and lets
//! [`CodeBuilder`](super::CodeBuilder) lay it out, so nesting is expressed
//! by structure instead of manual indent bookkeeping.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line, written at the current indentation.
    Line(String),
    /// A header line, its body one level deeper, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments written one level deeper.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}
