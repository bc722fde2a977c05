//! Whole-file assembly of an Elm module.
//!
//! A rendered module is laid out as: the generated-file banner, the
//! `module ... exposing (...)` line, the imports, then the declarations
//! separated by two blank lines.

use elmgen_codegen::{CodeBuilder, CodeFragment};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{ElmConfig, ast::Decl};

/// A structured representation of an Elm source file.
///
/// # Example
///
/// ```
/// use elmgen_elm::{ElmModule, TypeDecl};
///
/// let source = ElmModule::new("Api.Enum.Color")
///     .expose("Color(..)")
///     .import("Json.Decode as Decode")
///     .add(TypeDecl::new("Color").constructors(["Red", "Green"]))
///     .render();
///
/// assert!(source.starts_with("{-\n"));
/// assert!(source.contains("module Api.Enum.Color exposing (Color(..))\n"));
/// assert!(source.ends_with("    = Red\n    | Green\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElmModule {
    name: String,
    #[serde(default)]
    exposing: Vec<String>,
    #[serde(default)]
    imports: Vec<String>,
    decls: Vec<Decl>,
}

impl ElmModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a name to the `exposing` list.
    pub fn expose(mut self, name: impl Into<String>) -> Self {
        self.exposing.push(name.into());
        self
    }

    pub fn exposing(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exposing.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an import; `path` is everything after the `import` keyword.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    pub fn imports(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, decl: impl Into<Decl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    pub fn add_all(mut self, decls: impl IntoIterator<Item = Decl>) -> Self {
        self.decls.extend(decls);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Render with the default configuration.
    pub fn render(&self) -> String {
        self.render_with(&ElmConfig::default())
    }

    pub fn render_with(&self, config: &ElmConfig) -> String {
        assemble(
            config,
            &self.name,
            &self.exposing,
            &self.imports,
            &self.decls,
        )
    }
}

/// Render a complete module with the default configuration.
pub fn render_module<E, I>(name: &str, exposing: &[E], imports: &[I], decls: &[Decl]) -> String
where
    E: AsRef<str>,
    I: AsRef<str>,
{
    assemble(&ElmConfig::default(), name, exposing, imports, decls)
}

fn assemble<E, I>(
    config: &ElmConfig,
    name: &str,
    exposing: &[E],
    imports: &[I],
    decls: &[Decl],
) -> String
where
    E: AsRef<str>,
    I: AsRef<str>,
{
    debug!(
        module = name,
        exposing = exposing.len(),
        imports = imports.len(),
        decls = decls.len(),
        "Rendering Elm module."
    );

    let renderer = config.renderer();
    let mut builder = CodeBuilder::new(config.indent);

    builder.apply_fragment(CodeFragment::block(
        "{-",
        vec![CodeFragment::line(format!(
            "This file was automatically generated by {}.",
            config.generator
        ))],
        Some("-}".to_string()),
    ));

    let exposing = exposing
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<&str>>()
        .join(", ");
    builder.push_line(&format!("module {} exposing ({})", name, exposing));

    builder.push_blank();
    for import in imports {
        builder.push_line(&format!("import {}", import.as_ref()));
    }
    builder.push_blank();

    for (i, decl) in decls.iter().enumerate() {
        if i > 0 {
            builder.push_blank().push_blank();
        }
        trace!(module = name, decl = decl.name(), "Rendering declaration.");
        for fragment in renderer.decl_fragments(decl) {
            builder.apply_fragment(fragment);
        }
    }

    builder.build()
}
