//! Elm AST model and source renderer for elmgen.
//!
//! This crate holds a small Elm syntax tree (custom types, type aliases,
//! annotated functions, type expressions and records) and renders it to
//! Elm source text. It is the emission layer of a larger generator, for
//! example one that turns a GraphQL schema into Elm bindings; schema
//! handling and file output live with the caller.
//!
//! ```
//! use elmgen_elm::{ElmModule, FieldDecl, TypeAliasDecl, TypeExpr};
//!
//! let user = TypeExpr::record([
//!     FieldDecl::new("id", "Int"),
//!     FieldDecl::new("name", "String"),
//! ]);
//! let source = ElmModule::new("Api.Object.User")
//!     .expose("User")
//!     .add(TypeAliasDecl::new("User", user))
//!     .render();
//!
//! assert!(source.ends_with("type alias User \n    = { id : Int\n, name : String\n}\n"));
//! ```
//!
//! Rendering a tree is infallible. Trees that arrive as JSON go through
//! [`decode`], which reports malformed nodes as [`Error`]s.

mod config;
mod elm_module;
mod error;
mod renderer;

pub mod ast;
pub mod decode;

pub use ast::{
    Decl, Expr, FieldDecl, FunctionDecl, ParameterDecl, RawExpr, TypeAliasDecl, TypeDecl, TypeExpr,
};
pub use config::{DEFAULT_GENERATOR, ElmConfig};
pub use elmgen_codegen::Indent;
pub use elm_module::{ElmModule, render_module};
pub use error::{Error, Result};
pub use renderer::{ElmRenderer, render_decl, render_type};
