//! Elm AST nodes for type expressions, declarations, and value expressions.
//!
//! Nodes are plain immutable values. They are built once by a generator,
//! handed to [`ElmRenderer`](crate::ElmRenderer) and dropped.

mod decls;
mod expr;
mod types;

pub use decls::{Decl, FunctionDecl, ParameterDecl, TypeAliasDecl, TypeDecl};
pub use expr::{Expr, RawExpr};
pub use types::{FieldDecl, TypeExpr};
