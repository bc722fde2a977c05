//! Code emission building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Declarative lines, blocks and indented groups
//! - [`Indent`] - Width of one indentation level

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::CodeFragment;
pub use indent::Indent;
