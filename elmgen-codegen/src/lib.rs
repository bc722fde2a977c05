//! Shared code emission utilities for the elmgen generator.
//!
//! This crate provides the language-agnostic primitives used by
//! `elmgen-elm` to turn AST nodes into indented source text.
//!
//! # Module Organization
//!
//! - [`builder`] - Code emission building blocks (CodeBuilder, CodeFragment, Indent)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent};
