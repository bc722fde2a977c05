//! Rebuilding AST trees from JSON.
//!
//! Lets a generator that is not written in Rust hand its tree over as
//! data. The accepted shape is exactly what the AST's serde impls
//! produce:
//!
//! ```json
//! { "kind": "alias", "name": "Id", "type": { "kind": "name", "name": "String" } }
//! ```
//!
//! Nodes are tagged with `kind`. An unrecognised or missing tag is an
//! [`Error::UnknownTypeVariant`] or [`Error::UnknownDeclVariant`] carrying
//! the offending node; any other malformed payload is an [`Error::Json`].

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    ElmModule, Error, Result,
    ast::{Decl, TypeExpr},
};

/// Parse a module tree from JSON text.
pub fn module_from_json(json: &str) -> Result<ElmModule> {
    let value: Value = serde_json::from_str(json).map_err(Error::json)?;
    module_from_value(&value)
}

pub fn module_from_value(value: &Value) -> Result<ElmModule> {
    items(value, "decls").try_for_each(check_decl)?;
    let module = ElmModule::deserialize(value).map_err(Error::json)?;

    debug!(
        module = module.name(),
        decls = module.decls().len(),
        "Decoded Elm module tree."
    );
    Ok(module)
}

pub fn decl_from_value(value: &Value) -> Result<Decl> {
    check_decl(value)?;
    Decl::deserialize(value).map_err(Error::json)
}

pub fn type_expr_from_value(value: &Value) -> Result<TypeExpr> {
    check_type(value)?;
    TypeExpr::deserialize(value).map_err(Error::json)
}

// serde reports an unknown tag without the node it came from, so the tags
// are checked up front. Missing or mistyped children are left to serde.

fn check_decl(value: &Value) -> Result<()> {
    match kind(value) {
        Some("type") => Ok(()),
        Some("alias") => check_type_at(value, "type"),
        Some("function") => {
            items(value, "parameters").try_for_each(|param| check_type_at(param, "type"))?;
            check_type_at(value, "return_type")
        }
        _ => Err(Error::unknown_decl_variant(value)),
    }
}

fn check_type(value: &Value) -> Result<()> {
    match kind(value) {
        Some("name") => Ok(()),
        Some("app") => items(value, "args").try_for_each(check_type),
        Some("record") => items(value, "fields").try_for_each(|field| check_type_at(field, "type")),
        _ => Err(Error::unknown_type_variant(value)),
    }
}

fn check_type_at(value: &Value, field: &str) -> Result<()> {
    value.get(field).map_or(Ok(()), check_type)
}

fn kind(value: &Value) -> Option<&str> {
    value.get("kind").and_then(Value::as_str)
}

fn items<'a>(value: &'a Value, field: &str) -> impl Iterator<Item = &'a Value> {
    value.get(field).and_then(Value::as_array).into_iter().flatten()
}
