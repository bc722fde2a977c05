//! Elm type expressions and record fields.

use serde::{Deserialize, Serialize};

/// An Elm type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeExpr {
    /// A named type or a type variable (`Int`, `a`).
    Name { name: String },
    /// A type constructor applied to arguments (`List String`).
    App { name: String, args: Vec<TypeExpr> },
    /// A structural record, optionally extending the row variable `type_param`.
    Record {
        fields: Vec<FieldDecl>,
        #[serde(skip_serializing_if = "Option::is_none")]
        type_param: Option<String>,
    },
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into() }
    }

    pub fn app(name: impl Into<String>, args: impl IntoIterator<Item = TypeExpr>) -> Self {
        Self::App {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn record(fields: impl IntoIterator<Item = FieldDecl>) -> Self {
        Self::Record {
            fields: fields.into_iter().collect(),
            type_param: None,
        }
    }

    /// An extensible record `{ param | field : T, ... }`.
    pub fn extensible_record(
        type_param: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDecl>,
    ) -> Self {
        Self::Record {
            fields: fields.into_iter().collect(),
            type_param: Some(type_param.into()),
        }
    }
}

impl From<&str> for TypeExpr {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

/// A `name : type` entry of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
