//! Top-level Elm declarations.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Expr, RawExpr, TypeExpr};

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Decl {
    Type(TypeDecl),
    Alias(TypeAliasDecl),
    Function(FunctionDecl),
}

impl Decl {
    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Decl::Type(decl) => &decl.name,
            Decl::Alias(decl) => &decl.name,
            Decl::Function(decl) => &decl.name,
        }
    }
}

impl From<TypeDecl> for Decl {
    fn from(decl: TypeDecl) -> Self {
        Decl::Type(decl)
    }
}

impl From<TypeAliasDecl> for Decl {
    fn from(decl: TypeAliasDecl) -> Self {
        Decl::Alias(decl)
    }
}

impl From<FunctionDecl> for Decl {
    fn from(decl: FunctionDecl) -> Self {
        Decl::Function(decl)
    }
}

/// A custom type (`type Color = Red | Green`).
///
/// Constructors are bare names; constructor arguments are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub constructors: Vec<String>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
        }
    }

    pub fn constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructors.push(constructor.into());
        self
    }

    pub fn constructors(
        mut self,
        constructors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.constructors
            .extend(constructors.into_iter().map(Into::into));
        self
    }
}

/// A type alias, optionally generic (`type alias Page a = { items : List a }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default)]
    pub type_params: Vec<String>,
}

impl TypeAliasDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            type_params: Vec::new(),
        }
    }

    pub fn type_param(mut self, param: impl Into<String>) -> Self {
        self.type_params.push(param.into());
        self
    }
}

/// A parameter of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl ParameterDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A function with a type annotation and a single-expression body.
///
/// The body travels through serde as its rendered text and comes back as
/// a [`RawExpr`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub parameters: Vec<ParameterDecl>,
    pub return_type: TypeExpr,
    #[serde(serialize_with = "serialize_body", deserialize_with = "deserialize_body")]
    pub body: Arc<dyn Expr>,
}

impl FunctionDecl {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<TypeExpr>,
        body: impl Expr + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: return_type.into(),
            body: Arc::new(body),
        }
    }

    pub fn param(mut self, param: ParameterDecl) -> Self {
        self.parameters.push(param);
        self
    }
}

// Bodies have no structure beyond their text, so two functions are equal
// when their bodies render identically.
impl PartialEq for FunctionDecl {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameters == other.parameters
            && self.return_type == other.return_type
            && self.body.render() == other.body.render()
    }
}

fn serialize_body<S: Serializer>(body: &Arc<dyn Expr>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&body.render())
}

fn deserialize_body<'de, D>(deserializer: D) -> Result<Arc<dyn Expr>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(Arc::new(RawExpr::new(text)))
}
