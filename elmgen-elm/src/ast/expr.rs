//! Value expressions.

use std::fmt;

/// A value expression that knows its own Elm source text.
///
/// Only pre-rendered text is modelled today. A structured expression tree
/// can implement this trait without changes to the declaration renderer.
pub trait Expr: fmt::Debug + Send + Sync {
    /// The Elm source text of this expression.
    fn render(&self) -> String;
}

/// An expression carried as already-rendered Elm text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpr(String);

impl RawExpr {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Expr for RawExpr {
    fn render(&self) -> String {
        self.0.clone()
    }
}

impl From<&str> for RawExpr {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RawExpr {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_expr_renders_verbatim() {
        let expr = RawExpr::new("List.map .name users");
        assert_eq!(expr.render(), "List.map .name users");

        let case = RawExpr::new("case x of\n        _ ->\n            x");
        assert_eq!(case.render(), "case x of\n        _ ->\n            x");
    }

    #[test]
    fn test_raw_expr_conversions() {
        assert_eq!(RawExpr::from("x"), RawExpr::new("x"));
        assert_eq!(RawExpr::from(String::from("x")), RawExpr::new("x"));
    }
}
