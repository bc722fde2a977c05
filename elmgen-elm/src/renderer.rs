//! Elm source rendering for type expressions and declarations.
//!
//! Type expressions render inline; a record spans several lines and its
//! continuation lines are indented by `level`. Declarations render to
//! [`CodeFragment`]s so module assembly can drive a single [`CodeBuilder`].

use elmgen_codegen::{CodeBuilder, CodeFragment, Indent};

use crate::ast::{Decl, FieldDecl, FunctionDecl, TypeAliasDecl, TypeDecl, TypeExpr};

/// Elm source renderer.
///
/// Stateless apart from the indentation unit, so one value can be shared
/// across threads and reused for any number of trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElmRenderer {
    indent: Indent,
}

impl ElmRenderer {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Render a type expression.
    ///
    /// `is_field` marks the type of a record field, where a type
    /// application needs no parentheses.
    pub fn render_type(&self, ty: &TypeExpr, level: usize, is_field: bool) -> String {
        match ty {
            TypeExpr::Name { name } => name.clone(),
            TypeExpr::App { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.render_type(arg, level, false))
                    .collect::<Vec<_>>()
                    .join(" ");
                if is_field {
                    format!("{} {}", name, args)
                } else {
                    format!("({} {})", name, args)
                }
            }
            TypeExpr::Record { fields, type_param } => {
                let indent = self.indent.repeat(level);
                let pipe = match type_param {
                    Some(param) => format!("{} | ", param),
                    None => String::new(),
                };
                let fields = fields
                    .iter()
                    .map(|field| self.render_field(field, level + 1))
                    .collect::<Vec<_>>()
                    .join(&format!("{}, ", indent));
                format!("{indent}{{ {pipe}{fields}{indent}}}")
            }
        }
    }

    /// Render a record field as a newline-terminated `name : type` line.
    pub fn render_field(&self, field: &FieldDecl, level: usize) -> String {
        format!(
            "{} : {}\n",
            field.name,
            self.render_type(&field.ty, level, true)
        )
    }

    /// Render a declaration as a newline-terminated block.
    pub fn render_decl(&self, decl: &Decl) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        for fragment in self.decl_fragments(decl) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    /// Convert a declaration to code fragments.
    pub fn decl_fragments(&self, decl: &Decl) -> Vec<CodeFragment> {
        match decl {
            Decl::Type(decl) => self.type_decl_fragments(decl),
            Decl::Alias(decl) => self.alias_fragments(decl),
            Decl::Function(decl) => self.function_fragments(decl),
        }
    }

    fn type_decl_fragments(&self, decl: &TypeDecl) -> Vec<CodeFragment> {
        let mut variants: Vec<CodeFragment> = decl
            .constructors
            .iter()
            .enumerate()
            .map(|(i, ctor)| {
                let sep = if i == 0 { "=" } else { "|" };
                CodeFragment::line(format!("{} {}", sep, ctor))
            })
            .collect();
        if variants.is_empty() {
            variants.push(CodeFragment::line("= "));
        }

        vec![
            CodeFragment::line(format!("type {}", decl.name)),
            CodeFragment::indent(variants),
        ]
    }

    fn alias_fragments(&self, decl: &TypeAliasDecl) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!(
                "type alias {} {}",
                decl.name,
                decl.type_params.join(" ")
            )),
            CodeFragment::indent(vec![CodeFragment::line(format!(
                "= {}",
                self.render_type(&decl.ty, 0, false)
            ))]),
        ]
    }

    fn function_fragments(&self, decl: &FunctionDecl) -> Vec<CodeFragment> {
        let return_type = self.render_type(&decl.return_type, 0, false);
        let (signature, definition) = if decl.parameters.is_empty() {
            (
                format!("{} : {}", decl.name, return_type),
                format!("{} =", decl.name),
            )
        } else {
            let param_types = decl
                .parameters
                .iter()
                .map(|p| self.render_type(&p.ty, 1, false))
                .collect::<Vec<_>>()
                .join(" -> ");
            let param_names = decl
                .parameters
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            (
                format!("{} : {} -> {}", decl.name, param_types, return_type),
                format!("{} {} =", decl.name, param_names),
            )
        };

        vec![
            CodeFragment::line(signature),
            CodeFragment::line(definition),
            CodeFragment::indent(vec![CodeFragment::line(decl.body.render())]),
        ]
    }
}

/// Render a type expression with the default 4-space indentation.
pub fn render_type(ty: &TypeExpr, level: usize, is_field: bool) -> String {
    ElmRenderer::default().render_type(ty, level, is_field)
}

/// Render a declaration with the default 4-space indentation.
pub fn render_decl(decl: &Decl) -> String {
    ElmRenderer::default().render_decl(decl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParameterDecl, RawExpr};

    fn list_of(name: &str) -> TypeExpr {
        TypeExpr::app("List", [TypeExpr::name(name)])
    }

    #[test]
    fn test_name_as_field() {
        assert_eq!(render_type(&TypeExpr::name("Int"), 0, true), "Int");
    }

    #[test]
    fn test_app_is_parenthesized() {
        assert_eq!(render_type(&list_of("String"), 0, false), "(List String)");
    }

    #[test]
    fn test_app_as_field_is_bare() {
        assert_eq!(render_type(&list_of("String"), 0, true), "List String");
    }

    #[test]
    fn test_nested_app_args_are_parenthesized() {
        let ty = TypeExpr::app("Maybe", [list_of("Int")]);
        assert_eq!(render_type(&ty, 0, true), "Maybe (List Int)");
        assert_eq!(render_type(&ty, 3, false), "(Maybe (List Int))");
    }

    #[test]
    fn test_app_without_args_keeps_trailing_space() {
        let ty = TypeExpr::App {
            name: "Cmd".to_string(),
            args: vec![],
        };
        assert_eq!(render_type(&ty, 0, false), "(Cmd )");
        assert_eq!(render_type(&ty, 0, true), "Cmd ");
    }

    #[test]
    fn test_record() {
        let ty = TypeExpr::record([
            FieldDecl::new("id", "Int"),
            FieldDecl::new("name", "String"),
        ]);
        assert_eq!(render_type(&ty, 0, false), "{ id : Int\n, name : String\n}");
    }

    #[test]
    fn test_extensible_record() {
        let ty = TypeExpr::extensible_record("a", [FieldDecl::new("id", "Int")]);
        let text = render_type(&ty, 0, false);
        assert!(text.starts_with("{ a | "));
        assert_eq!(text, "{ a | id : Int\n}");
    }

    #[test]
    fn test_closed_record_has_no_pipe() {
        let ty = TypeExpr::record([FieldDecl::new("id", "Int")]);
        assert!(!render_type(&ty, 0, false).contains('|'));
    }

    #[test]
    fn test_record_at_level_is_indented() {
        let ty = TypeExpr::record([
            FieldDecl::new("id", "Int"),
            FieldDecl::new("tags", list_of("String")),
        ]);
        assert_eq!(
            render_type(&ty, 1, false),
            "    { id : Int\n    , tags : List String\n    }"
        );
    }

    #[test]
    fn test_nested_record_field() {
        let ty = TypeExpr::record([FieldDecl::new(
            "owner",
            TypeExpr::record([FieldDecl::new("login", "String")]),
        )]);
        assert_eq!(
            render_type(&ty, 0, false),
            "{ owner :     { login : String\n    }\n}"
        );
    }

    #[test]
    fn test_empty_record() {
        let ty = TypeExpr::Record {
            fields: vec![],
            type_param: None,
        };
        let text = render_type(&ty, 0, false);
        assert_eq!(text, "{ }");
    }

    #[test]
    fn test_field() {
        let renderer = ElmRenderer::default();
        assert_eq!(
            renderer.render_field(&FieldDecl::new("score", "Float"), 1),
            "score : Float\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let renderer = ElmRenderer::new(Indent::spaces(2).unwrap());
        let ty = TypeExpr::record([FieldDecl::new("id", "Int")]);
        assert_eq!(renderer.render_type(&ty, 1, false), "  { id : Int\n  }");
    }

    #[test]
    fn test_type_decl() {
        let decl = TypeDecl::new("Color").constructors(["Red", "Green", "Blue"]);
        assert_eq!(
            render_decl(&decl.into()),
            "type Color\n    = Red\n    | Green\n    | Blue\n"
        );
    }

    #[test]
    fn test_type_decl_without_constructors() {
        let decl = TypeDecl::new("Never");
        assert_eq!(render_decl(&decl.into()), "type Never\n    = \n");
    }

    #[test]
    fn test_alias() {
        let page = TypeExpr::record([FieldDecl::new("items", list_of("a"))]);
        let decl = TypeAliasDecl::new("Page", page).type_param("a");
        assert_eq!(
            render_decl(&decl.into()),
            "type alias Page a\n    = { items : List a\n}\n"
        );
    }

    #[test]
    fn test_alias_without_params_keeps_space() {
        let decl = TypeAliasDecl::new("Ids", list_of("Int"));
        assert_eq!(
            render_decl(&decl.into()),
            "type alias Ids \n    = (List Int)\n"
        );
    }

    #[test]
    fn test_function() {
        let decl = FunctionDecl::new("id", "a", RawExpr::new("x"))
            .param(ParameterDecl::new("x", "a"));
        assert_eq!(render_decl(&decl.into()), "id : a -> a\nid x =\n    x\n");
    }

    #[test]
    fn test_function_without_params() {
        let decl = FunctionDecl::new("answer", "Int", RawExpr::new("42"));
        assert_eq!(render_decl(&decl.into()), "answer : Int\nanswer =\n    42\n");
    }

    #[test]
    fn test_function_param_types() {
        let dict = TypeExpr::app("Dict", [TypeExpr::name("comparable"), TypeExpr::name("v")]);
        let decl = FunctionDecl::new(
            "get",
            TypeExpr::app("Maybe", [TypeExpr::name("v")]),
            RawExpr::new("Dict.get k d"),
        )
        .param(ParameterDecl::new("k", "comparable"))
        .param(ParameterDecl::new("d", dict));
        assert_eq!(
            render_decl(&decl.into()),
            "get : comparable -> (Dict comparable v) -> (Maybe v)\nget k d =\n    Dict.get k d\n"
        );
    }

    #[test]
    fn test_function_record_param_renders_at_level_one() {
        let decl = FunctionDecl::new("name", "String", RawExpr::new("user.name"))
            .param(ParameterDecl::new(
                "user",
                TypeExpr::record([FieldDecl::new("name", "String")]),
            ));
        assert_eq!(
            render_decl(&decl.into()),
            "name :     { name : String\n    } -> String\nname user =\n    user.name\n"
        );
    }

    #[test]
    fn test_custom_indent_reaches_every_declaration_part() {
        let renderer = ElmRenderer::new(Indent::spaces(2).unwrap());
        let decl: Decl = FunctionDecl::new("name", "String", RawExpr::new("user.name"))
            .param(ParameterDecl::new(
                "user",
                TypeExpr::record([FieldDecl::new("name", "String")]),
            ))
            .into();
        assert_eq!(
            renderer.render_decl(&decl),
            "name :   { name : String\n  } -> String\nname user =\n  user.name\n"
        );

        let colors: Decl = TypeDecl::new("Color").constructors(["Red", "Green"]).into();
        assert_eq!(
            renderer.render_decl(&colors),
            "type Color\n  = Red\n  | Green\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let decl: Decl = TypeAliasDecl::new(
            "User",
            TypeExpr::record([FieldDecl::new("id", "Int")]),
        )
        .into();
        assert_eq!(render_decl(&decl), render_decl(&decl.clone()));
    }
}
