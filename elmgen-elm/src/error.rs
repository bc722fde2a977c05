use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for elmgen-elm operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown type expression variant: {shape}")]
    #[diagnostic(
        code(elmgen::unknown_type_variant),
        help("a type expression must have a `kind` of \"name\", \"app\" or \"record\"")
    )]
    UnknownTypeVariant { shape: String },

    #[error("unknown declaration variant: {shape}")]
    #[diagnostic(
        code(elmgen::unknown_decl_variant),
        help("a declaration must have a `kind` of \"type\", \"alias\" or \"function\"")
    )]
    UnknownDeclVariant { shape: String },

    #[error("failed to decode Elm tree")]
    #[diagnostic(code(elmgen::json_error))]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse render configuration")]
    #[diagnostic(code(elmgen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub fn unknown_type_variant(value: &serde_json::Value) -> Box<Self> {
        Box::new(Error::UnknownTypeVariant {
            shape: value.to_string(),
        })
    }

    pub fn unknown_decl_variant(value: &serde_json::Value) -> Box<Self> {
        Box::new(Error::UnknownDeclVariant {
            shape: value.to_string(),
        })
    }

    pub fn json(source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Json { source })
    }

    /// Create a config error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
