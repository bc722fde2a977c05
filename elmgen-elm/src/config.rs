//! Render configuration.
//!
//! ```toml
//! generator = "elm-graphql"
//! indent = 4
//! ```

use std::str::FromStr;

use elmgen_codegen::Indent;
use serde::{Deserialize, Deserializer, de};

use crate::{ElmRenderer, Error, Result};

/// Generator name written into the banner of every rendered module.
pub const DEFAULT_GENERATOR: &str = "elm-graphql";

/// Settings shared by every module rendered in one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElmConfig {
    /// Tool name shown in the "automatically generated" banner.
    pub generator: String,
    /// Spaces per indentation level, 1 to 8.
    #[serde(deserialize_with = "deserialize_indent")]
    pub indent: Indent,
}

impl Default for ElmConfig {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            indent: Indent::ELM,
        }
    }
}

impl FromStr for ElmConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "elmgen.toml")
    }
}

impl ElmConfig {
    /// Parse a config from a string with a custom filename for error reporting.
    ///
    /// An out-of-range `indent` is reported like any other parse error, with
    /// the span of the offending value.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// A renderer using this configuration's indentation.
    pub fn renderer(&self) -> ElmRenderer {
        ElmRenderer::new(self.indent)
    }
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<Indent, D::Error>
where
    D: Deserializer<'de>,
{
    let width = u8::deserialize(deserializer)?;
    Indent::spaces(width).ok_or_else(|| {
        de::Error::custom(format!(
            "indent must be between 1 and {} spaces, got {}",
            Indent::MAX_WIDTH,
            width
        ))
    })
}
