//! Indentation unit for generated code.

const SPACES: &str = "        ";

/// Width of one indentation level, in spaces.
///
/// Only widths from 1 to [`Indent::MAX_WIDTH`] can be constructed, so every
/// `Indent` renders exactly the width it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 4-space indentation, the layout elm-format produces.
    pub const ELM: Self = Self(4);

    pub const MAX_WIDTH: u8 = SPACES.len() as u8;

    /// An indent of `width` spaces, or `None` outside `1..=MAX_WIDTH`.
    pub fn spaces(width: u8) -> Option<Self> {
        (1..=Self::MAX_WIDTH).contains(&width).then_some(Self(width))
    }

    pub fn width(&self) -> u8 {
        self.0
    }

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..usize::from(self.0)]
    }

    /// The indentation string for `level` nested levels.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::ELM
    }
}
