//! Terminal colors for syntax classes.
//!
//! Colors are applied as foreground only; the background stays the
//! terminal's own.

use crossterm::style::Color;
use teditor_syntax::TokenClass;

/// Foreground colors per token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub function: Color,
    pub text: Color,
}

impl Theme {
    /// The default palette.
    pub const fn classic() -> Self {
        Self {
            keyword: Color::Cyan,
            // Light pink
            string: Color::Rgb {
                r: 202,
                g: 143,
                b: 118,
            },
            comment: Color::Green,
            function: Color::Yellow,
            text: Color::White,
        }
    }

    /// Everything in the plain text color.
    pub const fn monochrome() -> Self {
        Self {
            keyword: Color::White,
            string: Color::White,
            comment: Color::White,
            function: Color::White,
            text: Color::White,
        }
    }

    /// Returns the foreground color for a token class.
    pub fn color(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Keyword => self.keyword,
            TokenClass::String => self.string,
            TokenClass::Comment => self.comment,
            TokenClass::Function => self.function,
            TokenClass::Default => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
