//! Editor configuration.
//!
//! Settings are fixed at startup and built in code; there is no settings
//! file. `Default` gives the stock behaviour and the `with_*` methods adjust
//! individual values.

/// Session behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces inserted by the Tab key
    pub tab_width: usize,

    /// Columns kept before the cursor when computing horizontal pages
    pub left_margin: usize,

    /// Columns reserved at the right edge when computing horizontal pages
    pub right_margin: usize,

    /// Lines moved per mouse wheel notch
    pub wheel_step: usize,

    /// Characters that insert a closing partner, and that partner
    pub auto_pairs: Vec<(char, char)>,
}

impl Config {
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    pub fn with_wheel_step(mut self, wheel_step: usize) -> Self {
        self.wheel_step = wheel_step;
        self
    }

    /// Returns the closing character paired with `open`, if any.
    pub fn closing_pair(&self, open: char) -> Option<char> {
        self.auto_pairs
            .iter()
            .find(|(o, _)| *o == open)
            .map(|(_, close)| *close)
    }

    /// The text inserted by one Tab key press.
    pub fn indent(&self) -> String {
        " ".repeat(self.tab_width)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            left_margin: 5,
            right_margin: 2,
            wheel_step: 4,
            auto_pairs: vec![('(', ')'), ('[', ']'), ('{', '}'), ('"', '"')],
        }
    }
}
