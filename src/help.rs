//! One-line key help.
//!
//! The help bar renders the enabled bindings of a [`KeyMap`] as
//! `key desc • key desc`, truncating with an ellipsis when a width is set and
//! the entries do not fit.
//!
//! ```rust
//! use exam_timer::help::{KeyMap, Model};
//! use exam_timer::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//! }
//!
//! let keys = Keys {
//!     quit: Binding::new(vec![KeyCode::Char('q').into()]).with_help("q", "quit"),
//! };
//! let view = Model::new().view(&keys);
//! assert!(view.contains("quit"));
//! ```

use crate::key::Binding;
use crate::style::Styles;
use lipgloss_extras::lipgloss;

/// Supplies the bindings shown in the help bar.
pub trait KeyMap {
    /// Bindings for the single-line help, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Help bar state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum visible width; 0 means unlimited.
    pub width: usize,
    /// Text placed between entries.
    pub separator: String,
    /// Text shown when entries are cut off.
    pub ellipsis: String,
    /// Styles for keys, descriptions, and separators.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a help bar with the default styles and no width limit.
    pub fn new() -> Self {
        Self {
            width: 0,
            separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Renders the bindings of `keys`.
    pub fn view<K: KeyMap + ?Sized>(&self, keys: &K) -> String {
        self.short_help_view(keys.short_help())
    }

    /// Renders a list of bindings, skipping disabled ones.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self.styles.help_separator.render(&self.separator);
        let mut out = String::new();
        let mut total_width = 0;

        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.help_key.render(&help.key),
                self.styles.help_desc.render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.styles.help_separator.render(&self.ellipsis));
                if total_width + lipgloss::width_visible(&tail) <= self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }
}
