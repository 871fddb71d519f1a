//! Key bindings.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Bindings can be disabled, in which case they
//! neither match nor show up in help.
//!
//! ```rust
//! use exam_timer::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::new(vec![
//!     KeyCode::Char('q').into(),
//!     (KeyCode::Char('c'), KeyModifiers::CONTROL).into(),
//! ])
//! .with_help("q", "quit");
//!
//! assert_eq!(quit.help().key, "q");
//! assert!(quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// One key, optionally with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. `NONE` matches the bare key (Shift is tolerated).
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        if self.modifiers.is_empty() {
            !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            modifiers.contains(self.modifiers)
        }
    }
}

/// Help text for a binding, e.g. `("space", "start")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s).
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding with no help text.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the help description, keeping the key label.
    pub fn set_help_desc(&mut self, desc: impl Into<String>) {
        self.help.desc = desc.into();
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.matches(msg.key, msg.modifiers))
    }
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}
