//! Key bindings for the exam timer app.

use crate::countdown::Stage;
use crate::help;
use crate::key::Binding;
use crossterm::event::{KeyCode, KeyModifiers};

/// Every action the app responds to.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Focus the other setup field.
    pub next_field: Binding,
    /// Focus the other setup field, backwards.
    pub prev_field: Binding,
    /// Confirm the setup form ("Start Exam").
    pub confirm: Binding,
    /// Start or pause the countdown.
    pub toggle: Binding,
    /// Return to setup.
    pub reset: Binding,
    /// Leave the program.
    pub quit: Binding,
}

/// The default bindings, set up for the Setup stage.
pub fn default_key_map() -> KeyMap {
    let mut km = KeyMap {
        next_field: Binding::new(vec![KeyCode::Tab.into(), KeyCode::Right.into()])
            .with_help("tab", "next field"),
        prev_field: Binding::new(vec![
            KeyCode::BackTab.into(),
            (KeyCode::Tab, KeyModifiers::SHIFT).into(),
            KeyCode::Left.into(),
        ])
        .with_help("shift+tab", "prev field"),
        confirm: Binding::new(vec![KeyCode::Enter.into()]).with_help("enter", "start exam"),
        toggle: Binding::new(vec![KeyCode::Char(' ').into(), KeyCode::Char('s').into()])
            .with_help("space", "start"),
        reset: Binding::new(vec![KeyCode::Char('r').into()]).with_help("r", "reset"),
        quit: Binding::new(vec![
            KeyCode::Char('q').into(),
            KeyCode::Esc.into(),
            (KeyCode::Char('c'), KeyModifiers::CONTROL).into(),
        ])
        .with_help("q", "quit"),
    };
    km.sync(Stage::Setup, false, false);
    km
}

impl KeyMap {
    /// Enables the bindings that make sense for the current countdown state
    /// and relabels the toggle.
    pub fn sync(&mut self, stage: Stage, running: bool, finished: bool) {
        let in_setup = stage == Stage::Setup;
        self.next_field.set_enabled(in_setup);
        self.prev_field.set_enabled(in_setup);
        self.confirm.set_enabled(in_setup);
        self.toggle.set_enabled(!in_setup && !finished);
        self.reset.set_enabled(!in_setup);
        self.toggle
            .set_help_desc(if running { "pause" } else { "start" });
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_field,
            &self.confirm,
            &self.toggle,
            &self.reset,
            &self.quit,
        ]
    }
}
