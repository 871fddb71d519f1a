//! Core model for the exam timer app.

use super::keymap::{default_key_map, KeyMap};
use crate::config::Config;
use crate::countdown::Stage;
use crate::help::Model as Help;
use crate::ring::{self, Model as Ring};
use crate::setup::{self, Field, Model as Setup};
use crate::style::Styles;
use crate::timer::{self, Model as Timer, TimeoutMsg};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

/// The whole exam timer screen.
///
/// Routes key presses to the setup form or the countdown depending on the
/// stage, forwards tick messages to the countdown, and keeps the help bar's
/// bindings in step with what can currently be done.
pub struct Model {
    pub(super) setup: Setup,
    pub(super) timer: Timer,
    pub(super) ring: Ring,
    pub(super) help: Help,
    pub(super) key_map: KeyMap,
    pub(super) styles: Styles,
    /// Terminal width from the last `WindowSizeMsg`; 0 until one arrives.
    pub(super) width: usize,
}

/// Creates the app with the default configuration.
pub fn new() -> Model {
    new_with_config(Config::default())
}

/// Creates the app from a [`Config`].
pub fn new_with_config(config: Config) -> Model {
    let mut setup = setup::new();
    setup.set_styles(config.styles.clone());

    let mut ring = ring::new(config.ring_radius);
    ring.styles = config.styles.clone();

    Model {
        setup,
        timer: timer::new_with_interval(config.interval),
        ring,
        help: Help::new().with_styles(config.styles.clone()),
        key_map: default_key_map(),
        styles: config.styles,
        width: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.timer.stage()
    }

    /// The countdown component.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The setup form.
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// Mutable access to the setup form, e.g. to prefill a duration.
    pub fn setup_mut(&mut self) -> &mut Setup {
        &mut self.setup
    }

    /// The active key bindings.
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Confirms the setup form and switches to the countdown.
    pub fn confirm(&mut self) -> Option<Cmd> {
        let cmd = self.timer.confirm(self.setup.configuration());
        self.sync_keys();
        cmd
    }

    /// Starts or pauses the countdown.
    pub fn toggle(&mut self) -> Option<Cmd> {
        let cmd = self.timer.toggle();
        self.sync_keys();
        cmd
    }

    /// Drops the countdown and returns to the setup form, which still shows
    /// the last entered duration.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.setup.set_field(Field::Hours);
        self.sync_keys();
    }

    fn sync_keys(&mut self) {
        self.key_map
            .sync(self.timer.stage(), self.timer.running(), self.timer.timedout());
    }

    /// Handles one message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.help.width = self.width;
            return None;
        }

        if let Some(timeout) = msg.downcast_ref::<TimeoutMsg>() {
            if timeout.id == self.timer.id() {
                tracing::info!(id = timeout.id, "time is up");
            }
            self.sync_keys();
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>().map(|k| KeyMsg {
            key: k.key,
            modifiers: k.modifiers,
        });
        let Some(key) = key else {
            let cmd = self.timer.update(msg);
            self.sync_keys();
            return cmd;
        };

        if self.key_map.quit.matches(&key) {
            return Some(quit());
        }

        match self.timer.stage() {
            Stage::Setup => {
                if self.key_map.confirm.matches(&key) {
                    self.confirm()
                } else if self.key_map.next_field.matches(&key)
                    || self.key_map.prev_field.matches(&key)
                {
                    self.setup.focus_next();
                    None
                } else {
                    self.setup.update(msg)
                }
            }
            Stage::Running => {
                if self.key_map.toggle.matches(&key) {
                    self.toggle()
                } else if self.key_map.reset.matches(&key) {
                    self.reset();
                    None
                } else {
                    None
                }
            }
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
