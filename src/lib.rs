#![warn(missing_docs)]

//! # exam-timer
//!
//! A single-screen countdown timer for the terminal, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The user sets hours and minutes, confirms with "Start Exam", and then
//! watches the remaining time count down inside a circular progress ring
//! while a small plane travels around it. The countdown can be paused,
//! resumed, and reset back to the setup form at any time.
//!
//! ## Layout
//!
//! The crate separates the countdown logic from everything that draws it:
//!
//! - [`countdown`]: the pure Setup/Running state machine,
//!   `transition(state, event) -> state`
//! - [`clock`]: `HH:MM:SS` formatting, progress fraction, rotation angle
//! - [`timer`]: a bubbletea component that owns the state machine and the
//!   single tick handle
//! - [`numberinput`], [`setup`]: the "Set Exam Time" form
//! - [`ring`]: the progress ring renderer
//! - [`key`], [`help`]: key bindings and the help bar
//! - [`style`], [`config`]: colours and in-code configuration
//! - [`app`]: the top-level bubbletea model
//!
//! Each component follows the Elm Architecture pattern with `update()` and
//! `view()` methods.
//!
//! ## Quick Start
//!
//! ```rust
//! use exam_timer::countdown::{transition, Event, TimerConfiguration, TimerState};
//! use exam_timer::clock::{calculate_progress, format_time};
//!
//! let state = transition(
//!     TimerState::default(),
//!     Event::Confirm(TimerConfiguration::new(1, 30)),
//! );
//! assert_eq!(format_time(state.remaining_seconds()), "01:30:00");
//! assert_eq!(calculate_progress(state.total_seconds(), state.remaining_seconds()), 0.0);
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod help;
pub mod key;
pub mod numberinput;
pub mod ring;
pub mod setup;
pub mod style;
pub mod timer;

use bubbletea_rs::Cmd;

/// Components that can take and lose keyboard focus.
///
/// `focus()` may return a command for the runtime to execute; `blur()`
/// releases focus; `focused()` reports the current state.
///
/// ```rust
/// use exam_timer::prelude::*;
///
/// let mut minutes = numberinput_new("Minutes", 0, 59);
/// assert!(!minutes.focused());
///
/// minutes.focus();
/// assert!(minutes.focused());
///
/// minutes.blur();
/// assert!(!minutes.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use app::Model as App;
pub use clock::{calculate_progress, format_time, rotation_degrees};
pub use config::Config;
pub use countdown::{transition, Event, Stage, TimerConfiguration, TimerState};
pub use key::{Binding, KeyPress};
pub use numberinput::Model as NumberInput;
pub use ring::Model as Ring;
pub use setup::Model as Setup;
pub use style::{default_styles, Styles};
pub use timer::{
    new as timer_new, new_with_interval as timer_new_with_interval, Model as Timer,
    TickMsg as TimerTickMsg, TimeoutMsg as TimerTimeoutMsg,
};

/// Common imports.
///
/// ```rust
/// use exam_timer::prelude::*;
///
/// let timer = timer_new();
/// assert_eq!(timer.stage(), Stage::Setup);
/// ```
pub mod prelude {
    pub use crate::app::Model as App;
    pub use crate::clock::{calculate_progress, format_time, rotation_degrees};
    pub use crate::countdown::{transition, Event, Stage, TimerConfiguration, TimerState};
    pub use crate::help::{KeyMap as HelpKeyMap, Model as HelpModel};
    pub use crate::key::{Binding, KeyPress};
    pub use crate::numberinput::{new as numberinput_new, Model as NumberInput};
    pub use crate::ring::Model as Ring;
    pub use crate::setup::Model as Setup;
    pub use crate::style::{default_styles, Styles};
    pub use crate::timer::{
        new as timer_new, new_with_interval as timer_new_with_interval, Model as Timer,
        TickMsg as TimerTickMsg, TimeoutMsg as TimerTimeoutMsg,
    };
    pub use crate::Component;
}
