//! Countdown component for bubbletea-rs applications.
//!
//! The component wraps a [`TimerState`](crate::countdown::TimerState) and adds
//! the one thing the pure state machine cannot do itself: scheduling ticks.
//!
//! # Tick handle
//!
//! While the countdown is active the component owns exactly one
//! [`TickHandle`]. Every `TickMsg` it schedules carries the timer's id and the
//! handle's tag. Pausing, running out, or resetting drops the handle, and a
//! later start creates a new one with a fresh tag, so a tick that was already
//! in flight when the countdown stopped no longer matches and is ignored.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use exam_timer::countdown::TimerConfiguration;
//! use exam_timer::timer::{new, Model, TimeoutMsg};
//!
//! struct App {
//!     timer: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = new();
//!         timer.confirm(TimerConfiguration::new(0, 10));
//!         let cmd = timer.start();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(timeout) = msg.downcast_ref::<TimeoutMsg>() {
//!             if timeout.id == self.timer.id() {
//!                 // Time's up
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```

use crate::clock::{calculate_progress, format_time, rotation_degrees};
use crate::countdown::{transition, Event, Stage, TimerConfiguration, TimerState};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default spacing between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Message delivered once per interval while the countdown is active.
///
/// Only the timer whose id and live tag match will act on it.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The timer that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Message sent when a tick takes the countdown to zero.
#[derive(Debug, Clone)]
pub struct TimeoutMsg {
    /// The timer that ran out.
    pub id: i64,
}

/// Proof that a tick chain is scheduled.
///
/// Exists only while the countdown is in the Running.Active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    tag: i64,
}

/// Countdown component: state machine plus tick scheduling.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks. Each tick removes one second from the clock.
    pub interval: Duration,
    state: TimerState,
    handle: Option<TickHandle>,
    id: i64,
    next_tag: i64,
}

/// Creates a countdown in the Setup stage with one-second ticks.
pub fn new() -> Model {
    new_with_interval(DEFAULT_INTERVAL)
}

/// Creates a countdown in the Setup stage with a custom tick interval.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        interval,
        state: TimerState::default(),
        handle: None,
        id: next_id(),
        next_tag: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Unique id used to filter tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Snapshot of the underlying state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// Whether the countdown is active.
    pub fn running(&self) -> bool {
        self.state.is_running()
    }

    /// Whether the countdown has reached zero.
    pub fn timedout(&self) -> bool {
        self.state.finished()
    }

    /// Seconds left.
    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds()
    }

    /// Seconds the countdown was confirmed with.
    pub fn total_seconds(&self) -> u64 {
        self.state.total_seconds()
    }

    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        calculate_progress(self.state.total_seconds(), self.state.remaining_seconds())
    }

    /// Plane rotation in degrees for the current progress.
    pub fn rotation(&self) -> f64 {
        rotation_degrees(self.progress())
    }

    /// The live tick handle, present only while running.
    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// Leaves Setup with the given duration. The countdown starts paused.
    pub fn confirm(&mut self, config: TimerConfiguration) -> Option<Cmd> {
        let cmd = self.dispatch(Event::Confirm(config));
        tracing::info!(
            id = self.id,
            total = self.state.total_seconds(),
            "countdown confirmed"
        );
        cmd
    }

    /// Starts ticking. Returns the first tick command when a new tick chain
    /// was created, and `None` when already running or nothing is left.
    pub fn start(&mut self) -> Option<Cmd> {
        self.dispatch(Event::Start)
    }

    /// Stops ticking and drops the tick handle.
    pub fn pause(&mut self) {
        self.dispatch(Event::Pause);
    }

    /// Pauses when running, starts otherwise.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Discards the countdown and returns to Setup.
    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
        tracing::info!(id = self.id, "countdown reset");
    }

    /// Applies an event and keeps the tick handle in step with the
    /// running flag.
    fn dispatch(&mut self, event: Event) -> Option<Cmd> {
        let was_running = self.state.is_running();
        self.state = transition(self.state, event);
        tracing::debug!(
            id = self.id,
            ?event,
            remaining = self.state.remaining_seconds(),
            running = self.state.is_running(),
            "countdown transition"
        );

        match (was_running, self.state.is_running()) {
            (false, true) => {
                self.next_tag += 1;
                let handle = TickHandle { tag: self.next_tag };
                self.handle = Some(handle);
                tracing::debug!(id = self.id, tag = handle.tag, "tick handle created");
                Some(self.tick(handle))
            }
            (true, false) => {
                self.cancel();
                None
            }
            _ => None,
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(id = self.id, tag = handle.tag, "tick handle dropped");
        }
    }

    fn tick(&self, handle: TickHandle) -> Cmd {
        let id = self.id;
        let tag = handle.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn timeout_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(TimeoutMsg { id }) as Msg
        })
    }

    /// Builds the tick message the live handle is waiting for.
    #[cfg(test)]
    pub(crate) fn pending_tick(&self) -> Option<TickMsg> {
        self.handle.map(|h| TickMsg {
            id: self.id,
            tag: h.tag,
        })
    }

    /// Processes tick messages addressed to this timer.
    ///
    /// A tick is accepted only if it carries this timer's id and the tag of
    /// the live handle. Accepted ticks remove one second and schedule the
    /// next tick, or emit [`TimeoutMsg`] when the clock reaches zero.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id != self.id {
            return None;
        }
        let handle = match self.handle {
            Some(handle) if handle.tag == tick_msg.tag => handle,
            _ => {
                tracing::debug!(id = self.id, tag = tick_msg.tag, "stale tick ignored");
                return None;
            }
        };

        self.state = transition(self.state, Event::Tick);
        if self.state.is_running() {
            return Some(self.tick(handle));
        }

        self.cancel();
        tracing::info!(id = self.id, "countdown finished");
        Some(self.timeout_cmd())
    }

    /// Renders the remaining time as `HH:MM:SS`.
    pub fn view(&self) -> String {
        format_time(self.state.remaining_seconds())
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
