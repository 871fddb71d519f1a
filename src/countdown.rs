//! Countdown state machine.
//!
//! This module holds the part of the exam timer that has any real shape to it:
//! the Setup/Running lifecycle, the run/pause flag and the one-second tick.
//! Everything here is plain data and pure functions, so the whole lifecycle
//! can be driven and checked without a terminal or a bubbletea runtime.
//!
//! # Lifecycle
//!
//! ```text
//! Setup --confirm--> Running.Paused --start--> Running.Active
//!   ^                    ^   |                     |   |
//!   |                    |   +-------reset---------+   |
//!   +--------------------+----tick to zero / pause-----+
//! ```
//!
//! # Examples
//!
//! ```rust
//! use exam_timer::countdown::{transition, Event, Stage, TimerConfiguration, TimerState};
//!
//! let config = TimerConfiguration::new(0, 1);
//! let state = transition(TimerState::default(), Event::Confirm(config));
//! assert_eq!(state.stage(), Stage::Running);
//! assert_eq!(state.total_seconds(), 60);
//!
//! let state = transition(state, Event::Start);
//! let state = transition(state, Event::Tick);
//! assert_eq!(state.remaining_seconds(), 59);
//! assert!(state.is_running());
//! ```

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// The duration a user asks for in the Setup stage.
///
/// The advisory ranges are 0–23 hours and 0–59 minutes. They are not
/// enforced here: whatever the inputs hold is what gets confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerConfiguration {
    /// Whole hours.
    pub hours: u32,
    /// Whole minutes.
    pub minutes: u32,
}

impl TimerConfiguration {
    /// Creates a configuration from hours and minutes.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Total duration in seconds, `hours * 3600 + minutes * 60`.
    ///
    /// ```rust
    /// use exam_timer::countdown::TimerConfiguration;
    ///
    /// assert_eq!(TimerConfiguration::new(1, 30).total_seconds(), 5400);
    /// assert_eq!(TimerConfiguration::default().total_seconds(), 0);
    /// ```
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * SECONDS_PER_HOUR + u64::from(self.minutes) * SECONDS_PER_MINUTE
    }
}

/// Top-level mode of the timer; decides which view is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    /// Collecting hours and minutes.
    #[default]
    Setup,
    /// A duration was confirmed; the countdown view is shown.
    Running,
}

/// Everything that can happen to a [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Leave Setup with the given duration.
    Confirm(TimerConfiguration),
    /// Resume ticking.
    Start,
    /// Stop ticking, keeping the remaining time.
    Pause,
    /// Discard the countdown and go back to Setup.
    Reset,
    /// One interval elapsed.
    Tick,
}

/// The live countdown.
///
/// Fields are private so the invariants below can only be reached through
/// [`transition`]:
///
/// - `remaining_seconds <= total_seconds`
/// - `total_seconds` only changes on confirm and reset
/// - never running with zero seconds remaining
/// - never running in the Setup stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u64,
    total_seconds: u64,
    is_running: bool,
    stage: Stage,
}

impl TimerState {
    /// Seconds left on the clock.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Seconds the countdown was confirmed with.
    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// Whether ticks currently count down.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the countdown has run out.
    pub fn finished(&self) -> bool {
        self.stage == Stage::Running && self.remaining_seconds == 0
    }

    /// Applies one event. Same as [`transition`], as a method.
    pub fn apply(self, event: Event) -> Self {
        match event {
            Event::Confirm(config) => self.confirm(config),
            Event::Start => self.start(),
            Event::Pause => self.pause(),
            Event::Reset => TimerState::default(),
            Event::Tick => self.tick(),
        }
    }

    fn confirm(self, config: TimerConfiguration) -> Self {
        if self.stage != Stage::Setup {
            return self;
        }
        let total = config.total_seconds();
        TimerState {
            remaining_seconds: total,
            total_seconds: total,
            is_running: false,
            stage: Stage::Running,
        }
    }

    fn start(self) -> Self {
        // Zero remaining is terminal until reset.
        if self.stage != Stage::Running || self.remaining_seconds == 0 {
            return self;
        }
        TimerState {
            is_running: true,
            ..self
        }
    }

    fn pause(self) -> Self {
        TimerState {
            is_running: false,
            ..self
        }
    }

    fn tick(self) -> Self {
        if !self.is_running {
            return self;
        }
        let remaining_seconds = self.remaining_seconds.saturating_sub(1);
        TimerState {
            remaining_seconds,
            is_running: remaining_seconds > 0,
            ..self
        }
    }
}

/// Pure transition function `(state, event) -> state`.
///
/// Events that make no sense in the current state (confirming while running,
/// starting during setup, ticking while paused) leave the state unchanged.
///
/// ```rust
/// use exam_timer::countdown::{transition, Event, Stage, TimerConfiguration, TimerState};
///
/// let running = transition(
///     TimerState::default(),
///     Event::Confirm(TimerConfiguration::new(0, 5)),
/// );
/// let reset = transition(transition(running, Event::Start), Event::Reset);
/// assert_eq!(reset.stage(), Stage::Setup);
/// assert_eq!(reset.remaining_seconds(), 0);
/// assert!(!reset.is_running());
/// ```
pub fn transition(state: TimerState, event: Event) -> TimerState {
    state.apply(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(hours: u32, minutes: u32) -> TimerState {
        transition(
            TimerState::default(),
            Event::Confirm(TimerConfiguration::new(hours, minutes)),
        )
    }

    fn running_with(remaining: u64) -> TimerState {
        TimerState {
            remaining_seconds: remaining,
            total_seconds: remaining,
            is_running: true,
            stage: Stage::Running,
        }
    }

    #[test]
    fn test_default_is_setup() {
        let state = TimerState::default();
        assert_eq!(state.stage(), Stage::Setup);
        assert_eq!(state.remaining_seconds(), 0);
        assert_eq!(state.total_seconds(), 0);
        assert!(!state.is_running());
    }

    #[test]
    fn test_confirm_computes_total() {
        let state = confirmed(1, 30);
        assert_eq!(state.stage(), Stage::Running);
        assert_eq!(state.total_seconds(), 5400);
        assert_eq!(state.remaining_seconds(), 5400);
        assert!(!state.is_running()); // confirm does not start ticking
    }

    #[test]
    fn test_confirm_zero_duration_is_finished() {
        let state = confirmed(0, 0);
        assert_eq!(state.stage(), Stage::Running);
        assert!(state.finished());

        // Start is a no-op at zero
        let state = transition(state, Event::Start);
        assert!(!state.is_running());
    }

    #[test]
    fn test_confirm_accepts_out_of_range_values() {
        let state = confirmed(25, 75);
        assert_eq!(state.total_seconds(), 25 * 3600 + 75 * 60);
    }

    #[test]
    fn test_confirm_ignored_while_running() {
        let state = transition(confirmed(0, 1), Event::Start);
        let again = transition(state, Event::Confirm(TimerConfiguration::new(5, 0)));
        assert_eq!(again, state);
    }

    #[test]
    fn test_start_ignored_in_setup() {
        let state = transition(TimerState::default(), Event::Start);
        assert!(!state.is_running());
        assert_eq!(state.stage(), Stage::Setup);
    }

    #[test]
    fn test_start_is_idempotent() {
        let once = transition(confirmed(0, 1), Event::Start);
        let twice = transition(once, Event::Start);
        assert_eq!(once, twice);
        assert!(twice.is_running());
    }

    #[test]
    fn test_pause_is_idempotent() {
        let state = transition(confirmed(0, 1), Event::Start);
        let state = transition(state, Event::Tick);
        let once = transition(state, Event::Pause);
        let twice = transition(once, Event::Pause);
        assert!(!twice.is_running());
        assert_eq!(twice.remaining_seconds(), 59);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ticks_run_down_to_zero_and_stop() {
        let mut state = running_with(3);
        for expected in [2, 1, 0] {
            state = transition(state, Event::Tick);
            assert_eq!(state.remaining_seconds(), expected);
        }
        assert!(!state.is_running());

        // A fourth tick changes nothing
        let after = transition(state, Event::Tick);
        assert_eq!(after, state);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let state = confirmed(0, 1);
        assert_eq!(transition(state, Event::Tick), state);
    }

    #[test]
    fn test_total_is_fixed_while_running() {
        let mut state = transition(confirmed(0, 2), Event::Start);
        for _ in 0..30 {
            state = transition(state, Event::Tick);
            assert_eq!(state.total_seconds(), 120);
            assert!(state.remaining_seconds() <= state.total_seconds());
        }
    }

    #[test]
    fn test_reset_from_every_state() {
        let setup = TimerState::default();
        let paused = confirmed(0, 1);
        let active = transition(paused, Event::Start);
        let finished = confirmed(0, 0);

        for state in [setup, paused, active, finished] {
            let reset = transition(state, Event::Reset);
            assert_eq!(reset.stage(), Stage::Setup);
            assert!(!reset.is_running());
            assert_eq!(reset.remaining_seconds(), 0);
        }
    }

    #[test]
    fn test_one_minute_scenario() {
        let mut state = confirmed(0, 1);
        assert_eq!(state.total_seconds(), 60);
        assert_eq!(state.remaining_seconds(), 60);

        state = transition(state, Event::Start);
        for _ in 0..60 {
            state = transition(state, Event::Tick);
        }
        assert_eq!(state.remaining_seconds(), 0);
        assert!(!state.is_running());
        assert!(state.finished());
    }
}
