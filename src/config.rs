//! Application configuration.
//!
//! There is no config file, environment variable, or command-line surface;
//! configuration is done in code with option functions:
//!
//! ```rust
//! use exam_timer::config::{new, with_interval, with_ring_radius};
//! use std::time::Duration;
//!
//! let config = new(&[
//!     with_ring_radius(8),
//!     with_interval(Duration::from_millis(500)),
//! ]);
//! assert_eq!(config.ring_radius, 8);
//! assert_eq!(config.interval, Duration::from_millis(500));
//! ```

use crate::ring::DEFAULT_RADIUS;
use crate::style::Styles;
use crate::timer::DEFAULT_INTERVAL;
use std::time::Duration;

/// Settings for the exam timer app.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time between countdown ticks. One second is removed per tick.
    pub interval: Duration,
    /// Radius of the progress ring in rows.
    pub ring_radius: usize,
    /// Colours for every element.
    pub styles: Styles,
}

/// One configuration change, applied by [`new`].
pub enum ConfigOption {
    /// Sets the tick interval.
    WithInterval(Duration),
    /// Sets the ring radius.
    WithRingRadius(usize),
    /// Replaces the style set.
    WithStyles(Styles),
}

impl ConfigOption {
    fn apply(&self, c: &mut Config) {
        match self {
            ConfigOption::WithInterval(interval) => c.interval = *interval,
            ConfigOption::WithRingRadius(radius) => c.ring_radius = *radius,
            ConfigOption::WithStyles(styles) => c.styles = styles.clone(),
        }
    }
}

/// Sets the tick interval. Shorter intervals make the countdown run faster
/// than real time, which is mostly useful for demos.
pub fn with_interval(interval: Duration) -> ConfigOption {
    ConfigOption::WithInterval(interval)
}

/// Sets the progress ring radius in rows.
pub fn with_ring_radius(radius: usize) -> ConfigOption {
    ConfigOption::WithRingRadius(radius)
}

/// Replaces the default styles.
pub fn with_styles(styles: Styles) -> ConfigOption {
    ConfigOption::WithStyles(styles)
}

/// Builds a configuration from the defaults plus `opts`, applied in order.
pub fn new(opts: &[ConfigOption]) -> Config {
    let mut c = Config::default();
    for opt in opts {
        opt.apply(&mut c);
    }
    c
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            ring_radius: DEFAULT_RADIUS,
            styles: Styles::default(),
        }
    }
}
