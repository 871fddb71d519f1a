//! Styles for every element the exam timer draws.
//!
//! The defaults follow a dark slate palette: white text, a blue accent for
//! the active control and the elapsed arc, a grey track, and a yellow plane.
//! Replace individual fields to re-theme the app:
//!
//! ```rust
//! use exam_timer::style::default_styles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = default_styles();
//! styles.arc = Style::new().foreground(Color::from("#10B981"));
//! ```

use lipgloss_extras::prelude::*;

/// Blue used for the elapsed arc and the primary button.
pub const ACCENT: &str = "#3B82F6";
/// Grey used for the ring's track.
pub const TRACK: &str = "#4B5563";
/// Yellow used for the plane glyph.
pub const PLANE: &str = "#FACC15";

/// Style set for the setup form, the ring, and the controls.
#[derive(Debug, Clone)]
pub struct Styles {
    /// "Set Exam Time" heading.
    pub title: Style,
    /// Field labels ("Hours", "Minutes").
    pub label: Style,
    /// Value of the focused input.
    pub input_focused: Style,
    /// Value of an unfocused input.
    pub input_blurred: Style,
    /// The primary action ("Start Exam", "Start", "Pause").
    pub button_primary: Style,
    /// The secondary action ("Reset").
    pub button_secondary: Style,
    /// The `HH:MM:SS` readout in the ring's centre.
    pub readout: Style,
    /// Unfilled track cells.
    pub track: Style,
    /// Elapsed arc cells.
    pub arc: Style,
    /// The plane glyph.
    pub plane: Style,
    /// Help bar keys.
    pub help_key: Style,
    /// Help bar descriptions.
    pub help_desc: Style,
    /// Separator between help entries.
    pub help_separator: Style,
}

/// Returns the default palette.
pub fn default_styles() -> Styles {
    Styles {
        title: Style::new().foreground(Color::from("#FFFFFF")).bold(true),
        label: Style::new().foreground(Color::from("#CBD5E1")),
        input_focused: Style::new()
            .foreground(Color::from("#FFFFFF"))
            .background(Color::from("#334155"))
            .bold(true),
        input_blurred: Style::new()
            .foreground(Color::from("#94A3B8"))
            .background(Color::from("#1E293B")),
        button_primary: Style::new()
            .foreground(Color::from("#FFFFFF"))
            .background(Color::from("#2563EB"))
            .bold(true),
        button_secondary: Style::new()
            .foreground(Color::from("#FFFFFF"))
            .background(Color::from(TRACK)),
        readout: Style::new().foreground(Color::from("#FFFFFF")).bold(true),
        track: Style::new().foreground(Color::from(TRACK)),
        arc: Style::new().foreground(Color::from(ACCENT)),
        plane: Style::new().foreground(Color::from(PLANE)).bold(true),
        help_key: Style::new().foreground(Color::from("#909090")),
        help_desc: Style::new().foreground(Color::from("#626262")),
        help_separator: Style::new().foreground(Color::from("#4A4A4A")),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}
