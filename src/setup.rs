//! Setup form: the "Set Exam Time" screen.
//!
//! Holds the hours and minutes inputs and turns them into a
//! [`TimerConfiguration`] when the user confirms. The form never clears its
//! inputs, so after a reset the last typed duration is shown again.

use crate::countdown::TimerConfiguration;
use crate::numberinput::{self, Model as NumberInput};
use crate::style::Styles;
use crate::Component;
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::lipgloss;

/// Which input has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// The hours input.
    #[default]
    Hours,
    /// The minutes input.
    Minutes,
}

/// Setup form state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Heading above the inputs.
    pub title: String,
    /// Label of the confirm action.
    pub confirm_label: String,
    /// Hours input, advisory range 0–23.
    pub hours: NumberInput,
    /// Minutes input, advisory range 0–59.
    pub minutes: NumberInput,
    styles: Styles,
    field: Field,
}

/// Creates the form with both inputs at 0 and hours focused.
pub fn new() -> Model {
    let mut m = Model {
        title: "Set Exam Time".to_string(),
        confirm_label: "Start Exam".to_string(),
        hours: numberinput::new("Hours", 0, 23),
        minutes: numberinput::new("Minutes", 0, 59),
        styles: Styles::default(),
        field: Field::Hours,
    };
    m.hours.focus();
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Applies a style set to the form and both inputs.
    pub fn set_styles(&mut self, styles: Styles) {
        self.hours.styles = styles.clone();
        self.minutes.styles = styles.clone();
        self.styles = styles;
    }

    /// The focused field.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Moves focus to `field`.
    pub fn set_field(&mut self, field: Field) {
        self.field = field;
        match field {
            Field::Hours => {
                self.minutes.blur();
                self.hours.focus();
            }
            Field::Minutes => {
                self.hours.blur();
                self.minutes.focus();
            }
        }
    }

    /// Moves focus to the other field. With two fields, next and previous
    /// are the same move.
    pub fn focus_next(&mut self) {
        let next = match self.field {
            Field::Hours => Field::Minutes,
            Field::Minutes => Field::Hours,
        };
        self.set_field(next);
    }

    /// The duration currently entered. Values are taken as typed.
    pub fn configuration(&self) -> TimerConfiguration {
        TimerConfiguration::new(self.hours.value(), self.minutes.value())
    }

    /// Forwards input to the focused field.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match self.field {
            Field::Hours => self.hours.update(msg),
            Field::Minutes => self.minutes.update(msg),
        }
    }

    /// Renders the heading, the two inputs side by side, and the confirm
    /// button.
    pub fn view(&self) -> String {
        let hours = self.hours.view();
        let minutes = self.minutes.view();
        let inputs = lipgloss::join_horizontal(
            lipgloss::TOP,
            &[hours.as_str(), "    ", minutes.as_str()],
        );
        let button = self
            .styles
            .button_primary
            .render(&format!("  {}  ", self.confirm_label));
        format!(
            "{}\n\n{}\n\n{}",
            self.styles.title.render(&self.title),
            inputs,
            button
        )
    }
}
