//! Bounded numeric input field.
//!
//! A small sibling of a text input that only takes digits. It backs the
//! "Hours" and "Minutes" fields of the setup form.
//!
//! The `min`/`max` bounds are advisory, the way an HTML number input's are:
//! typing can produce any value up to the character limit, while the
//! stepping keys (Up/Down) always land inside the bounds.
//!
//! ```rust
//! use exam_timer::numberinput::new;
//! use exam_timer::Component;
//!
//! let mut hours = new("Hours", 0, 23);
//! hours.focus();
//! hours.set_value(7);
//! assert_eq!(hours.value(), 7);
//! ```

use crate::style::Styles;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// A focused-or-not field holding a non-negative integer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Label rendered above the value.
    pub label: String,
    /// Lower advisory bound, used when stepping.
    pub min: u32,
    /// Upper advisory bound, used when stepping.
    pub max: u32,
    /// Maximum number of digits accepted from typing.
    pub char_limit: usize,
    /// Cell width the value is padded to.
    pub width: usize,
    /// Styles for label and value.
    pub styles: Styles,
    digits: Vec<char>,
    focus: bool,
}

/// Creates an unfocused field holding 0.
pub fn new(label: impl Into<String>, min: u32, max: u32) -> Model {
    let char_limit = max.to_string().len().max(1);
    Model {
        label: label.into(),
        min,
        max,
        char_limit,
        width: 6,
        styles: Styles::default(),
        digits: vec!['0'],
        focus: false,
    }
}

impl Model {
    /// The current value; an empty field reads as 0.
    pub fn value(&self) -> u32 {
        self.digits
            .iter()
            .filter_map(|c| c.to_digit(10))
            .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
    }

    /// Replaces the value. Out-of-range values are kept as-is.
    pub fn set_value(&mut self, value: u32) {
        self.digits = value.to_string().chars().collect();
    }

    /// The typed text, which may be empty.
    pub fn text(&self) -> String {
        self.digits.iter().collect()
    }

    /// Moves the value one step up, clamped into `[min, max]`.
    pub fn increment(&mut self) {
        let next = self.value().saturating_add(1).clamp(self.min, self.max);
        self.set_value(next);
    }

    /// Moves the value one step down, clamped into `[min, max]`.
    pub fn decrement(&mut self) {
        let next = self.value().saturating_sub(1).clamp(self.min, self.max);
        self.set_value(next);
    }

    fn insert_digit(&mut self, c: char) {
        // A lone leading zero is replaced rather than extended.
        if self.digits == ['0'] {
            self.digits.clear();
        }
        if self.digits.len() < self.char_limit {
            self.digits.push(c);
        }
    }

    /// Handles key input while focused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };
        if key_msg
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key_msg.key {
            KeyCode::Char(c) if c.is_ascii_digit() => self.insert_digit(c),
            KeyCode::Backspace => {
                self.digits.pop();
            }
            KeyCode::Delete => self.digits.clear(),
            KeyCode::Up => self.increment(),
            KeyCode::Down => self.decrement(),
            _ => {}
        }
        None
    }

    /// Renders the label above the padded value.
    pub fn view(&self) -> String {
        let value_style = if self.focus {
            &self.styles.input_focused
        } else {
            &self.styles.input_blurred
        };
        let text = format!(" {:<width$}", self.text(), width = self.width.saturating_sub(1));
        format!(
            "{}\n{}",
            self.styles.label.render(&self.label),
            value_style.render(&text)
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn focused(min: u32, max: u32) -> Model {
        let mut m = new("Hours", min, max);
        m.focus();
        m
    }

    #[test]
    fn test_new_defaults() {
        let m = new("Minutes", 0, 59);
        assert_eq!(m.value(), 0);
        assert_eq!(m.char_limit, 2);
        assert!(!m.focused());
    }

    #[test]
    fn test_typing_replaces_leading_zero() {
        let mut m = focused(0, 23);
        m.update(key(KeyCode::Char('1')));
        m.update(key(KeyCode::Char('5')));
        assert_eq!(m.value(), 15);
        assert_eq!(m.text(), "15");
    }

    #[test]
    fn test_char_limit_stops_typing() {
        let mut m = focused(0, 59);
        for c in ['1', '2', '3'] {
            m.update(key(KeyCode::Char(c)));
        }
        assert_eq!(m.value(), 12);
    }

    #[test]
    fn test_out_of_range_typing_is_accepted() {
        let mut m = focused(0, 23);
        m.update(key(KeyCode::Char('9')));
        m.update(key(KeyCode::Char('9')));
        assert_eq!(m.value(), 99);
    }

    #[test]
    fn test_backspace_to_empty_reads_zero() {
        let mut m = focused(0, 59);
        m.set_value(42);
        m.update(key(KeyCode::Backspace));
        assert_eq!(m.value(), 4);
        m.update(key(KeyCode::Backspace));
        assert_eq!(m.text(), "");
        assert_eq!(m.value(), 0);
    }

    #[test]
    fn test_stepping_clamps() {
        let mut m = focused(0, 23);
        m.update(key(KeyCode::Down));
        assert_eq!(m.value(), 0);

        m.set_value(23);
        m.update(key(KeyCode::Up));
        assert_eq!(m.value(), 23);

        // Stepping pulls typed out-of-range values back in
        m.set_value(99);
        m.update(key(KeyCode::Down));
        assert_eq!(m.value(), 23);
    }

    #[test]
    fn test_ignores_input_when_blurred() {
        let mut m = new("Hours", 0, 23);
        m.update(key(KeyCode::Char('5')));
        assert_eq!(m.value(), 0);
    }

    #[test]
    fn test_ignores_non_digits() {
        let mut m = focused(0, 23);
        m.update(key(KeyCode::Char('x')));
        assert_eq!(m.value(), 0);
    }

    #[test]
    fn test_view_contains_label_and_value() {
        let mut m = focused(0, 59);
        m.set_value(30);
        let view = strip_ansi_escapes::strip_str(m.view());
        assert!(view.contains("Hours"));
        assert!(view.contains("30"));
    }
}
