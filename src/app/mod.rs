//! The exam timer screen.
//!
//! Ties the setup form, the countdown, the progress ring, and the help bar
//! into a single bubbletea-rs model.
//!
//! # Controls
//!
//! | Stage | Key | Action |
//! |---|---|---|
//! | Setup | digits, Backspace, Up/Down | edit the focused field |
//! | Setup | Tab / Shift+Tab / Left / Right | switch field |
//! | Setup | Enter | Start Exam (confirm) |
//! | Running | Space / `s` | Start / Pause |
//! | Running | `r` | Reset |
//! | any | `q` / Esc / Ctrl+C | quit |
//!
//! # Running
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use exam_timer::app::Model;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<Model>::builder().alt_screen(true).build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod keymap;
pub mod model;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, new_with_config, Model};
