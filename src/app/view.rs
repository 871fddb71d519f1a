//! Rendering for the exam timer app.

use super::model::Model;
use crate::countdown::Stage;
use lipgloss_extras::lipgloss;

impl Model {
    /// Renders the current stage followed by the help bar, centred when the
    /// terminal width is known.
    pub fn view(&self) -> String {
        let body = match self.timer.stage() {
            Stage::Setup => self.setup.view(),
            Stage::Running => self.countdown_view(),
        };
        let help = self.help.view(&self.key_map);
        self.center(&format!("{}\n\n{}", body, help))
    }

    fn countdown_view(&self) -> String {
        let ring = self
            .ring
            .view(self.timer.progress(), &self.timer.view());

        let toggle_label = if self.timer.running() {
            "⏸ Pause"
        } else {
            "▶ Start"
        };
        let toggle = self
            .styles
            .button_primary
            .render(&format!("  {}  ", toggle_label));
        let reset = self.styles.button_secondary.render("  ↺ Reset  ");

        format!("{}\n\n{}  {}", ring, toggle, reset)
    }

    fn center(&self, content: &str) -> String {
        if self.width == 0 {
            return content.to_string();
        }
        let block_width = content
            .lines()
            .map(|line| lipgloss::width_visible(line))
            .max()
            .unwrap_or(0);
        let pad = " ".repeat(self.width.saturating_sub(block_width) / 2);
        content
            .lines()
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
