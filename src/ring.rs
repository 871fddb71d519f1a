//! Circular progress ring.
//!
//! Draws a circle of track cells, fills it clockwise from twelve o'clock in
//! proportion to progress, puts a plane glyph on the circle at the rotation
//! angle, and writes a label (the `HH:MM:SS` readout) across the centre.
//!
//! Terminal cells are roughly twice as tall as they are wide, so the grid is
//! `4r + 1` columns by `2r + 1` rows and horizontal distances are halved when
//! testing whether a cell lies on the circle.
//!
//! Rendering is split in two so the geometry can be tested without styles:
//! [`Model::cells`] builds a grid of [`Cell`]s, and [`Model::view`] paints it.

use crate::clock::rotation_degrees;
use crate::style::Styles;
use unicode_width::UnicodeWidthStr;

/// Smallest radius that still leaves room for an `HH:MM:SS` label.
pub const MIN_RADIUS: usize = 3;
/// Default radius in rows.
pub const DEFAULT_RADIUS: usize = 6;

/// What occupies one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing drawn.
    Empty,
    /// Part of the circle not yet elapsed.
    Track,
    /// Part of the circle already elapsed.
    Arc,
    /// The plane glyph.
    Plane,
    /// One character of the centre label.
    Label(char),
}

/// Ring renderer settings.
#[derive(Debug, Clone)]
pub struct Model {
    /// Radius in rows; never below [`MIN_RADIUS`].
    radius: usize,
    /// Glyph for track cells.
    pub track_char: char,
    /// Glyph for elapsed cells.
    pub arc_char: char,
    /// Glyph for the plane.
    pub plane_char: char,
    /// Colours.
    pub styles: Styles,
}

/// Creates a ring with the given radius (raised to [`MIN_RADIUS`] if smaller).
pub fn new(radius: usize) -> Model {
    Model {
        radius: radius.max(MIN_RADIUS),
        track_char: '·',
        arc_char: '●',
        plane_char: '✈',
        styles: Styles::default(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new(DEFAULT_RADIUS)
    }
}

impl Model {
    /// The effective radius.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Changes the radius, raised to [`MIN_RADIUS`] if smaller.
    pub fn set_radius(&mut self, radius: usize) {
        self.radius = radius.max(MIN_RADIUS);
    }

    /// Grid size as `(columns, rows)`.
    pub fn size(&self) -> (usize, usize) {
        (4 * self.radius + 1, 2 * self.radius + 1)
    }

    /// Lays out the ring for `progress` in `[0, 1]` with `label` centred.
    pub fn cells(&self, progress: f64, label: &str) -> Vec<Vec<Cell>> {
        let (cols, rows) = self.size();
        let r = self.radius as f64;
        let (cx, cy) = (2.0 * r, r);
        let progress = progress.clamp(0.0, 1.0);
        let filled_degrees = progress * 360.0;

        let mut grid = vec![vec![Cell::Empty; cols]; rows];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let dx = (col as f64 - cx) / 2.0;
                let dy = row as f64 - cy;
                if ((dx * dx + dy * dy).sqrt() - r).abs() >= 0.5 {
                    continue;
                }
                *cell = if angle_of(dx, dy) < filled_degrees {
                    Cell::Arc
                } else {
                    Cell::Track
                };
            }
        }

        let theta = rotation_degrees(progress).to_radians();
        let plane_col = (cx + 2.0 * r * theta.sin()).round() as usize;
        let plane_row = (cy - r * theta.cos()).round() as usize;
        if let Some(cell) = grid
            .get_mut(plane_row.min(rows - 1))
            .and_then(|line| line.get_mut(plane_col.min(cols - 1)))
        {
            *cell = Cell::Plane;
        }

        let start = (cols / 2).saturating_sub(label.width() / 2);
        let centre = &mut grid[self.radius];
        for (slot, c) in centre.iter_mut().skip(start).zip(label.chars()) {
            *slot = Cell::Label(c);
        }

        grid
    }

    /// Renders the ring as styled text, one line per grid row.
    pub fn view(&self, progress: f64, label: &str) -> String {
        self.cells(progress, label)
            .iter()
            .map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_line(&self, line: &[Cell]) -> String {
        let mut out = String::new();
        let mut run = String::new();
        let mut run_kind: Option<Cell> = None;

        for cell in line {
            let (kind, ch) = match *cell {
                Cell::Empty => (Cell::Empty, ' '),
                Cell::Track => (Cell::Track, self.track_char),
                Cell::Arc => (Cell::Arc, self.arc_char),
                Cell::Plane => (Cell::Plane, self.plane_char),
                Cell::Label(c) => (Cell::Label(' '), c),
            };
            if run_kind != Some(kind) {
                if let Some(prev) = run_kind {
                    out.push_str(&self.paint(prev, &run));
                }
                run.clear();
                run_kind = Some(kind);
            }
            run.push(ch);
        }
        if let Some(prev) = run_kind {
            out.push_str(&self.paint(prev, &run));
        }
        out
    }

    fn paint(&self, kind: Cell, text: &str) -> String {
        match kind {
            Cell::Empty => text.to_string(),
            Cell::Track => self.styles.track.render(text),
            Cell::Arc => self.styles.arc.render(text),
            Cell::Plane => self.styles.plane.render(text),
            Cell::Label(_) => self.styles.readout.render(text),
        }
    }
}

/// Clockwise angle from twelve o'clock in `[0, 360)` degrees.
fn angle_of(dx: f64, dy: f64) -> f64 {
    let degrees = dx.atan2(-dy).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}
