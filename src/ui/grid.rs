//! Character grid rendering.
//!
//! `Canvas` is the renderer contract: a fixed grid of character cells,
//! each with a color. Writes outside the grid are ignored and strings are
//! clipped at the right edge, never wrapped.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Default grid size (40x25 text screen).
pub const SCREEN_WIDTH: u16 = 40;
pub const SCREEN_HEIGHT: u16 = 25;

/// A rectangular area of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Number of cells covered.
    #[must_use]
    pub fn cells(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// This region cut down to a `width` x `height` grid.
    #[must_use]
    pub fn clipped_to(&self, width: u16, height: u16) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }
}

/// A character-cell render target.
pub trait Canvas {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Character at a cell, `None` outside the grid.
    fn char_at(&self, x: u16, y: u16) -> Option<u8>;

    fn set_char(&mut self, x: u16, y: u16, ch: u8);

    /// Color at a cell, `None` outside the grid.
    fn color_at(&self, x: u16, y: u16) -> Option<Color>;

    fn set_color(&mut self, x: u16, y: u16, color: Color);

    // === Convenience Methods ===

    /// Write a character and its color.
    fn put(&mut self, x: u16, y: u16, ch: u8, color: Color) {
        self.set_char(x, y, ch);
        self.set_color(x, y, color);
    }

    /// Write a string, clipped at the grid width.
    fn print_at_color(&mut self, x: u16, y: u16, text: &str, color: Color) {
        if y >= self.height() {
            return;
        }
        let room = usize::from(self.width().saturating_sub(x));
        for (i, ch) in text.bytes().take(room).enumerate() {
            // `room` fits in u16, so does `i`.
            self.put(x + i as u16, y, ch, color);
        }
    }

    /// Write a 0-255 value in decimal, without padding.
    fn print_number(&mut self, x: u16, y: u16, value: u8, color: Color) {
        self.print_at_color(x, y, &value.to_string(), color);
    }

    /// Fill a region with one character and color.
    fn fill_rect(&mut self, region: Region, ch: u8, color: Color) {
        let region = region.clipped_to(self.width(), self.height());
        for row in region.y..region.y + region.height {
            for col in region.x..region.x + region.width {
                self.put(col, row, ch, color);
            }
        }
    }

    /// Blank the whole grid.
    fn clear(&mut self) {
        let all = Region::new(0, 0, self.width(), self.height());
        self.fill_rect(all, b' ', Color::WHITE);
    }
}

/// Clamp a game value into the 0-255 display range.
#[must_use]
pub fn display_value(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// In-memory character grid.
///
/// ## Example
///
/// ```
/// use ccg_combat::ui::{Canvas, CharGrid, Color};
///
/// let mut grid = CharGrid::new(10, 2);
/// grid.print_at_color(6, 0, "clipped", Color::RED);
///
/// assert_eq!(grid.row_text(0), "      clip");
/// assert_eq!(grid.color_at(6, 0), Some(Color::RED));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    width: u16,
    height: u16,
    chars: Vec<u8>,
    colors: Vec<Color>,
}

impl CharGrid {
    /// Create a blank grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            chars: vec![b' '; cells],
            colors: vec![Color::WHITE; cells],
        }
    }

    /// Create a blank 40x25 screen.
    #[must_use]
    pub fn screen() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// One row as text (for tests and debugging).
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        match self.offset(0, y) {
            Some(start) => {
                let end = start + usize::from(self.width);
                String::from_utf8_lossy(&self.chars[start..end]).into_owned()
            }
            None => String::new(),
        }
    }

    /// Whether `text` appears anywhere on row `y`.
    #[must_use]
    pub fn row_contains(&self, y: u16, text: &str) -> bool {
        self.row_text(y).contains(text)
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::screen()
    }
}

impl Canvas for CharGrid {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn char_at(&self, x: u16, y: u16) -> Option<u8> {
        self.offset(x, y).map(|i| self.chars[i])
    }

    fn set_char(&mut self, x: u16, y: u16, ch: u8) {
        if let Some(i) = self.offset(x, y) {
            self.chars[i] = ch;
        }
    }

    fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        self.offset(x, y).map(|i| self.colors[i])
    }

    fn set_color(&mut self, x: u16, y: u16, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.colors[i] = color;
        }
    }
}
