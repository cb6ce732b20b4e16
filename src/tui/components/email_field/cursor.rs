//! Cursor position and horizontal scrolling for the EmailField.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset in display
//! columns. All methods take `buffer: &str` explicitly; the text itself is
//! owned by `EmailField`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Left + right borders consumed horizontally
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

/// Calculate the inner content width after subtracting the borders.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden off the left edge
    pub scroll_cols: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_cols: 0,
        }
    }

    /// Reset cursor to start (used after the field is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_cols = 0;
    }

    /// Display column of the cursor, ignoring scroll.
    pub fn column(&self, buffer: &str) -> u16 {
        to_cols(buffer[..self.pos].width())
    }

    /// Keep the cursor inside a window `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: u16) {
        if width == 0 {
            self.scroll_cols = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_cols {
            self.scroll_cols = col;
        } else if col >= self.scroll_cols.saturating_add(width) {
            self.scroll_cols = col - width + 1;
        }
    }

    /// Screen position of the cursor inside a bordered `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let visible_col = self.column(buffer).saturating_sub(self.scroll_cols);
        (
            area.x.saturating_add(BORDER_OFFSET).saturating_add(visible_col),
            area.y + BORDER_OFFSET,
        )
    }
}

/// Display width clamped to what a terminal coordinate can hold.
fn to_cols(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// The part of `buffer` that fits in `width` columns after skipping `scroll_cols`.
pub(super) fn visible_slice(buffer: &str, scroll_cols: u16, width: u16) -> &str {
    let mut skipped = 0u16;
    let mut start = buffer.len();
    for (i, c) in buffer.char_indices() {
        if skipped >= scroll_cols {
            start = i;
            break;
        }
        skipped = skipped.saturating_add(to_cols(c.width().unwrap_or(0)));
    }

    let rest = &buffer[start..];
    let mut used = 0u16;
    let mut end = rest.len();
    for (i, c) in rest.char_indices() {
        let w = to_cols(c.width().unwrap_or(0));
        if used.saturating_add(w) > width {
            end = i;
            break;
        }
        used += w;
    }
    &rest[..end]
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
