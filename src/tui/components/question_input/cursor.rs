//! Cursor position and horizontal scroll for the single-line QuestionInput.
//!
//! `CursorState` owns the cursor byte offset and the first visible display
//! column. Methods take `buffer: &str` explicitly; the text is owned by
//! `QuestionInput`.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;
/// Left + right borders
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
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

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First display column shown in the field
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Display column of the cursor from the start of the buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Keep the cursor inside a field `inner` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, inner: u16) {
        let col = self.column(buffer);
        let inner = inner as usize;
        if inner == 0 || col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll.saturating_add(inner) {
            self.scroll = col + 1 - inner;
        }
    }

    /// The part of `buffer` that fits in the field at the current scroll.
    pub fn visible<'a>(&self, buffer: &'a str, inner: u16) -> &'a str {
        let limit = self.scroll.saturating_add(inner as usize);
        let mut acc: usize = 0;
        let mut start = buffer.len();
        let mut end = buffer.len();
        for (i, c) in buffer.char_indices() {
            let w = c.width().unwrap_or(0);
            if start == buffer.len() && acc >= self.scroll {
                start = i;
            }
            if acc + w > limit {
                end = i;
                break;
            }
            acc += w;
        }
        if start > end {
            return "";
        }
        &buffer[start..end]
    }

    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let offset = self.column(buffer).saturating_sub(self.scroll);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        (
            area.x.saturating_add(BORDER_OFFSET).saturating_add(offset),
            area.y.saturating_add(BORDER_OFFSET),
        )
    }
}
