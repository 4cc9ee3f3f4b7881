//! # ResponsePanel Component
//!
//! Shows the current response text, wrapped, with vertical scrolling for
//! long answers. An empty response renders an empty panel.
//!
//! The text is a prop synced from `App::response` every frame; scroll
//! position is internal and resets whenever the text changes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;

/// Count wrapped lines the same way the `Paragraph` below wraps them.
fn wrapped_line_count(text: &str, width: u16) -> usize {
    if text.is_empty() || width == 0 {
        return 0;
    }
    let options = textwrap::Options::new(width as usize).break_words(true);
    textwrap::wrap(text, options).len()
}

/// Furthest scroll offset, saturating at what `Paragraph::scroll` can address.
fn max_scroll_for(total_lines: usize, viewport: u16) -> u16 {
    let max = total_lines.saturating_sub(viewport as usize);
    u16::try_from(max).unwrap_or(u16::MAX)
}

pub struct ResponsePanel {
    text: String,
    scroll: u16,
    /// Cached from last render: how far the text can scroll
    max_scroll: u16,
    /// Cached from last render: visible content rows
    viewport: u16,
}

impl ResponsePanel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            scroll: 0,
            max_scroll: 0,
            viewport: 0,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.scroll = 0;
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = next as u16;
    }
}

impl Default for ResponsePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResponsePanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.viewport = area.height.saturating_sub(VERTICAL_OVERHEAD);
        let total = wrapped_line_count(&self.text, width);
        self.max_scroll = max_scroll_for(total, self.viewport);
        self.scroll = self.scroll.min(self.max_scroll);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title("Response:");

        let paragraph = Paragraph::new(self.text.as_str())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for ResponsePanel {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page = self.viewport.max(1) as i32;
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => return None,
        }
        Some(())
    }
}
