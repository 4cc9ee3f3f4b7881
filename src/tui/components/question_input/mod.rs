//! # QuestionInput Component
//!
//! The form's text field.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter
//! - Render the placeholder when empty and a dimmed field while disabled
//!
//! ## State Management
//!
//! The buffer is internal state; every edit is reported upward as
//! `InputEvent::Changed` so the core `question` mirrors it. `disabled` is a
//! prop synced from the submission phase. Unlike a chat box, the buffer is
//! kept after submit.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary};

/// High-level events emitted by the QuestionInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The field now holds this text
    Changed(String),
    /// User submitted the form (Enter pressed)
    Submit,
}

/// Single-line text input.
///
/// # Props
///
/// - `placeholder`: hint shown while the buffer is empty
/// - `disabled`: true while a request is in flight; all keys are ignored
pub struct QuestionInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    pub placeholder: String,
    pub disabled: bool,
    cursor: CursorState,
}

impl QuestionInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            disabled: false,
            cursor: CursorState::new(),
        }
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }
}

impl Component for QuestionInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = inner_width(area.width);
        self.cursor.update_scroll(&self.buffer, inner);

        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Question");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            let style = if self.disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Paragraph::new(self.cursor.visible(&self.buffer, inner)).style(style)
        };

        frame.render_widget(paragraph.block(block), area);

        // Disabled fields don't take the cursor
        if !self.disabled {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for QuestionInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks are dropped like a browser input does
                let text: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(input: &mut QuestionInput) -> String {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_reports_content() {
        let mut input = QuestionInput::new("");

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(InputEvent::Changed("h".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('i')),
            Some(InputEvent::Changed("hi".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::Changed("h".to_string()))
        );
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = QuestionInput::new("");
        for c in "ac".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "bc");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = QuestionInput::new("");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = QuestionInput::new("");
        input.handle_event(&TuiEvent::Paste("who\nwon?".to_string()));
        assert_eq!(input.buffer, "whowon?");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = QuestionInput::new("");
        input.handle_event(&TuiEvent::InputChar('q'));

        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
        assert_eq!(input.buffer, "q");
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut input = QuestionInput::new("");
        input.handle_event(&TuiEvent::InputChar('q'));
        input.disabled = true;

        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "q");
    }

    #[test]
    fn test_render_very_long_question_shows_its_end() {
        let mut input = QuestionInput::new("");
        input.handle_event(&TuiEvent::Paste(format!("{}END", "a".repeat(70_000))));

        let text = rendered_text(&mut input);

        assert!(text.contains("aEND"));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut input = QuestionInput::new("Ask away");
        let text = rendered_text(&mut input);
        assert!(text.contains("Ask away"));
        assert!(text.contains("Question"));
    }

    #[test]
    fn test_render_shows_buffer_instead_of_placeholder() {
        let mut input = QuestionInput::new("Ask away");
        input.handle_event(&TuiEvent::Paste("hello".to_string()));
        let text = rendered_text(&mut input);
        assert!(text.contains("hello"));
        assert!(!text.contains("Ask away"));
    }
}
