//! # SubmitButton Component
//!
//! Stateless. The label tracks the submission phase and the button greys out
//! while a request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct SubmitButton {
    /// True while submitting (Prop)
    pub is_loading: bool,
}

impl SubmitButton {
    pub fn new(is_loading: bool) -> Self {
        Self { is_loading }
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style));

        frame.render_widget(button, area);
    }
}
