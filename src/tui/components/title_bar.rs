//! # TitleBar Component
//!
//! Top status line: the form heading, the endpoint being asked, and a
//! spinner while a request is in flight.
//!
//! Stateless and props-only.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub endpoint: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(endpoint: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            endpoint,
            is_loading,
            spinner_frame,
        }
    }

    fn status(&self) -> String {
        if self.is_loading {
            format!(" | {} waiting for answer", SPINNER[self.spinner_frame % SPINNER.len()])
        } else {
            String::new()
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Ask a Question", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" (POST {}){}", self.endpoint, self.status())),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_title() {
        let mut title = TitleBar::new("http://h/ask_test".to_string(), false, 0);
        let text = draw(&mut title);
        assert!(text.starts_with("Ask a Question (POST http://h/ask_test)"));
        assert!(!text.contains("waiting"));
    }

    #[test]
    fn test_loading_title_has_status() {
        let mut title = TitleBar::new("/ask_test".to_string(), true, 3);
        let text = draw(&mut title);
        assert!(text.contains("waiting for answer"));
    }
}
