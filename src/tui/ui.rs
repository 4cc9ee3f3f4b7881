use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SubmitButton, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const BUTTON_WIDTH: u16 = 17;
const HELP_TEXT: &str = "Enter submit · ↑/↓ PgUp/PgDn scroll · Esc quit";

/// Pure function of state to screen. Props are synced into the stateful
/// components here so the frame always reflects `app`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, form_area, response_area, help_area] = layout.areas(frame.area());

    let form = Layout::horizontal([Min(0), Length(BUTTON_WIDTH)]);
    let [input_area, button_area] = form.areas(form_area);

    let is_loading = app.is_loading();

    TitleBar::new(tui.endpoint.clone(), is_loading, spinner_frame).render(frame, title_area);

    tui.input.disabled = is_loading;
    tui.input.render(frame, input_area);

    SubmitButton::new(is_loading).render(frame, button_area);

    tui.response_panel.set_text(&app.response);
    tui.response_panel.render(frame, response_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
