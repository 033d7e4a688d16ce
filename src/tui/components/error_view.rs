//! # ErrorView Component
//!
//! Centered error message in red with the retry control underneath.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::presenter::Control;
use crate::tui::component::Component;
use crate::tui::components::control_button::ControlButton;

/// Rows reserved for the message; longer messages are clipped.
const MESSAGE_HEIGHT: u16 = 3;

pub struct ErrorView<'a> {
    pub message: &'a str,
    pub retry: &'a Control,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str, retry: &'a Control) -> Self {
        Self { message, retry }
    }
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let padded = area.inner(ratatui::layout::Margin::new(2, 0));
        let [message_area, _, button_area] = Layout::vertical([
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(padded);

        let message = Paragraph::new(self.message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, message_area);

        ControlButton::new(self.retry).render(frame, button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presenter::{ControlAction, Tint};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_message_and_retry() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let retry = Control {
            label: "Reintentar",
            action: ControlAction::Retry,
            tint: Tint::Blue,
        };

        terminal
            .draw(|f| ErrorView::new("Location services disabled", &retry).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Location services disabled"));
        assert!(text.contains("[r] Reintentar"));
    }
}
