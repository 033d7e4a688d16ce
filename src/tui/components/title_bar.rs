//! # TitleBar Component
//!
//! Top status bar: app name, where fixes come from, and the current status.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"whereami (source: simulated) | Obteniendo ubicación..."`
//! 2. **Default**: `"whereami (source: simulated)"`
//!
//! The key hint is right-aligned and dropped first when the terminal is narrow.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const KEY_HINT: &str = "r acción  q salir";

/// Top status bar component. All fields are props.
pub struct TitleBar {
    /// Name of the active position source (e.g., "simulated", "ip-api")
    pub source_name: String,
    /// Status message (e.g., "Obteniendo ubicación...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source_name: String, status_message: String) -> Self {
        Self {
            source_name,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("whereami (source: {})", self.source_name)
        } else {
            format!(
                "whereami (source: {}) | {}",
                self.source_name, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = self.title_text();
        let hint_width = KEY_HINT.chars().count() as u16;
        let title_width = title_text.chars().count() as u16;

        if area.width < title_width + hint_width + 2 {
            frame.render_widget(Span::raw(title_text), area);
            return;
        }

        let [title_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);
        frame.render_widget(Span::raw(title_text), title_area);
        frame.render_widget(
            Span::styled(KEY_HINT, Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "simulated".to_string(),
            "Obteniendo ubicación...".to_string(),
        );

        let text = render_to_text(&mut title_bar, 80);

        assert!(text.contains("whereami"));
        assert!(text.contains("simulated"));
        assert!(text.contains("Obteniendo ubicación..."));
        assert!(text.contains(KEY_HINT));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("ip-api".to_string(), String::new());

        let text = render_to_text(&mut title_bar, 80);

        assert!(text.contains("whereami (source: ip-api)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_narrow_terminal_drops_hint() {
        let mut title_bar = TitleBar::new("simulated".to_string(), "Error".to_string());

        let text = render_to_text(&mut title_bar, 40);

        assert!(text.contains("whereami"));
        assert!(!text.contains("q salir"));
    }
}
