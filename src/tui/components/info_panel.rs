//! # InfoPanel Component
//!
//! Boxed overlay with the coordinates in text, drawn on top of the map.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::Component;

pub struct InfoPanel<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
}

impl<'a> InfoPanel<'a> {
    pub fn new(title: &'a str, lines: &'a [String]) -> Self {
        Self { title, lines }
    }

    /// Rows needed: borders plus one per line.
    pub fn height(&self) -> u16 {
        self.lines.len() as u16 + 2
    }
}

impl Component for InfoPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .title(Line::from(format!(" 📍 {} ", self.title)))
            .title_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Gray))
            .padding(Padding::horizontal(1));

        let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let panel = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_lines() {
        let lines = vec!["Lat: 19.432608".to_string(), "Lng: -99.133209".to_string()];
        let mut panel = InfoPanel::new("Tu ubicacion", &lines);
        assert_eq!(panel.height(), 4);

        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Tu ubicacion"));
        assert!(text.contains("Lat: 19.432608"));
        assert!(text.contains("Lng: -99.133209"));
    }
}
