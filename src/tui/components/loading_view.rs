//! # LoadingView Component
//!
//! Centered status line with a braille spinner. No controls.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct LoadingView<'a> {
    pub message: &'a str,
    pub spinner_frame: usize,
}

impl<'a> LoadingView<'a> {
    pub fn new(message: &'a str, spinner_frame: usize) -> Self {
        Self {
            message,
            spinner_frame,
        }
    }
}

pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

impl Component for LoadingView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char(self.spinner_frame)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                self.message,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
    }
}
