//! # ControlButton Component
//!
//! A single-line pill showing the key that activates it, e.g. ` [r] Reintentar `.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::presenter::{Control, Tint};
use crate::tui::component::Component;

pub const ACTIVATE_KEY: char = 'r';

pub struct ControlButton<'a> {
    pub control: &'a Control,
}

impl<'a> ControlButton<'a> {
    pub fn new(control: &'a Control) -> Self {
        Self { control }
    }

    pub fn label(&self) -> String {
        format!(" [{}] {} ", ACTIVATE_KEY, self.control.label)
    }

    /// Width the button needs, in cells.
    pub fn width(&self) -> u16 {
        self.label().chars().count() as u16
    }
}

/// Maps a presenter tint onto a terminal color.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
    }
}

impl Component for ControlButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::White)
            .bg(tint_color(self.control.tint))
            .add_modifier(Modifier::BOLD);
        let button = Paragraph::new(Line::from(Span::styled(self.label(), style)))
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}
