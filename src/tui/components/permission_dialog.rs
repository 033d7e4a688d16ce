//! # Permission Dialog Component
//!
//! Modal overlay asking for foreground location access, shown while a
//! `PromptPermission` waits for an answer. `s`/`y` allow, `n`/Esc deny.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::location::PermissionStatus;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const QUESTION: &str = "¿Permitir que whereami acceda a tu ubicación mientras la app está en uso?";

pub struct PermissionDialog;

impl PermissionDialog {
    /// Translate a key into an answer. Other keys leave the dialog open.
    pub fn handle_event(event: &TuiEvent) -> Option<PermissionStatus> {
        match event {
            TuiEvent::Allow => Some(PermissionStatus::Granted),
            TuiEvent::Deny | TuiEvent::Escape => Some(PermissionStatus::Denied),
            _ => None,
        }
    }
}

impl Component for PermissionDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Ubicación ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" s Permitir  n Denegar ").centered())
            .padding(Padding::uniform(1));

        let text = vec![
            Line::from(Span::styled(
                QUESTION,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Solo se usa para mostrar tu posición en el mapa.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
