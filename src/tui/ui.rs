use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::presenter::{Control, MapMarker, MapRegion, RenderedView, present};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ControlButton, ErrorView, InfoPanel, LoadingView, MapView, PermissionDialog, TitleBar,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(tui.source_name.clone(), app.status_message.clone()).render(frame, title_area);

    match &present(&app.result, app.map_delta) {
        RenderedView::Status { message } => {
            LoadingView::new(message, tui.spinner_frame).render(frame, main_area);
        }
        RenderedView::Error { message, retry } => {
            ErrorView::new(message, retry).render(frame, main_area);
        }
        RenderedView::Map {
            region,
            markers,
            panel_title,
            panel_lines,
            refresh,
        } => {
            draw_map_view(
                frame,
                main_area,
                *region,
                markers,
                panel_title,
                panel_lines,
                refresh,
            );
        }
    }

    if app.pending_permission.is_some() {
        PermissionDialog.render(frame, main_area);
    }
}

/// Map fills the area; the info panel floats near the top and the refresh
/// control sits near the bottom, both inset from the map border.
fn draw_map_view(
    frame: &mut Frame,
    area: Rect,
    region: MapRegion,
    markers: &[MapMarker],
    panel_title: &str,
    panel_lines: &[String],
    refresh: &Control,
) {
    MapView::new(region, markers).render(frame, area);

    let mut panel = InfoPanel::new(panel_title, panel_lines);
    let panel_area = overlay_rect(area, 1, panel.height());
    panel.render(frame, panel_area);

    let mut button = ControlButton::new(refresh);
    let bottom = area.bottom().saturating_sub(3);
    let button_area = Rect::new(area.x, bottom.max(area.y), area.width, 1).intersection(area);
    if button.width() <= button_area.width {
        button.render(frame, button_area);
    }
}

/// A full-width strip `height` rows tall, `top` rows below the area's top
/// edge, inset two columns on each side. Clamped to `area`.
fn overlay_rect(area: Rect, top: u16, height: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(top),
        area.width.saturating_sub(4),
        height,
    )
    .intersection(area)
}
