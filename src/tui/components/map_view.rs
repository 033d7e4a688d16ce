//! # MapView Component
//!
//! Renders a `MapRegion` and its markers on a braille `Canvas`.
//!
//! ```text
//! ┌ Mapa ────────────────────────────────┐
//! │   ·   world outline (when in view)   │
//! │ ┼───────┼───────┼───────┼            │  coordinate grid, region / 4
//! │         ● Tu ubicación               │  marker + title
//! └ Lat: 19.432608, Lng: -99.133209 ─────┘  marker description
//! ```
//!
//! Canvas x is longitude and y is latitude, so the region bounds map
//! straight onto `x_bounds` / `y_bounds`. The world outline is ratatui's
//! built-in high-resolution map; at street-level spans it usually falls outside
//! the view and only the grid shows.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution, Points};

use crate::core::presenter::{MapMarker, MapRegion};
use crate::tui::component::Component;
use crate::tui::components::control_button::tint_color;

const GRID_DIVISIONS: u32 = 4;

pub struct MapView<'a> {
    pub region: MapRegion,
    pub markers: &'a [MapMarker],
}

impl<'a> MapView<'a> {
    pub fn new(region: MapRegion, markers: &'a [MapMarker]) -> Self {
        Self { region, markers }
    }
}

/// Evenly spaced meridians and parallels across the region, edges included.
pub fn grid_lines(region: &MapRegion, divisions: u32) -> Vec<CanvasLine> {
    let [west, east] = region.longitude_bounds();
    let [south, north] = region.latitude_bounds();
    let step_x = (east - west) / divisions as f64;
    let step_y = (north - south) / divisions as f64;
    let color = Color::Rgb(60, 60, 60);

    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));
    for i in 0..=divisions {
        let x = west + step_x * i as f64;
        lines.push(CanvasLine::new(x, south, x, north, color));
    }
    for i in 0..=divisions {
        let y = south + step_y * i as f64;
        lines.push(CanvasLine::new(west, y, east, y, color));
    }
    lines
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let grid = grid_lines(&self.region, GRID_DIVISIONS);
        let markers = self.markers;

        let mut block = Block::bordered()
            .title(" Mapa ")
            .border_style(Style::default().fg(Color::DarkGray));
        if let Some(first) = markers.first() {
            block = block.title_bottom(Line::from(format!(" {} ", first.description)).centered());
        }

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(self.region.longitude_bounds())
            .y_bounds(self.region.latitude_bounds())
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: Color::Green,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                for line in &grid {
                    ctx.draw(line);
                }
                ctx.layer();
                for marker in markers {
                    let color = tint_color(marker.tint);
                    let point = (marker.coordinate.longitude, marker.coordinate.latitude);
                    ctx.draw(&Points {
                        coords: &[point],
                        color,
                    });
                    ctx.print(
                        point.0,
                        point.1,
                        Span::styled(
                            format!("● {}", marker.title),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
