//! Shared layout and overlay helpers for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const MIN_FIELD_COLS: u16 = 20;
const MIN_FIELD_ROWS: u16 = 10;

/// Screen regions for one frame.
pub struct ScreenLayout {
    /// Playfield region, left of the side panel.
    pub content: Rect,
    /// Two rows under the playfield: status text, then key hints.
    pub status_bar: Rect,
    /// Bordered side panel.
    pub info_panel: Rect,
}

/// Split `area` into playfield, status rows and side panel inside a
/// titled frame.
///
/// ```text
/// ┌ title ──────────────────────┬ Info ─────┐
/// │ playfield                   │ panel     │
/// │ status / key hints          │           │
/// └─────────────────────────────┴───────────┘
/// ```
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    panel_width: u16,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(MIN_FIELD_COLS), Constraint::Length(panel_width)])
        .split(inner);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MIN_FIELD_ROWS), Constraint::Length(2)])
        .split(columns[0]);

    ScreenLayout {
        content: left[0],
        status_bar: left[1],
        info_panel: columns[1],
    }
}

/// Largest centred sub-area that shows a `world_w` x `world_h` world
/// without distortion, assuming terminal cells are twice as tall as wide.
pub fn fit_aspect(area: Rect, world_w: f64, world_h: f64) -> Rect {
    if area.width == 0 || area.height == 0 || world_w <= 0.0 || world_h <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    // cols per row that keeps the world's aspect ratio
    let cols_per_row = 2.0 * world_w / world_h;
    let mut rows = area.height;
    let mut cols = (rows as f64 * cols_per_row).round() as u16;
    if cols > area.width {
        cols = area.width;
        rows = ((cols as f64 / cols_per_row).round() as u16).clamp(1, area.height);
    }
    Rect::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols.max(1),
        rows,
    )
}

/// Text and key hints shown under the playfield.
pub struct StatusLine<'a> {
    pub message: String,
    pub color: Color,
    pub keys: &'a [(&'a str, &'a str)],
}

/// Draw the status message centred on the first row and the key hints
/// on the second.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &StatusLine<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(status.message.as_str())
            .style(Style::default().fg(status.color))
            .alignment(Alignment::Center),
        rows[0],
    );

    let hints: Vec<Span> = status
        .keys
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        rows[1],
    );
}

/// Draw the side panel border; returns the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let panel = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);
    inner
}

/// Render a rounded box centred horizontally at row `y`, sized to fit its
/// lines. The area under the box is cleared first.
pub fn render_message_box(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    lines: Vec<Line<'_>>,
    background: Color,
    border_color: Color,
) {
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = (content_width + 4).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    if width < 3 || height < 3 || y >= area.y + area.height {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = y.min(area.y + area.height - height);
    let box_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(background));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let text = Paragraph::new(lines)
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_aspect_height_bound() {
        // 400x600 world: 4 columns per 3 rows.
        let fitted = fit_aspect(Rect::new(0, 0, 100, 30), 400.0, 600.0);
        assert_eq!(fitted.height, 30);
        assert_eq!(fitted.width, 40);
        assert_eq!(fitted.x, 30);
        assert_eq!(fitted.y, 0);
    }

    #[test]
    fn test_fit_aspect_width_bound() {
        let fitted = fit_aspect(Rect::new(2, 1, 20, 40), 400.0, 600.0);
        assert_eq!(fitted.width, 20);
        assert_eq!(fitted.height, 15);
        assert_eq!(fitted.x, 2);
        assert_eq!(fitted.y, 1 + 12);
    }

    #[test]
    fn test_fit_aspect_empty_area() {
        let fitted = fit_aspect(Rect::new(5, 5, 0, 10), 400.0, 600.0);
        assert_eq!(fitted.width, 0);
        assert_eq!(fitted.height, 0);
    }
}
