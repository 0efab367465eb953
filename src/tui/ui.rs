// UI rendering logic
//
// All rendering for the TUI lives here. The layout is a title bar, the
// animated list, an optional logs panel, and a status bar. The list is
// drawn row by row from its scroll offset so the smooth-scroll animation
// shows sub-item motion as it settles.

use super::app::App;
use crate::config::VERSION;
use crate::logging::LogLevel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let logs_height = if app.show_logs { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title bar
            Constraint::Min(5),              // Animated list
            Constraint::Length(logs_height), // Logs panel (collapsible)
            Constraint::Length(3),           // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0], app);
    render_list(f, chunks[1], app);
    if app.show_logs {
        render_logs_panel(f, chunks[2], app);
    }
    render_status(f, chunks[3], app);
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let set = if app.generation > 0 {
        format!("  ·  set {}", app.generation)
    } else {
        String::new()
    };
    let title = Line::from(vec![
        Span::styled(
            " glide ",
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" v{VERSION}  ·  {} tracks{set}", app.list.len())),
    ]);
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(title).block(block), area);
}

/// Render the animated list: items, selection highlight, entrance state,
/// edge fades, and scrollbar
fn render_list(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title(" tracks ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Resize feeds the list each frame; the max-height cap applies inside
    app.list.set_viewport(inner.height as f32);
    app.list_area = inner;

    if app.list.is_empty() || inner.height == 0 {
        return;
    }

    let selected = app.list.selected();
    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for row in 0..inner.height {
        let line = match app.list.index_at_view_y(row as f32) {
            Some(index) => {
                let text = truncate(&app.list.items()[index], inner.width.saturating_sub(2) as usize);
                if selected == Some(index) {
                    Line::from(Span::styled(
                        format!("▸ {text}"),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else if app.list.is_visible(index) {
                    Line::from(Span::styled(
                        format!("  {text}"),
                        Style::default().fg(Color::White),
                    ))
                } else {
                    // Pre-appearance state: observed out of the margin
                    // region, rendered dim until it scrolls near
                    Line::from(Span::styled(
                        format!("  {text}"),
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                    ))
                }
            }
            None => Line::default(),
        };
        lines.push(line);
    }
    f.render_widget(Paragraph::new(lines), inner);

    if app.list.options().show_edge_fades {
        render_fades(f, inner, app);
    }
    if app.list.options().show_scrollbar {
        render_scrollbar(f, area, app);
    }
}

/// Overlay the top/bottom fade rules, colored by fade strength
fn render_fades(f: &mut Frame, inner: Rect, app: &App) {
    let fades = app.list.fades();
    if inner.height < 2 {
        return;
    }

    if fades.top > 0.0 {
        let rect = Rect::new(inner.x, inner.y, inner.width, 1);
        f.render_widget(fade_rule("▔", fades.top, inner.width), rect);
    }
    if fades.bottom > 0.0 {
        let rect = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        f.render_widget(fade_rule("▁", fades.bottom, inner.width), rect);
    }
}

fn fade_rule(glyph: &str, opacity: f32, width: u16) -> Paragraph<'static> {
    // Three-step approximation of the opacity ramp
    let color = if opacity >= 0.66 {
        Color::Gray
    } else if opacity >= 0.33 {
        Color::DarkGray
    } else {
        Color::Black
    };
    Paragraph::new(glyph.repeat(width as usize)).style(Style::default().fg(color))
}

/// Render a vertical scrollbar when the content overflows the viewport
fn render_scrollbar(f: &mut Frame, area: Rect, app: &App) {
    let pane = app.list.pane();
    if !pane.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);

    // ScrollbarState wants: content_length (how much can scroll) and position
    let content_length = (pane.content_height() - pane.view_height()).max(0.0).ceil() as usize;
    let position = (pane.scroll_top().round() as usize).min(content_length);
    let mut state = ScrollbarState::new(content_length).position(position);

    f.render_stateful_widget(scrollbar, area, &mut state);
}

fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" logs (l to hide) ");
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = app
        .log_buffer
        .recent(inner_height)
        .into_iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => Color::Red,
                LogLevel::Warn => Color::Yellow,
                LogLevel::Info => Color::Green,
                LogLevel::Debug => Color::Cyan,
                LogLevel::Trace => Color::DarkGray,
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::raw(entry.message),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.list.selected() {
        Some(i) => format!("#{i}"),
        None => "-".to_string(),
    };
    let activated = match app.last_activated.lock().unwrap().clone() {
        Some((item, index)) => format!("{item} (#{index})"),
        None => "none yet".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " ↑↓/Tab navigate · Enter select · wheel scroll · l logs · q quit ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(
            "│ sel {selected} │ played: {activated} │ up {}s",
            app.uptime_secs()
        )),
    ]);
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("a very long track title", 8), "a very …");
    }

    #[test]
    fn test_truncate_handles_wide_chars() {
        // CJK characters are two columns wide
        let cut = truncate("日本語のタイトル", 7);
        assert!(cut.ends_with('…'));
        let w: usize = cut.chars().map(|c| c.width().unwrap_or(0)).sum();
        assert!(w <= 7);
    }
}
