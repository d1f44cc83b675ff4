use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::app::{App, HitAreas};

const TOGGLE_WIDTH: u16 = 3;

/// Render the widget and record its hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // input
            Constraint::Min(0),    // dropdown
            Constraint::Length(1), // status bar
        ])
        .split(size);

    let mut hits = HitAreas {
        input: main_layout[1],
        ..HitAreas::default()
    };

    render_header(frame, app, main_layout[0]);
    render_input(frame, app, main_layout[1], &mut hits);
    render_dropdown(frame, app, main_layout[2], &mut hits);
    render_status_bar(frame, app, main_layout[3]);

    app.hits = hits;
}

// ─── Header ────────────────────────────────────────────────

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " rolodex ",
            Style::default()
                .fg(app.theme.bg())
                .bg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", trigger_label(app)),
            Style::default().fg(app.theme.muted()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn trigger_label(app: &App) -> &'static str {
    if app.has_toggle_button() {
        "type or press Tab to browse"
    } else {
        "type to search"
    }
}

// ─── Input ─────────────────────────────────────────────────

fn render_input(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitAreas) {
    let border = if app.focused {
        app.theme.focused_border()
    } else {
        app.theme.muted()
    };
    let block = Block::default()
        .title(" Person ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(app.theme.bg()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut text_area = inner;
    if app.has_toggle_button() && inner.width > TOGGLE_WIDTH {
        text_area.width -= TOGGLE_WIDTH;
        let toggle = Rect {
            x: inner.x + text_area.width,
            y: inner.y,
            width: TOGGLE_WIDTH,
            height: 1,
        };
        let glyph = if app.autocomplete.is_open() { "[▴]" } else { "[▾]" };
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(app.theme.frost_blue()))),
            toggle,
        );
        hits.toggle = Some(toggle);
    }

    let line = if app.input.value.is_empty() {
        Line::from(Span::styled(
            app.config.widget.placeholder.clone(),
            Style::default().fg(app.theme.muted()).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let color = if app.selection().is_some() {
            app.theme.green()
        } else {
            app.theme.fg()
        };
        Line::from(Span::styled(app.input.value.clone(), Style::default().fg(color)))
    };
    frame.render_widget(Paragraph::new(line), text_area);

    if app.focused && text_area.width > 0 {
        let col = (app.input.cursor_column() as u16).min(text_area.width - 1);
        frame.set_cursor_position((text_area.x + col, text_area.y));
    }
}

// ─── Dropdown ──────────────────────────────────────────────

fn render_dropdown(frame: &mut Frame, app: &mut App, area: Rect, hits: &mut HitAreas) {
    if !app.autocomplete.is_open() || area.height < 3 {
        return;
    }

    let count = app.autocomplete.candidates().len();
    let max_rows = app.config.ui.max_visible_rows as usize;
    let visible = count.min(max_rows).min(area.height as usize - 2);
    app.clamp_scroll(visible);

    let drop_area = Rect {
        height: visible as u16 + 2,
        ..area
    };
    frame.render_widget(Clear, drop_area);

    let title = if count > visible {
        format!(" {}-{} of {count} ", app.scroll + 1, app.scroll + visible)
    } else {
        format!(" {count} ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.frost_blue()))
        .style(Style::default().bg(app.theme.bg_secondary()));
    let inner = block.inner(drop_area);

    let show_avatars = app.config.ui.show_avatars;
    let mut items = Vec::with_capacity(visible);
    for (offset, row) in app.autocomplete.rows().skip(app.scroll).take(visible).enumerate() {
        let row_area = Rect {
            y: inner.y + offset as u16,
            height: 1,
            ..inner
        };
        hits.rows.push((row_area, row.index));

        let style = if row.active {
            Style::default()
                .bg(app.theme.active_row_bg())
                .fg(app.theme.active_row_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg())
        };

        let mut spans = Vec::new();
        if show_avatars {
            spans.push(Span::styled(
                format!(" {:<2} ", initials(&row.value)),
                Style::default().fg(app.theme.frost_blue()).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(format!(" {} ", row.value), style));
        items.push(ListItem::new(Line::from(spans)));
    }

    frame.render_widget(List::new(items).block(block), drop_area);
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

// ─── Status bar ────────────────────────────────────────────

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left = if app.is_loading() {
        Span::styled(" loading people… ", Style::default().fg(app.theme.yellow()))
    } else {
        Span::styled(
            format!(" {} people ", app.autocomplete.pool().len()),
            Style::default().fg(app.theme.muted()),
        )
    };
    let hint = Span::styled(
        "↑/↓ move  Enter select  Esc close/quit",
        Style::default().fg(app.theme.muted()).add_modifier(Modifier::DIM),
    );
    frame.render_widget(Paragraph::new(Line::from(vec![left, hint])), area);
}
