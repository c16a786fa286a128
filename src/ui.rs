//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Mode, Prompt};
use crate::config::UiSettings;
use crate::grid::{COLUMNS, ColumnKind, column_count};

/// Background tint for rows with unsaved changes.
const DIRTY_ROW_BG: Color = Color::Rgb(80, 72, 30);

/// Render the controls help text.
fn controls_text() -> String {
    let pairs = [
        ("arrows", "move"),
        ("shift+arrows", "extend"),
        ("type/F2", "edit cell"),
        ("enter", "commit + next row"),
        ("tab", "next field"),
        ("ctrl+s", "save"),
        ("ctrl+c/v", "copy/paste"),
        ("del", "clear cells"),
        ("ctrl+o", "add files"),
        ("ctrl+g", "cover from file"),
        ("ctrl+x", "clear grid"),
        ("ctrl+q", "quit"),
    ];
    pairs
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Text shown inside one grid cell.
fn cell_text(app: &App, row: usize, col: usize) -> String {
    // The open editor shadows the stored value of the cursor cell.
    if let Mode::Edit { buffer } = &app.mode {
        if app.cursor == Some(crate::nav::Cursor::new(row, col)) {
            return format!("{}_", buffer);
        }
    }

    match COLUMNS[col].kind {
        ColumnKind::Artwork => {
            let has = app.store.track(row).map(|t| t.has_cover()).unwrap_or(false);
            if has { "[img]".to_string() } else { String::new() }
        }
        _ => app.store.display_text(row, col),
    }
}

fn cell_style(app: &App, row: usize, col: usize) -> Style {
    let mut style = Style::default();
    if app.cursor == Some(crate::nav::Cursor::new(row, col)) {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    } else if app.selection.contains(row, col) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Build the visible window of table rows, keeping the cursor row on
/// screen. Only visible rows get Cells allocated.
fn grid_rows<'a>(app: &'a App, area_height: usize, ui: &UiSettings) -> Vec<Row<'a>> {
    let total = app.store.row_count();
    // One line for the header row inside the table area.
    let visible = area_height.saturating_sub(1).max(1);
    let cur_row = app.cursor.map(|c| c.row).unwrap_or(0);

    let (start, end) = if total <= visible {
        (0, total)
    } else {
        let half = visible / 2;
        let mut start = cur_row.saturating_sub(half);
        if start + visible > total {
            start = total - visible;
        }
        (start, start + visible)
    };

    (start..end)
        .map(|row| {
            let cells: Vec<Cell> = (0..column_count())
                .map(|col| Cell::from(cell_text(app, row, col)).style(cell_style(app, row, col)))
                .collect();
            let dirty = app.store.track(row).map(|t| t.dirty).unwrap_or(false);
            let mut r = Row::new(cells);
            if dirty && ui.highlight_dirty {
                r = r.style(Style::default().bg(DIRTY_ROW_BG));
            }
            r
        })
        .collect()
}

/// Render an input or confirmation prompt as a popup over the grid.
fn draw_prompt(frame: &mut Frame, app: &App, prompt: &Prompt, grid_area: Rect) {
    let (title, body) = match prompt {
        Prompt::AddPath { buffer } => (" add files ", format!("Path: {}_", buffer)),
        Prompt::CoverPath { buffer } => (" cover image ", format!("Image path: {}_", buffer)),
        Prompt::ConfirmClear => (
            " clear grid ",
            format!(
                "Discard {} unsaved change(s) and clear? (y/n)",
                app.modified_count()
            ),
        ),
        Prompt::ConfirmQuit => (
            " quit ",
            format!(
                "Discard {} unsaved change(s) and quit? (y/n)",
                app.modified_count()
            ),
        ),
    };

    let popup_area = centered_rect_sized(64, 3, grid_area);
    frame.render_widget(Clear, popup_area);
    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let footer_height = if ui_settings.show_controls { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" taggrid ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();
        let (rows, _) = app.dimensions();
        parts.push(format!("Tracks: {}", rows));

        let modified = app.modified_count();
        if modified > 0 {
            parts.push(format!("Unsaved: {}", modified));
        }
        if let Some(cur) = app.cursor {
            parts.push(format!("Cell: {}:{}", cur.row + 1, COLUMNS[cur.col].label));
        }
        if matches!(app.mode, Mode::Edit { .. }) {
            parts.push("EDITING".to_string());
        }
        if let Some(msg) = &app.status {
            parts.push(msg.clone());
        }
        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // The grid itself
    {
        let grid_area = chunks[2];
        let inner_height = grid_area.height.saturating_sub(2) as usize;
        let rows = grid_rows(app, inner_height, ui_settings);

        let header_row = Row::new(
            COLUMNS
                .iter()
                .map(|c| Cell::from(c.label).style(Style::default().add_modifier(Modifier::BOLD))),
        );

        let widths: Vec<Constraint> = COLUMNS
            .iter()
            .map(|c| match c.kind {
                ColumnKind::Identity => Constraint::Min(18),
                ColumnKind::Artwork => Constraint::Length(6),
                ColumnKind::Text(_) => Constraint::Min(8),
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header_row)
            .column_spacing(1)
            .block(Block::default().borders(Borders::ALL).title(" tracks "));
        frame.render_widget(table, grid_area);

        if let Mode::Prompt(prompt) = &app.mode {
            draw_prompt(frame, app, prompt, grid_area);
        }
    }

    if ui_settings.show_controls {
        let footer = Paragraph::new(controls_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[3]);
    }
}
