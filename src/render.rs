//! Table rendering for the terminal UI.
//!
//! A thin adapter over the view engine: every function here consumes a
//! pre-derived [`Snapshot`] and turns it into widgets. No view state is
//! derived in this module.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::paginate::PageToken;
use crate::snapshot::{HeaderCell, Snapshot};
use crate::sort::SortDirection;
use crate::state::{AppMode, UiState};

/// Header display text with the sort indicator appended.
pub fn header_text(cell: &HeaderCell) -> String {
    match cell.sort {
        Some(SortDirection::Ascending) => format!("{} ▲", cell.label),
        Some(SortDirection::Descending) => format!("{} ▼", cell.label),
        None => cell.label.clone(),
    }
}

/// Calculate column widths sized to fit the widest content.
pub(crate) fn calculate_widths(snapshot: &Snapshot) -> Vec<Constraint> {
    let num_cols = snapshot.headers.len();
    let mut widths = vec![0usize; num_cols];

    for (i, header) in snapshot.headers.iter().enumerate() {
        widths[i] = widths[i].max(header_text(header).chars().count());
    }

    for row in &snapshot.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    // Add 1 for padding
    widths
        .iter()
        .map(|w| Constraint::Length((*w + 1) as u16))
        .collect()
}

/// Build the pagination strip, e.g. `◀ 1 … 3 4 [5] 6 7 … 10 ▶`.
///
/// Empty when there is at most one page; the caption still shows counts.
pub fn build_pagination_line(snapshot: &Snapshot) -> String {
    if snapshot.page_tokens.is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();
    parts.push(if snapshot.prev.enabled { "◀" } else { " " }.to_string());
    for token in &snapshot.page_tokens {
        match token {
            PageToken::Page(p) if *p == snapshot.current_page => parts.push(format!("[{}]", p)),
            PageToken::Page(p) => parts.push(p.to_string()),
            PageToken::Ellipsis => parts.push("…".to_string()),
        }
    }
    parts.push(if snapshot.next.enabled { "▶" } else { " " }.to_string());
    parts.join(" ")
}

/// Context-appropriate controls hint string.
pub fn build_controls_hint(mode: AppMode, show_search: bool) -> String {
    match mode {
        AppMode::Normal => {
            let search = if show_search { "/: search, " } else { "" };
            format!(
                "{}h/l: column, s: sort, n/p: page, 1-9: jump, E: export, R: reload, q: quit",
                search
            )
        }
        AppMode::SearchInput => "Enter: apply, Esc: cancel".to_string(),
        AppMode::ExportFormat | AppMode::ExportFilename => "Esc: cancel".to_string(),
    }
}

/// Render the table pane (or the empty placeholder) with caption and
/// pagination strip.
fn render_table(frame: &mut Frame, area: Rect, snapshot: &Snapshot, ui: &UiState) {
    let search_info = if !snapshot.search_term.is_empty() {
        format!(" /{}", snapshot.search_term)
    } else {
        String::new()
    };
    let title = format!(" Table{} ", search_info);

    let block = Block::default().title(title).borders(Borders::ALL);

    if snapshot.is_empty() {
        let placeholder = Paragraph::new("No matching entries")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    // Header row: bold, selected sort target reversed
    let header_cells: Vec<Cell> = snapshot
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if i == ui.selected_col && h.sortable {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(header_text(h)).style(style)
        })
        .collect();
    let header_row = Row::new(header_cells).style(Style::default().fg(Color::Yellow));

    let data_rows: Vec<Row> = snapshot
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))))
        .collect();

    let widths = calculate_widths(snapshot);
    let table = Table::new(data_rows, widths).header(header_row).block(block);

    frame.render_widget(table, area);
}

/// Render the caption + pagination strip line.
fn render_footer(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let pagination = build_pagination_line(snapshot);
    let text = if pagination.is_empty() {
        snapshot.caption()
    } else {
        format!("{}   {}", snapshot.caption(), pagination)
    };
    let footer = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}

/// Render input bar for search/export modes, or the status/hint line.
fn render_input_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot, ui: &UiState) {
    let (text, style) = match ui.mode {
        AppMode::SearchInput => (
            format!("/{}", ui.input_buffer),
            Style::default().fg(Color::Yellow),
        ),
        AppMode::ExportFormat => (
            "Export format: [C]SV or [J]SON (Esc to cancel)".to_string(),
            Style::default().fg(Color::Green),
        ),
        AppMode::ExportFilename => (
            format!("Save as: {}", ui.input_buffer),
            Style::default().fg(Color::Green),
        ),
        AppMode::Normal => match &ui.status_message {
            Some(msg) => (msg.clone(), Style::default().fg(Color::Cyan)),
            None => (
                build_controls_hint(ui.mode, snapshot.show_search),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    let widget = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Draw one frame from the snapshot and UI state.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, ui: &UiState) {
    let layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    render_table(frame, layout[0], snapshot, ui);
    render_footer(frame, layout[1], snapshot);
    render_input_bar(frame, layout[2], snapshot, ui);
}
