//! Keyboard input handlers for the interactive viewer.
//!
//! Contains handler functions for different application modes and the
//! KeyAction enum to represent the result of handling a key event. Handlers
//! translate key presses into view-engine transitions; they never derive
//! view state themselves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export::{self, ExportFormat};
use crate::state::{AppMode, UiState};
use crate::view::TableView;

/// Result of handling a key event.
/// Tells the main loop what action to take after the handler returns.
#[derive(Debug)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Exit the application
    Quit,
    /// Display a status message
    StatusMessage(String),
    /// Change input mode
    ModeChange(AppMode),
    /// Re-read the input file and replace the view's data
    Reload,
}

/// Indices of columns that carry a sort affordance.
fn sortable_indices(view: &TableView) -> Vec<usize> {
    view.columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.skip_filter)
        .map(|(i, _)| i)
        .collect()
}

/// Handle key events in normal mode.
pub fn handle_normal_mode(
    key: &KeyEvent,
    view: &mut TableView,
    ui: &mut UiState,
    can_reload: bool,
) -> KeyAction {
    match key.code {
        // Quit on 'q' or Ctrl+C
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Enter search input mode, pre-filled with the active term
        KeyCode::Char('/') => {
            ui.input_buffer = view.search_term().to_string();
            KeyAction::ModeChange(AppMode::SearchInput)
        }

        // Esc: clear an active search
        KeyCode::Esc => {
            if !view.search_term().is_empty() {
                view.set_search_term("");
                KeyAction::StatusMessage("Search cleared".to_string())
            } else {
                KeyAction::None
            }
        }

        // Header selection among sortable columns
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(&prev) = sortable_indices(view)
                .iter()
                .rev()
                .find(|&&i| i < ui.selected_col)
            {
                ui.selected_col = prev;
            }
            KeyAction::None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(&next) = sortable_indices(view).iter().find(|&&i| i > ui.selected_col) {
                ui.selected_col = next;
            }
            KeyAction::None
        }

        // Sort by the selected header (toggles on repeat)
        KeyCode::Char('s') | KeyCode::Enter => {
            let Some((key_name, label)) = view
                .columns()
                .get(ui.selected_col)
                .map(|c| (c.key.clone(), c.label.clone()))
            else {
                return KeyAction::None;
            };
            if view.is_sortable(&key_name) {
                view.set_sort(&key_name);
                KeyAction::None
            } else {
                KeyAction::StatusMessage(format!("Column '{}' is not sortable", label))
            }
        }

        // Page navigation; boundary keys are inert, mirroring disabled controls
        KeyCode::Char('n') | KeyCode::PageDown => {
            if view.current_page() < view.total_pages() {
                let page = view.current_page() + 1;
                view.set_page(page);
            }
            KeyAction::None
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            if view.current_page() > 1 {
                let page = view.current_page() - 1;
                view.set_page(page);
            }
            KeyAction::None
        }
        KeyCode::Char('g') | KeyCode::Home => {
            view.set_page(1);
            KeyAction::None
        }
        KeyCode::Char('G') | KeyCode::End => {
            let last = view.total_pages().max(1);
            view.set_page(last);
            KeyAction::None
        }

        // Direct page selection with number keys 1-9
        KeyCode::Char(c @ '1'..='9') => {
            let page = (c as usize) - ('0' as usize);
            if page <= view.total_pages() {
                view.set_page(page);
            }
            KeyAction::None
        }

        // Export the current view (E key)
        KeyCode::Char('E') => KeyAction::ModeChange(AppMode::ExportFormat),

        // Reload input file with R (uppercase)
        KeyCode::Char('R') => {
            if can_reload {
                KeyAction::Reload
            } else {
                KeyAction::StatusMessage("Reload requires a file argument".to_string())
            }
        }

        _ => KeyAction::None,
    }
}

/// Handle key events in search input mode.
///
/// Returns bool indicating whether to return to Normal mode.
pub fn handle_search_input(key: &KeyEvent, input_buffer: &mut String, view: &mut TableView) -> bool {
    match key.code {
        // Cancel and return to normal mode
        KeyCode::Esc => {
            input_buffer.clear();
            true
        }

        // Apply search and return to normal mode
        KeyCode::Enter => {
            view.set_search_term(input_buffer.trim());
            input_buffer.clear();
            true
        }

        // Text input
        KeyCode::Char(c) => {
            input_buffer.push(c);
            false
        }

        // Backspace
        KeyCode::Backspace => {
            input_buffer.pop();
            false
        }

        _ => false,
    }
}

/// Handle key events in export format selection mode.
///
/// Returns Option<AppMode> for the next mode:
/// - None = stay in current mode
/// - Some(Normal) = cancel
/// - Some(ExportFilename) = proceed to filename input
pub fn handle_export_format(
    key: &KeyEvent,
    export_format: &mut Option<ExportFormat>,
    input_buffer: &mut String,
) -> Option<AppMode> {
    match key.code {
        // Cancel and return to normal mode
        KeyCode::Esc => Some(AppMode::Normal),

        // Select CSV format
        KeyCode::Char('c') | KeyCode::Char('C') => {
            *export_format = Some(ExportFormat::Csv);
            *input_buffer = "export.csv".to_string();
            Some(AppMode::ExportFilename)
        }

        // Select JSON format
        KeyCode::Char('j') | KeyCode::Char('J') => {
            *export_format = Some(ExportFormat::Json);
            *input_buffer = "export.json".to_string();
            Some(AppMode::ExportFilename)
        }

        _ => None,
    }
}

/// Handle key events in export filename input mode.
///
/// Returns (Option<String>, bool) where:
/// - Option<String> is a status message (success or error)
/// - bool indicates whether we're done (return to Normal mode)
pub fn handle_export_filename(
    key: &KeyEvent,
    input_buffer: &mut String,
    export_format: Option<ExportFormat>,
    view: &TableView,
) -> (Option<String>, bool) {
    match key.code {
        // Cancel and return to normal mode
        KeyCode::Esc => {
            input_buffer.clear();
            (None, true)
        }

        // Perform export over the filtered, sorted view
        KeyCode::Enter => {
            let filename = input_buffer.trim().to_string();
            if !filename.is_empty() {
                if let Some(fmt) = export_format {
                    match export::export_view(view.columns(), view.filtered_records(), fmt) {
                        Ok(content) => match export::save_to_file(&content, &filename) {
                            Ok(()) => {
                                input_buffer.clear();
                                return (Some(format!("Exported to {}", filename)), true);
                            }
                            Err(e) => {
                                input_buffer.clear();
                                return (Some(e), true);
                            }
                        },
                        Err(e) => {
                            input_buffer.clear();
                            return (Some(e), true);
                        }
                    }
                }
            }
            input_buffer.clear();
            (None, true)
        }

        // Text input
        KeyCode::Char(c) => {
            input_buffer.push(c);
            (None, false)
        }

        // Backspace
        KeyCode::Backspace => {
            input_buffer.pop();
            (None, false)
        }

        _ => (None, false),
    }
}
