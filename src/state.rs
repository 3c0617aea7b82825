//! Application state types for the interactive viewer.
//!
//! Contains the input-mode enum and the UI-side state that lives outside the
//! view engine (input buffer, status line, header selection).

use crate::export::ExportFormat;

/// Application mode for handling different input states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppMode {
    Normal,         // Regular table navigation
    SearchInput,    // '/' pressed, entering search term
    ExportFormat,   // 'E' pressed, selecting export format (CSV/JSON)
    ExportFilename, // Format selected, entering filename
}

/// Mutable UI state owned by the event loop, separate from the view engine.
#[derive(Debug)]
pub struct UiState {
    /// Current input mode
    pub mode: AppMode,
    /// Text buffer for search / filename input
    pub input_buffer: String,
    /// One-line status message shown until the next key press
    pub status_message: Option<String>,
    /// Index of the selected header column (sort target)
    pub selected_col: usize,
    /// Export format chosen in the format prompt
    pub export_format: Option<ExportFormat>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            selected_col: 0,
            export_format: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
