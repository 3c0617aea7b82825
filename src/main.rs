use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use simplelog::WriteLogger;

use paged_table_viewer::column::ColumnSpec;
use paged_table_viewer::handlers::{self, KeyAction};
use paged_table_viewer::loader::{self, InputFormat, LoadError};
use paged_table_viewer::record::Record;
use paged_table_viewer::render;
use paged_table_viewer::sort::{SortDirection, SortState};
use paged_table_viewer::state::{AppMode, UiState};
use paged_table_viewer::view::{TableView, ViewOptions, DEFAULT_PAGE_SIZE};

/// Interactive paginated table viewer for CSV and JSON data.
#[derive(Parser)]
#[command(name = "ptv", version, about)]
struct Args {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Input format (inferred from the content when omitted)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Initial sort column (defaults to the first column)
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending initially
    #[arg(long)]
    desc: bool,

    /// Hide the search affordance
    #[arg(long)]
    no_search: bool,

    /// Print the first snapshot as JSON and exit (non-interactive)
    #[arg(long)]
    json: bool,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

/// Read the whole input: the file argument when given, stdin otherwise.
fn read_input(path: &Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parse the input with the requested or sniffed format.
fn load(
    input: &str,
    format: Option<FormatArg>,
) -> Result<(Vec<ColumnSpec>, Vec<Record>), LoadError> {
    let format = match format {
        Some(FormatArg::Csv) => InputFormat::Csv,
        Some(FormatArg::Json) => InputFormat::Json,
        None => loader::sniff_format(input),
    };
    match format {
        InputFormat::Csv => loader::load_csv(input.as_bytes()),
        InputFormat::Json => loader::load_json(input),
    }
}

/// Initialize the terminal for TUI rendering.
/// Enables raw mode, enters alternate screen, and creates a Terminal instance.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
/// Disables raw mode and leaves alternate screen.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let _ = WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            fs::File::create(path)?,
        );
    }

    // Read and parse input before initializing the TUI
    let input = read_input(&args.file)?;
    let (columns, records) = match load(&input, args.format) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: ptv data.csv, or pipe CSV/JSON on stdin");
            std::process::exit(1);
        }
    };

    let mut options = ViewOptions::new(columns);
    options.data = records;
    options.page_size = args.page_size;
    if args.no_search {
        options.show_search = Some(false);
    }
    if let Some(key) = &args.sort {
        options.sort = Some(SortState {
            key: key.clone(),
            direction: if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });
    } else if args.desc {
        if let Some(first) = options.columns.first() {
            options.sort = Some(SortState {
                key: first.key.clone(),
                direction: SortDirection::Descending,
            });
        }
    }

    let mut view = match TableView::new(options) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut snapshot = view.snapshot();
    info!(
        "loaded {} records across {} columns",
        snapshot.source_items,
        snapshot.headers.len()
    );

    // Non-interactive inspection mode
    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Set up panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;

    let mut ui = UiState::new();
    // Start the header selection on the first sortable column
    ui.selected_col = view
        .columns()
        .iter()
        .position(|c| !c.skip_filter)
        .unwrap_or(0);

    // Main event loop
    loop {
        terminal.draw(|frame| render::draw(frame, &snapshot, &ui))?;

        // Poll with 250ms timeout for responsive feel
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                ui.status_message = None;
                match ui.mode {
                    AppMode::Normal => {
                        let action = handlers::handle_normal_mode(
                            &key,
                            &mut view,
                            &mut ui,
                            args.file.is_some(),
                        );
                        match action {
                            KeyAction::Quit => break,
                            KeyAction::StatusMessage(msg) => ui.status_message = Some(msg),
                            KeyAction::ModeChange(mode) => ui.mode = mode,
                            KeyAction::Reload => {
                                let reloaded = read_input(&args.file)
                                    .map_err(LoadError::Io)
                                    .and_then(|input| load(&input, args.format));
                                match reloaded {
                                    Ok((_, records)) => {
                                        let count = records.len();
                                        view.replace_data(records);
                                        ui.status_message =
                                            Some(format!("Reloaded {} records", count));
                                    }
                                    Err(e) => {
                                        ui.status_message = Some(format!("Reload failed: {}", e));
                                    }
                                }
                            }
                            KeyAction::None => {}
                        }
                    }
                    AppMode::SearchInput => {
                        if handlers::handle_search_input(&key, &mut ui.input_buffer, &mut view) {
                            ui.mode = AppMode::Normal;
                        }
                    }
                    AppMode::ExportFormat => {
                        if let Some(next) = handlers::handle_export_format(
                            &key,
                            &mut ui.export_format,
                            &mut ui.input_buffer,
                        ) {
                            ui.mode = next;
                        }
                    }
                    AppMode::ExportFilename => {
                        let (status, done) = handlers::handle_export_filename(
                            &key,
                            &mut ui.input_buffer,
                            ui.export_format,
                            &view,
                        );
                        if let Some(msg) = status {
                            ui.status_message = Some(msg);
                        }
                        if done {
                            ui.mode = AppMode::Normal;
                        }
                    }
                }
                snapshot = view.snapshot();
            }
        }
    }

    // Clear terminal before exit
    terminal.clear()?;
    restore_terminal(&mut terminal)?;
    Ok(())
}
