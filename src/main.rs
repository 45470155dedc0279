use clap::Parser;
use selection_pointer::config::Config;
use selection_pointer::core::{Buffer, SelectionPointerOption};
use selection_pointer::logging::Fallback;
use selection_pointer::tui::TerminalEditor;
use selection_pointer::{gui, logging};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

/// Text viewer that shows a drag pointer while hovering a selection.
#[derive(Parser, Debug)]
#[command(name = "selpointer", version)]
struct Args {
    /// File to open
    file: Option<PathBuf>,

    /// Open the GUI instead of the terminal frontend
    #[arg(long)]
    gui: bool,

    /// Pointer over a selection: false, true or a cursor style name
    #[arg(long, value_name = "false|true|STYLE")]
    pointer: Option<SelectionPointerOption>,

    /// Debounce delay before the pointer is re-evaluated
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Config file (defaults to ~/.selection-pointer/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    // the terminal frontend owns the screen, so it never logs to stderr
    let fallback = if args.gui {
        Fallback::Stderr
    } else {
        Fallback::Discard
    };
    logging::init(&Config::app_dir(), args.verbose, fallback);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> selection_pointer::Result<()> {
    let config_path = args.config.unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?.with_overrides(args.pointer, args.delay_ms);
    let delay = config.debounce();
    let option = config.selection_pointer;

    let (buffer, filename) = match args.file {
        Some(path) => {
            let name = path.display().to_string();
            match fs::read_to_string(&path) {
                Ok(content) => (Buffer::from_string(&content), Some(name)),
                Err(error) => {
                    warn!(%error, path = %name, "could not open file, showing welcome text");
                    (Buffer::welcome(), None)
                }
            }
        }
        None => (Buffer::welcome(), None),
    };

    if args.gui {
        gui::run(buffer, filename, option, delay)
    } else {
        let mut editor = TerminalEditor::new(buffer, option, delay);
        if let Some(name) = filename {
            editor.set_filename(name);
        }
        editor.run()
    }
}
