use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use giasmus::config::Config;
use giasmus::editor::Editor;
use giasmus::logging;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A minimal terminal text editor with chiasmus tools
#[derive(Parser, Debug)]
#[command(name = "giasmus")]
#[command(about = "A terminal text editor with chiasmation support", long_about = None)]
#[command(version)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = load_config(&args)?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init_global(&log_file) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    tracing::info!("Editor starting");

    let config = load_config(&args)?;

    let terminal = ratatui::init();
    let size = terminal.size().context("Failed to query terminal size")?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    let mut editor = Editor::new(config, size.width, size.height);
    if let Some(path) = &args.file {
        editor.open_file(path);
    }

    let result = run_event_loop(&mut editor, terminal);
    ratatui::restore();
    result
}

/// Main event loop: frame-capped redraw-on-dirty with polled input.
fn run_event_loop(editor: &mut Editor, mut terminal: DefaultTerminal) -> Result<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16);
    terminal.draw(|frame| editor.render(frame))?;
    let mut last_render = Instant::now();
    let mut needs_render = false;

    loop {
        if editor.should_quit() {
            tracing::info!("Editor quitting");
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| editor.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(50)
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    tracing::trace!(
                        "Key event: code={:?}, modifiers={:?}",
                        key_event.code,
                        key_event.modifiers
                    );
                    editor.handle_key(key_event.code, key_event.modifiers)?;
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(w, h) => {
                editor.resize(w, h);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
