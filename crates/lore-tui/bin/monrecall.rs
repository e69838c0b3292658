//! Monster recall viewer
//!
//! Browse recall text in the terminal, print one race, or dump spoilers.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use strum::IntoEnumIterator;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use lore_core::grammar::Language;
use lore_core::lore::{LoreMode, RecallContext, recall_text};
use lore_core::monster::{MonraceId, RaceTable};
use lore_core::player::PlayerClass;
use lore_core::spoiler::write_spoiler_file;
use lore_core::world::LoreOptions;
use lore_tui::App;

/// Monster memory browser
#[derive(Parser, Debug)]
#[command(name = "monrecall")]
#[command(author, version, about = "Recall what your character knows about monsters", long_about = None)]
struct Args {
    /// Race to show first, by index or name
    race: Option<String>,

    /// Recall mode (normal, full, debug)
    #[arg(short = 'm', long = "mode", default_value = "normal")]
    mode: String,

    /// Print the recall for RACE instead of opening the viewer
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Write a spoiler file for every race and exit
    #[arg(short = 's', long = "spoilers")]
    spoilers: Option<PathBuf>,

    /// Options file (OPTIONS=... lines)
    #[arg(long = "options")]
    options: Option<PathBuf>,

    /// Extra option, same syntax as an OPTIONS line entry
    #[arg(short = 'O', long = "option")]
    extra: Vec<String>,

    /// Output language (english, japanese)
    #[arg(short = 'L', long = "language")]
    language: Option<String>,

    /// Class of the viewing character
    #[arg(short = 'c', long = "class")]
    class: Option<String>,

    /// Level of the viewing character
    #[arg(short = 'l', long = "level")]
    level: Option<u8>,

    /// Lore file with monster memory counters
    #[arg(long = "lore-file")]
    lore_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lore=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("monrecall: {msg}");
            std::process::exit(2);
        }
    };
    let Some(mode) = LoreMode::from_name(&args.mode) else {
        let modes: Vec<String> = LoreMode::iter().map(|m| m.to_string()).collect();
        eprintln!("monrecall: unknown mode '{}' (expected one of {})", args.mode, modes.join(", "));
        std::process::exit(2);
    };

    let races = lore_data::race_table();

    if let Some(path) = &args.spoilers {
        return write_spoiler_file(&races, &options, path).map_err(|e| {
            error!(path = %path.display(), "spoiler dump failed: {e}");
            io::Error::other(e.to_string())
        });
    }

    let lore_path = args
        .lore_file
        .clone()
        .unwrap_or_else(lore_save::default_lore_path);
    let book = lore_save::load_or_default(&lore_path).map_err(|e| {
        eprintln!("monrecall: cannot read {}: {e}", lore_path.display());
        io::Error::other(e.to_string())
    })?;
    debug!(known = book.len(), "lore book ready");

    let start = match args.race.as_deref() {
        Some(query) => match resolve_race(&races, query) {
            Some(id) => Some(id),
            None => {
                eprintln!("monrecall: no monster matches '{query}'");
                std::process::exit(1);
            }
        },
        None => None,
    };

    if args.print {
        let Some(id) = start else {
            eprintln!("monrecall: --print needs a race");
            std::process::exit(2);
        };
        let ctx = RecallContext::new(&races, &book, options);
        print!("{}", recall_text(&ctx, id, mode));
        return Ok(());
    }

    let mut app = App::new(races, book, options, mode);
    if let Some(id) = start {
        app.select(id);
    }
    run_viewer(&mut app)
}

/// Options file first, then the individual overrides
fn build_options(args: &Args) -> Result<LoreOptions, String> {
    let mut options = match &args.options {
        Some(path) => LoreOptions::load_from_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => LoreOptions::default(),
    };
    for opt in &args.extra {
        options.parse_option(opt).map_err(|e| e.to_string())?;
    }
    if let Some(name) = &args.language {
        options.language =
            Language::from_name(name).ok_or_else(|| format!("unknown language '{name}'"))?;
    }
    if let Some(name) = &args.class {
        options.class =
            PlayerClass::from_name(name).ok_or_else(|| format!("unknown class '{name}'"))?;
    }
    if let Some(level) = args.level {
        options.level = level;
    }
    Ok(options)
}

fn resolve_race(races: &RaceTable, query: &str) -> Option<MonraceId> {
    if let Ok(index) = query.parse::<u16>() {
        return races.get(MonraceId(index)).map(|race| race.id);
    }
    races.find_by_name(query).map(|race| race.id)
}

fn run_viewer(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = viewer_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn viewer_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
