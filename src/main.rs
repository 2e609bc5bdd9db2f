mod app;
mod clipboard;
mod domain;
mod input;
mod location;
mod logging;
mod persistence;
mod store;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Mode, TaskDate, TaskId};
use location::Location;
use persistence::{
    ensure_data_dir, init_local_data_dir, load_settings, log_file, seed_demo_tasks,
    save_settings, settings_file, FileStorage, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};
use store::TaskStore;

/// Poll interval of the event loop
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A terminal task board with dated tasks and a read-only share mode", long_about = None)]
struct Cli {
    /// Page URL of the board; `?mode=view` opens it read-only
    #[arg(long, global = true)]
    url: Option<String>,

    /// Open the board in view (read-only) mode
    #[arg(long, global = true)]
    view: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskboard directory in the current directory
    Init,
    /// Print the board
    List,
    /// Add a task
    Add {
        /// Due date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Task text
        text: Vec<String>,
    },
    /// Mark a task done, or undone if it already is
    Toggle { id: TaskId },
    /// Delete a task
    Delete {
        id: TaskId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the read-only share link
    Share,
}

fn main() -> Result<()> {
    let Cli { url, view, command } = Cli::parse();
    let open = || open_board(url.as_deref(), view);

    match command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            save_settings(settings_file(&data_dir), &Settings::default())?;
            println!("Initialized taskboard directory: {}", data_dir.display());
            println!();
            println!("Taskboard will now use this local directory for task storage.");
            println!("Run 'taskboard' to open the board.");
            Ok(())
        }
        None => {
            let (store, settings) = open()?;
            let app = AppState::new(
                store,
                settings.date_separator,
                Duration::from_secs(settings.copy_feedback_secs),
            );
            run_tui(app)
        }
        Some(Commands::List) => {
            let (store, settings) = open()?;
            let today = chrono::Local::now().date_naive();
            print!("{}", ui::plain::render_plain(&store, today, settings.date_separator));
            Ok(())
        }
        Some(Commands::Add { date, text }) => {
            let (mut store, _) = open()?;
            if store.mode().is_read_only() {
                println!("Nothing added: the board is in view mode");
                return Ok(());
            }
            let date = match date {
                Some(raw) => raw.parse::<TaskDate>().ok(),
                None => Some(TaskDate::from(chrono::Local::now().date_naive())),
            };
            let id = store.add_task(date, &text.join(" "))?;
            println!("Added task {}", id);
            Ok(())
        }
        Some(Commands::Toggle { id }) => {
            let (mut store, _) = open()?;
            if store.toggle_task(id)? {
                let done = store.task(id).is_some_and(|t| t.completed);
                println!("Task {} marked {}", id, if done { "done" } else { "not done" });
            } else {
                println!("Nothing changed: {}", no_change_reason(&store, id));
            }
            Ok(())
        }
        Some(Commands::Delete { id, yes }) => {
            let (mut store, _) = open()?;
            let removed = store.delete_task(id, |task| yes || confirm_on_stdin(&task.text))?;
            match removed {
                Some(task) => println!("Deleted task {}: {}", task.id, task.text),
                None if store.mode().is_read_only() || store.task(id).is_none() => {
                    println!("Nothing deleted: {}", no_change_reason(&store, id))
                }
                None => println!("Kept task {}", id),
            }
            Ok(())
        }
        Some(Commands::Share) => {
            let (store, _) = open()?;
            println!("{}", store.share_link());
            Ok(())
        }
    }
}

/// Startup: settings, logging, storage, demo seed, location, store
fn open_board(url: Option<&str>, view: bool) -> Result<(TaskStore, Settings)> {
    let data_dir = ensure_data_dir()?;
    let settings = load_settings(settings_file(&data_dir))?;
    logging::init_logging(&log_file(&data_dir))?;
    tracing::info!(data_dir = %data_dir.display(), "Opening board");

    let mut storage = FileStorage::open(data_dir.join("storage"))?;
    seed_demo_tasks(&mut storage, &settings.storage_key)?;

    let mut location = Location::parse(url.unwrap_or(&settings.page_url))?;
    if view {
        location.set_mode(Mode::View);
    }
    let store = TaskStore::open(Box::new(storage), &settings.storage_key, location);
    Ok((store, settings))
}

fn no_change_reason(store: &TaskStore, id: TaskId) -> String {
    if store.mode().is_read_only() {
        "the board is in view mode".to_string()
    } else {
        format!("no task with id {}", id)
    }
}

/// Ask "Delete task?" on the terminal; anything but y/yes declines
fn confirm_on_stdin(text: &str) -> bool {
    print!("Delete task \"{}\"? [y/N] ", text);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn run_tui(mut app: AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.store.tasks().len(), "Closing board");
    drop(app);

    result.context("Board stopped with an error")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
