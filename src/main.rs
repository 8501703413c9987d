mod app;
mod calendar;
mod domain;
mod input;
mod notifications;
mod persistence;
mod tasks;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{get_tempo_dir, init_local_tempo, DurableStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tasks::TaskStore;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "A terminal todo list with calendar view and focus timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tempo directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .tempo directory
            let tempo_dir = init_local_tempo()?;
            println!("Initialized tempo directory: {}", tempo_dir.display());
            println!();
            println!("Tempo will now use this local directory for task storage.");
            println!("Run 'tempo' to start.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Show which directory we're using
    let tempo_dir = get_tempo_dir()?;
    eprintln!("Using tempo directory: {}", tempo_dir.display());

    // Hydrate tasks from the durable store
    let store = DurableStore::open_default()?;
    let tasks = TaskStore::load(store);

    // Create app state
    let mut app = AppState::new(tasks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Deactivate the timer tick source
    app.teardown();

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the focus timer
        app.tick();
    }
}
