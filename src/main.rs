// structty: Interactive Type-Layout Calculator with Memory Visualization

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use structty::session::{Outcome, Session};
use structty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("structty");

    if args.len() > 2 {
        eprintln!("Usage: {} [script.types]", program_name);
        eprintln!();
        eprintln!("Starts the interactive layout explorer, optionally running the");
        eprintln!("commands in the given script file first (one command per line,");
        eprintln!("'#' starts a comment). Built-in atomics are always pre-seeded.");
        std::process::exit(1);
    }

    let mut session = Session::new();

    if let Some(script_path) = args.get(1) {
        if !Path::new(script_path).exists() {
            eprintln!("Error: File '{}' not found", script_path);
            eprintln!("Usage: {} [script.types]", program_name);
            std::process::exit(1);
        }

        let script = fs::read_to_string(script_path)?;
        eprintln!("Preloading {}...", script_path);
        if session.preload_script(&script) == Outcome::Quit {
            // The script asked to quit; honor it without entering the TUI.
            for line in session.transcript() {
                println!("{}", line.text);
            }
            return Ok(());
        }
        eprintln!("Preloaded {} types.", session.registry().len());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
