//! Visor TUI entry point
//!
//! Owns the terminal lifecycle: raw mode, alternate screen, a panic hook
//! that restores both, and the sign-off line printed after restore.

use std::io::{self, IsTerminal};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use visor_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env())
        .init();

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("visor requires a terminal (TTY).");
        eprintln!();
        eprintln!("This usually means a non-interactive environment:");
        eprintln!("  - SSH without the -t flag");
        eprintln!("  - Piped stdin/stdout");
        eprintln!("  - A CI job or cron task");
        eprintln!();
        eprintln!("Run it from an interactive shell: visor");
        std::process::exit(1);
    }

    // Restore the terminal before any panic message prints
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(Some(line)) => {
            println!("\n\x1b[36mvisor:\x1b[0m {line}\n");
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("visor exited with an error: {e:#}");
            Err(e)
        }
    }
}

/// Run the app and hand back its sign-off line for printing after restore
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<Option<String>> {
    let mut app = App::new()?;
    app.run(terminal).await?;
    Ok(app.sign_off().map(String::from))
}
