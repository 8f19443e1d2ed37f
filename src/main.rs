//! Course Finder CLI - Browse free online courses for your learning roadmap
//!
//! A terminal UI application that suggests free online courses for the topic
//! of your roadmap (or for AI), caching search results on disk for an hour.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::panic;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use coursefinder::app::App;
use coursefinder::cli::{Cli, StartupConfig};
use coursefinder::config::{load_config, Config};
use coursefinder::data::SearchClient;
use coursefinder::fetcher::CourseFetcher;
use coursefinder::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Initializes logging from `RUST_LOG` (default `warn`)
///
/// The interactive view owns the terminal, so logs go to
/// `<cache_dir>/coursefinder.log` there; print mode logs to stderr.
fn init_logging(config: &Config, to_stderr: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if !to_stderr {
        let Some(log_file) = config
            .cache
            .resolved_dir()
            .and_then(|dir| open_log_file(&dir).ok())
        else {
            return;
        };
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Opens (creating if needed) the log file inside `dir`
fn open_log_file(dir: &Path) -> io::Result<std::fs::File> {
    std::fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("coursefinder.log"))
}

/// Runs one resolution and fetch, printing the result instead of drawing it
///
/// Returns the process exit code.
async fn run_print(mut app: App) -> i32 {
    app.fetch_courses().await;

    if let Some(ref error) = app.last_error {
        eprintln!("Error: {}", error);
        return 1;
    }

    print!("{}", ui::format_plain(&app));
    0
}

/// Runs the interactive terminal UI until the user quits
async fn run_tui(mut app: App, warning: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    // Main event loop
    loop {
        app.notification.clear_if_expired();

        if app.begin_fetch() {
            // Show the loading view for the duration of the fetch
            terminal.draw(|f| ui::render(f, &app))?;
            app.finish_fetch().await;
        }

        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let (width, _) = crossterm::terminal::size()?;
                    app.grid_columns = ui::grid_columns(width);
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials may live in a .env file next to the working directory
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let startup = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config_result = load_config(cli.config.as_deref());
    let config = config_result
        .config
        .with_overrides(cli.api_key.clone(), cli.cx.clone(), cli.no_cache);

    // The log location comes from the config, so the loader reports
    // problems through the warning instead of logging them itself
    init_logging(&config, startup.print);
    if let Some(ref warning) = config_result.warning {
        log::warn!("{}", warning);
    }
    log::debug!(
        "Search endpoint {}, cache {}, ttl {}",
        config.search.base_url,
        if config.cache.enabled { "enabled" } else { "disabled" },
        config.cache.ttl()
    );

    let client = SearchClient::new(config.search.api_key.clone(), config.search.cx.clone())
        .with_base_url(config.search.base_url.clone());
    let fetcher = CourseFetcher::new(client, config.cache.manager()).with_ttl(config.cache.ttl());

    let print = startup.print;
    let app = App::with_startup_config(fetcher, startup);

    if print {
        let code = run_print(app).await;
        std::process::exit(code);
    }

    run_tui(app, config_result.warning).await
}
