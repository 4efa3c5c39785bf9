use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod api;
mod app;
mod batch;
mod clipboard;
mod config;
mod dictionary;
mod health;
mod help;
mod history;
mod notification;
mod single;

use api::ApiClient;
use app::App;

/// Terminal client for the English-Ibani translation service
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal client for the English-Ibani machine translation service"
)]
struct Args {
    /// Translation server base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Dictionary service base URL (overrides the config file)
    #[arg(long)]
    dictionary_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/ibani-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ibani-debug.log")
            .expect("Failed to open /tmp/ibani-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== IBANI DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so CLI overrides apply on top of it
    let config_result = config::load_config();

    let args = Args::parse();

    let base_url = args
        .api_url
        .unwrap_or_else(|| config_result.config.api.base_url.clone());
    let dictionary_url = args
        .dictionary_url
        .unwrap_or_else(|| config_result.config.api.dictionary_url.clone());
    let client = ApiClient::new(&base_url, &dictionary_url)?;

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result, client);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== IBANI DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
    client: ApiClient,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_api_worker(&mut app, client);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the API worker thread and channels
fn setup_api_worker(app: &mut App, client: ApiClient) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_channels(request_tx, response_rx);

    // Spawn the worker thread
    api::spawn_worker(client, request_rx, response_tx);
}
