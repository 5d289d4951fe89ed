use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use bloglist::App;
use bloglist::api::{BlogClient, worker};
use bloglist::config::{self, ConfigResult};
use bloglist::session::{SessionState, session_storage};

/// Terminal client for a blog-list REST backend
#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for a blog-list REST backend")]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Forget the stored session and exit
    #[arg(long)]
    logout: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/bloglist-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if args.logout {
        session_storage::remove_session()?;
        println!("Session removed");
        return Ok(());
    }

    let mut config_result = config::load_config();
    if let Some(server) = args.server {
        config_result.config.server.base_url = server;
    }

    // Fail on a bad URL before the terminal is taken over
    let client = BlogClient::new(&config_result.config.server)?;

    let terminal = init_terminal()?;
    let app = App::new(SessionState::restore());
    let result = run(terminal, app, client, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BLOGLIST DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/bloglist-debug.log")
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Debug log disabled: {}", e);
            return;
        }
    };

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

    log::debug!("=== BLOGLIST DEBUG SESSION STARTED ===");
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
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
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
    client: BlogClient,
    config_result: ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_error(&warning);
    }

    setup_api_worker(&mut app, client)?;
    app.refresh();

    loop {
        // Poll before render so responses show up in this frame
        app.poll_api();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the API worker thread and channels
fn setup_api_worker(app: &mut App, client: BlogClient) -> Result<()> {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.api.set_channels(request_tx, response_rx);

    #[cfg(debug_assertions)]
    log::debug!("Starting API worker for {}", client.base_url());

    worker::spawn_worker(client, request_rx, response_tx)?;
    Ok(())
}
