use imgsort::app::{App, AppControl};
use imgsort::cli::{AppConfig, Args};
use imgsort::config::UserConfig;
use imgsort::logging;
use imgsort::tui::render;

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing::{error, info};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.init_config {
        match UserConfig::default().save() {
            Ok(path) => println!("Wrote default config to {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Load user configuration
    let user_config = UserConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load user config: {}", e);
        UserConfig::default()
    });
    let config = AppConfig::resolve(&args, &user_config);

    // The guard flushes the log file on drop
    let _guard = match logging::init_tracing(&args.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };
    info!(?config, "Starting imgsort");

    let result = run_app(config);
    if let Err(ref e) = result {
        error!("Terminal error: {}", e);
    }
    result
}

/// Runs the TUI application with configuration
fn run_app(config: AppConfig) -> io::Result<()> {
    init_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Key events only carry the caps-lock state with the enhancement protocol
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        )?;
    }
    info!(enhanced, "Terminal ready");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, enhanced, Instant::now());
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(moved = app.session().total_moved(), "Exiting");
    result
}

/// Main event loop
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.set_area(frame.area());
            render(frame, app);
        })?;

        // Wake up for the next caps-lock refresh even without input
        if event::poll(app.until_next_tick(Instant::now()))?
            && app.handle_event(event::read()?) == AppControl::Quit
        {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

/// Leaves the alternate screen before the default hook prints the panic
fn init_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        PopKeyboardEnhancementFlags,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )?;
    Ok(())
}
