use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use std::io::stdout;
use std::path::PathBuf;

use dropsel::app::{App, OutputMode};
use dropsel::config::{self, Config};
use dropsel::options::OptionList;

/// Terminal dropdown select demo
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal dropdown select with single and multiple selection"
)]
struct Args {
    /// JSON file with an array of {"label", "value"} options (numbered options if omitted)
    options: Option<PathBuf>,

    /// Number of generated options when no options file is given
    #[arg(long)]
    items: Option<usize>,

    /// Text shown while nothing is selected
    #[arg(long)]
    placeholder: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/dropsel-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dropsel-debug.log")?;

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

        log::debug!("=== DROPSEL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();
    let mut config_result = config::load_config();
    apply_args(&mut config_result.config, &args);

    // Bad options must fail before the terminal switches to raw mode
    let options = match &args.options {
        Some(path) => OptionList::load(path)?,
        None => OptionList::numbered(config_result.config.demo.item_count),
    };

    let mut app = App::new(options, &config_result.config);
    app.warning = config_result.warning;

    let (terminal, key_release_events) = init_terminal()?;
    app.key_release_events = key_release_events;

    let result = run(terminal, app);

    restore_terminal(key_release_events)?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== DROPSEL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command line flags win over the config file
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(items) = args.items {
        config.demo.item_count = items;
    }
    if let Some(placeholder) = &args.placeholder {
        config.dropdown.placeholder = placeholder.clone();
    }
}

/// Initialize terminal with raw mode, alternate screen and mouse capture
///
/// Also returns whether key release events were enabled.
fn init_terminal() -> Result<(DefaultTerminal, bool)> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let key_release_events = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();

    #[cfg(debug_assertions)]
    log::debug!("Key release events enabled: {}", key_release_events);

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok((terminal, key_release_events)),
        Err(e) => {
            let _ = restore_terminal(key_release_events);
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal(key_release_events: bool) -> Result<()> {
    if key_release_events {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    match app.output_mode() {
        Some(OutputMode::Selections) => {
            println!("{}", serde_json::to_string_pretty(&app.selections_json()?)?);
        }
        None => {
            // No output mode (exited with Ctrl+C or q)
        }
    }

    Ok(())
}
