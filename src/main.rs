use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use clinician_autocomplete::app::App;
use clinician_autocomplete::config::{Config, ConfigResult, load_config, render_config};
use clinician_autocomplete::input::InputField;
use clinician_autocomplete::lookup::{LookupClient, spawn_worker};
use clinician_autocomplete::widget::{Widget, WidgetOptions};

const LOG_DIR_NAME: &str = "cac";
const LOG_FILE_NAME: &str = "cac.log";

/// Look up clinicians by name from the terminal
#[derive(Parser, Debug)]
#[command(name = "cac", version, about)]
struct Args {
    /// API key for the clinician discovery service
    #[arg(long, env = "CAC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Root URL of the lookup service
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Maximum number of suggestions shown
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Search radius in miles around your zip code
    #[arg(long, value_name = "MILES")]
    distance: Option<u32>,

    /// Do not bias results by your location
    #[arg(long)]
    no_geo: bool,

    /// Do not emphasize matched text in suggestions
    #[arg(long)]
    no_highlight: bool,

    /// Delay between the last keystroke and the lookup
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());
    apply_overrides(&args, &mut config);

    if args.print_config {
        if let Some(warning) = &warning {
            eprintln!("warning: {}", warning);
        }
        print!("{}", render_config(&config));
        return Ok(());
    }

    init_logging();

    let options = WidgetOptions::from_config(&config);
    let client = LookupClient::new(
        &options.api_base,
        options.api_key().unwrap_or_default(),
        Duration::from_millis(options.timeout_ms),
    )?;
    let channels = spawn_worker(client);
    let widget = Widget::new(Some(InputField::new("clinician")), options, channels);

    let mut app = App::new(widget, Instant::now());
    if let Some(warning) = warning {
        app.status = warning;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste) {
        log::warn!("Failed to enable terminal modes: {}", e);
    }

    let result = run(terminal, &mut app);

    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
    result?;

    if app.output_record {
        match app.selected_record() {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => eprintln!("No record selected"),
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// CLI flags win over the config file
fn apply_overrides(args: &Args, config: &mut Config) {
    if let Some(key) = &args.api_key {
        config.api.api_key = Some(key.clone());
    }
    if let Some(base) = &args.api_base {
        config.api.base_url = base.clone();
    }
    if let Some(limit) = args.limit {
        config.menu.result_limit = limit;
    }
    if let Some(distance) = args.distance {
        config.geolocation.distance_radius = distance;
    }
    if args.no_geo {
        config.geolocation.enabled = false;
    }
    if args.no_highlight {
        config.menu.highlight = false;
    }
    if let Some(ms) = args.debounce_ms {
        config.timing.debounce_ms = ms;
    }
}

/// Log to a file under the user cache directory
///
/// The terminal UI owns stdout and stderr, so nothing is written there. Active
/// in debug builds or when `RUST_LOG` is set.
fn init_logging() {
    if !cfg!(debug_assertions) && std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Some(dir) = dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME)) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let env = env_logger::Env::default().default_filter_or("clinician_autocomplete=debug,cac=debug");
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
