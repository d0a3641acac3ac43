use clap::{error::ErrorKind, CommandFactory, Parser};
use codetype::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{AppEvent, ChannelEventSource, Runner},
    App, Catalog, Flow, SnippetSet,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

/// typing practice for code snippets with live wpm, accuracy, and progress
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type your way through real code snippets while speed, accuracy, and progress update on every keystroke."
)]
pub struct Cli {
    /// built-in snippet set to practice on
    #[clap(short = 's', long, value_enum)]
    snippets: Option<SnippetSet>,

    /// json catalog file ({"name": ..., "snippets": [...]}), overrides --snippets
    #[clap(short = 'c', long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// practice a single custom text instead of a catalog
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// begin on a random snippet instead of the first one
    #[clap(long)]
    random_start: bool,

    /// write logs to the user state directory (level from RUST_LOG, default info)
    #[clap(long)]
    log: bool,

    /// remember --snippets, --catalog and --random-start as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command line flags over the stored config
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(set) = self.snippets {
            config.snippets = set;
            config.catalog = None;
        }
        if let Some(ref path) = self.catalog {
            config.catalog = Some(path.clone());
        }
        if self.random_start {
            config.random_start = true;
        }
        config
    }

    fn load_catalog(&self, config: &Config) -> Result<Catalog, codetype::CatalogError> {
        if let Some(ref prompt) = self.prompt {
            return Catalog::from_prompt(prompt.clone());
        }
        match config.catalog {
            Some(ref path) => Catalog::from_file(path),
            None => Catalog::builtin(config.snippets),
        }
    }

    /// Merge flags into the stored config and load its catalog. With
    /// `--save-config` the merged config is written only once the catalog
    /// has loaded, so a bad path never becomes the default.
    fn prepare<S: ConfigStore>(&self, store: &S) -> Result<(Config, Catalog), Box<dyn Error>> {
        let config = self.merge_into(store.load());
        let catalog = self.load_catalog(&config)?;
        tracing::info!(catalog = catalog.name(), snippets = catalog.len(), "catalog loaded");

        if self.save_config {
            store.save(&config)?;
            tracing::info!("config saved");
        }
        Ok((config, catalog))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.log {
        let path = AppDirs::log_path();
        logging::init_file_logging(&path)?;
        eprintln!("logging to {}", path.display());
    }

    // fail before the terminal is taken over so the message stays readable
    let store = FileConfigStore::new();
    tracing::debug!(path = %store.path().display(), "config store");
    let (config, catalog) = cli.prepare(&store)?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, config.random_start);
    let result = start_tui(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.tick_rate_ms),
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(ChannelEventSource::terminal(), tick_rate);

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick => continue,
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if app.on_key(key) == Flow::Quit {
                    break;
                }
            }
            AppEvent::Disconnected => return Err("terminal input closed".into()),
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
