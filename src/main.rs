use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use log::LevelFilter;

use rules_manager::Player;
use rules_manager::RulesManager;
use rules_manager::config::FileConfigStore;
use rules_manager::console::{ConsoleHost, LineOutcome, LoggingRuleEvents, run_args, run_lines};
use rules_manager::lang::{DEFAULT_LOCALE, Lang};

/// Id the terminal operator plays as
const OPERATOR_ID: &str = "0";

/// Manage and display server rules from the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Manage and display game server rules from the terminal"
)]
struct Args {
    /// Rules config file, .toml or .json (defaults to ~/.config/rules-manager/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name the commands run as
    #[arg(short, long, default_value = "Console")]
    player: String,

    /// Permission held by the operator, repeatable (`*` grants all)
    #[arg(short, long = "grant")]
    grants: Vec<String>,

    /// Other player that `rman show` can target, repeatable
    #[arg(long = "known-player")]
    known_players: Vec<String>,

    /// Locale replies are rendered in
    #[arg(short, long)]
    locale: Option<String>,

    /// TOML file of message overrides for the chosen locale
    #[arg(long)]
    lang_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Chat command to run, e.g. `rman add Be nice` (reads lines from stdin if omitted)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder
        .target(env_logger::Target::Stderr)
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
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);
    color_eyre::install()?;

    let store = match &args.config {
        Some(path) => FileConfigStore::new(path),
        None => FileConfigStore::default_location()?,
    };
    log::debug!("Using config {}", store.path().display());

    let mut lang = Lang::new();
    if let Some(path) = &args.lang_file {
        let locale = args.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
        let count = lang.load_overrides(locale, path)?;
        log::debug!("Loaded {} '{}' messages from {}", count, locale, path.display());
    }

    let (mut manager, warning) = RulesManager::load(store, lang);
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }
    manager.subscribe(Box::new(LoggingRuleEvents));

    let stdout = io::stdout();
    let mut host = ConsoleHost::new(stdout.lock(), Player::new(OPERATOR_ID, args.player));
    for grant in args.grants {
        host.grant(grant);
    }
    for (i, name) in args.known_players.into_iter().enumerate() {
        host.add_player(Player::new((i + 1).to_string(), name));
    }
    host.set_locale(args.locale);

    if args.command.is_empty() {
        run_lines(&mut manager, &mut host, io::stdin().lock().lines())?;
    } else if run_args(&mut manager, &mut host, &args.command) == LineOutcome::Unknown {
        return Err(eyre!("Unknown command: {}", args.command.join(" ")));
    }

    Ok(())
}
