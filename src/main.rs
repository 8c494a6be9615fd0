use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use quiz_maker::cli::{self, Command, CommandResult};
use quiz_maker::{App, Config, FileStore, QuizRepository};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the quiz store and the log file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Prefix of generated share links
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    let args = Args::parse();
    let config = Config::from_env().with_overrides(args.data_dir, args.base_url);

    if let Err(e) = run(config, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, command: Option<Command>) -> quiz_maker::Result<()> {
    init_logging(&config)?;

    let store = FileStore::in_dir(&config.data_dir)?;
    let mut repo = QuizRepository::new(Box::new(store));

    let take_target = match command {
        None => None,
        Some(command) => match cli::execute_command(&mut repo, &config.base_url, command)? {
            CommandResult::Output(text) => {
                println!("{}", text);
                return Ok(());
            }
            CommandResult::Take(target) => Some(target),
        },
    };

    let mut app = App::new(repo, config.base_url);
    if let Some(target) = take_target {
        cli::open_target(&mut app, &target);
    }
    quiz_maker::run(&mut app)
}

/// The terminal belongs to the UI, so logs go to a file in the data directory.
fn init_logging(config: &Config) -> std::io::Result<()> {
    fs::create_dir_all(&config.data_dir)?;
    let log_file = File::options()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
