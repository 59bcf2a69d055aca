use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jotter::core::config::{self, CliOverrides};
use jotter::core::state::App;
use jotter::core::storage::JsonFileStorage;

#[derive(Parser)]
#[command(name = "jotter", about = "Sticky notes in your terminal")]
struct Args {
    /// Notes file (default: ~/.jotter/notes.json)
    #[arg(long)]
    notes_file: Option<PathBuf>,

    /// Log file (default: ~/.jotter/jotter.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

/// Log to `path`, or to `jotter.log` in the working directory if that fails.
/// Problems are reported on stderr before the terminal is taken over.
fn init_logging(path: &Path, level: &str) {
    let level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let log_file = config::open_log_file(path).or_else(|e| {
        eprintln!("Cannot write log to {}: {}", path.display(), e);
        File::create(config::DEFAULT_LOG_FILE)
    });
    match log_file {
        Ok(file) => {
            let _ = WriteLogger::init(level, log_config, file);
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        notes_file: args.notes_file,
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(&resolved.log_file, &resolved.log_level);
    log::info!("Jotter starting up, notes at {}", resolved.notes_file.display());

    // A notes file we can't read is left alone rather than overwritten
    let app = match App::open(Box::new(JsonFileStorage::new(&resolved.notes_file))) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}: {}", resolved.notes_file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = jotter::tui::run(&resolved, app) {
        log::error!("Terminal error: {}", e);
        eprintln!("Terminal error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
