use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ProgressStore, QuestionBankService};
use tracing::info;
use ui::{App, UiApp, build_app_context};

mod logging;

const DEFAULT_DB_URL: &str = "sqlite://prep.sqlite3";
const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBankService> {
        self.services.question_bank()
    }

    fn progress_store(&self) -> Arc<ProgressStore> {
        self.services.progress_store()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_DB_URL, RUST_LOG");
}

impl Args {
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut args = argv.into_iter().peekable();

        // `ui` is the only subcommand and also the default.
        match args.peek().map(String::as_str) {
            Some("ui") => {
                args.next();
            }
            Some(first) if !first.starts_with('-') => {
                return Err(ArgsError::UnknownCommand(first.to_owned()));
            }
            _ => {}
        }

        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_owned(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { db_url }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_DB_URL || trimmed.starts_with("sqlite://") {
        return trimmed.to_owned();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_owned(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_owned(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), std::env::var("PREP_DB_URL").ok())
        .inspect_err(|err| {
            eprintln!("{err}");
            print_usage();
        })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    // Keep storage setup in the binary glue so services stay storage-agnostic.
    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url).await?;
    info!(db_url = %args.db_url, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("React Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn no_arguments_launch_the_ui_with_the_default_database() {
        let parsed = Args::parse(argv(&[]), None).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: DEFAULT_DB_URL.to_owned()
            })
        );
    }

    #[test]
    fn explicit_ui_subcommand_is_accepted() {
        let parsed = Args::parse(argv(&["ui", "--db", MEMORY_DB_URL]), None).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: MEMORY_DB_URL.to_owned()
            })
        );
    }

    #[test]
    fn flag_overrides_environment() {
        let parsed = Args::parse(
            argv(&["--db", "sqlite:///tmp/flag.sqlite3"]),
            Some("sqlite:///tmp/env.sqlite3".to_owned()),
        )
        .unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: "sqlite:///tmp/flag.sqlite3".to_owned()
            })
        );
    }

    #[test]
    fn environment_url_is_normalized() {
        let parsed = Args::parse(argv(&[]), Some("sqlite:/var/prep.sqlite3".to_owned())).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                db_url: "sqlite:///var/prep.sqlite3".to_owned()
            })
        );
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("data/prep.sqlite3".to_owned());
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("data/prep.sqlite3"));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(Args::parse(argv(&["-h"]), None).unwrap(), Parsed::Help);
        assert_eq!(Args::parse(argv(&["ui", "--help"]), None).unwrap(), Parsed::Help);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            Args::parse(argv(&["--db"]), None),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            Args::parse(argv(&["--db", "  "]), None),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            Args::parse(argv(&["seed"]), None),
            Err(ArgsError::UnknownCommand(cmd)) if cmd == "seed"
        ));
        assert!(matches!(
            Args::parse(argv(&["--verbose"]), None),
            Err(ArgsError::UnknownArg(arg)) if arg == "--verbose"
        ));
    }

    #[test]
    fn memory_database_needs_no_file() {
        prepare_sqlite_file(MEMORY_DB_URL).unwrap();
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
