mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, entries, text, Context, TextContext};
use crate::error::{exit_code_for, report_error};
use phonefield_config as config;
use phonefield_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "phonefield", version, about = "phonefield CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every normalized view of one or more numbers
    Parse(text::ParseArgs),
    /// Render a number for people, or with --raw for machines
    Display(text::DisplayArgs),
    /// Split a number into main number and extension
    Split(text::SplitArgs),
    /// Join a main number and extension into one normalized number
    Join(text::JoinArgs),
    Add(entries::AddArgs),
    List(entries::ListArgs),
    Show(entries::ShowArgs),
    Find(entries::FindArgs),
    #[command(name = "set-phone")]
    SetPhone(entries::SetPhoneArgs),
    Rm(entries::RemoveArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose: _,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            match config::resolve_config_path(config_path) {
                Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
                Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
                Err(err) => debug!(error = %err, "config unavailable"),
            }

            let text_ctx = TextContext {
                json,
                config: &app_config,
            };
            match command {
                Command::Parse(args) => text::parse(&text_ctx, args),
                Command::Display(args) => text::display(&text_ctx, args),
                Command::Split(args) => text::split(&text_ctx, args),
                Command::Join(args) => text::join(&text_ctx, args),
                command => run_store_command(db_path, json, &app_config, command),
            }
        }
    }
}

fn run_store_command(
    db_path: Option<PathBuf>,
    json: bool,
    app_config: &config::AppConfig,
    command: Command,
) -> Result<()> {
    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store =
        Store::open(&db_path).with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let ctx = Context {
        store: &store,
        json,
        config: app_config,
    };

    match command {
        Command::Add(args) => entries::add_entry(&ctx, args),
        Command::List(args) => entries::list_entries(&ctx, args),
        Command::Show(args) => entries::show_entry(&ctx, args),
        Command::Find(args) => entries::find_entries(&ctx, args),
        Command::SetPhone(args) => entries::set_phone(&ctx, args),
        Command::Rm(args) => entries::remove_entry(&ctx, args),
        Command::Parse(_) | Command::Display(_) | Command::Split(_) | Command::Join(_) => {
            unreachable!("text commands handled before store initialization")
        }
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
