//! CLI argument definitions and command execution for `lexis`.
//!
//! The binary loads a catalog configuration, bootstraps the catalog the same
//! way a host would, and answers lookups from the command line.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use lexis_common::i18n::{I18nError, LocaleDetector, TranslateOptions};

use crate::config::CatalogConfig;
use crate::error::{LexisError, Result};
use crate::host::Localisation;

/// Inspect a hierarchical message catalog.
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve a message in the configured locale:\n",
    "    $ lexis --config lexis.toml resolve styleManager.empty\n\n",
    "  Resolve with an explicit locale and placeholder values:\n",
    "    $ lexis resolve layerManager.count --locale it --param count=3\n\n",
    "  List locales holding messages:\n",
    "    $ lexis --config lexis.toml locales",
))]
pub struct Cli {
    /// Catalog configuration file [default: built-in messages only].
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a dotted message key.
    Resolve(ResolveArgs),

    /// List locales that hold messages, marking the active one.
    Locales,
}

/// Arguments for the resolve command.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Dotted message key, e.g. `styleManager.empty`.
    pub key: String,

    /// Locale to start from [default: configured or detected locale].
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Placeholder value; may be repeated.
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Result of running a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The command produced its output.
    Completed,
    /// The requested message was absent from every consulted locale.
    Missing,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::Missing => 2,
        }
    }
}

/// Parse a `NAME=VALUE` placeholder argument.
///
/// # Errors
///
/// Returns a message when the argument has no `=` or an empty name.
pub fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

/// Run `cli`, writing results to `stdout` and lookup misses to `stderr`.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded or output cannot
/// be written.
pub fn run(
    cli: &Cli,
    detector: &dyn LocaleDetector,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<Outcome> {
    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let localisation = Localisation::init(&config, detector)?;

    match &cli.command {
        Command::Resolve(args) => resolve(&localisation, args, stdout, stderr),
        Command::Locales => list_locales(&localisation, stdout),
    }
}

fn resolve(
    localisation: &Localisation,
    args: &ResolveArgs,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<Outcome> {
    let mut options = TranslateOptions::new();
    if let Some(locale) = args.locale.as_deref() {
        options = options.locale(locale);
    }
    for (name, value) in &args.params {
        options = options.param(name.as_str(), value.as_str());
    }

    match localisation.catalog().message(&args.key, &options) {
        Ok(message) => {
            writeln!(stdout, "{message}").map_err(LexisError::Output)?;
            Ok(Outcome::Completed)
        }
        Err(error @ I18nError::MissingMessage { .. }) => {
            writeln!(stderr, "{error}").map_err(LexisError::Output)?;
            Ok(Outcome::Missing)
        }
        Err(other) => Err(other.into()),
    }
}

fn list_locales(localisation: &Localisation, stdout: &mut dyn Write) -> Result<Outcome> {
    let catalog = localisation.catalog();
    let active = catalog.locale();
    let mut listed = false;
    for locale in catalog.locales() {
        let marker = if locale == active { '*' } else { ' ' };
        writeln!(stdout, "{marker} {locale}").map_err(LexisError::Output)?;
        listed |= locale == active;
    }
    if !listed {
        writeln!(stdout, "* {active} (no messages)").map_err(LexisError::Output)?;
    }
    Ok(Outcome::Completed)
}
