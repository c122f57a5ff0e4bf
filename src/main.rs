// This file is part of Credforge.
//
// Copyright (c) 2026  Credforge Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod ui;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use credforge::config::{
    DEFAULT_PASSPHRASE_WORDS, DEFAULT_PATTERN, DEFAULT_PIN_LENGTH,
    DEFAULT_PRONOUNCEABLE_LENGTH, DEFAULT_RANDOM_LENGTH,
};
use credforge::history::{CREDENTIALS_EXPORT_PREFIX, HISTORY_EXPORT_PREFIX};
use credforge::{
    GenerationConfig, History, KeystreamRng, PassphraseConfig, PatternConfig, PinConfig,
    PronounceableConfig, RandomConfig, Separator,
};
use std::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "credforge",
    version,
    author,
    about = "Generate passwords, PINs and passphrases and score their strength"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Number of credentials to generate
    #[arg(short, long, global = true, default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(1..=10))]
    count: u8,

    /// Run the simulated breach heuristic on every result
    #[arg(short, long, global = true)]
    breach: bool,

    /// Write generated credentials one per line, to FILE or passwords_<timestamp>.txt
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1, require_equals = true)]
    export: Option<Option<String>>,

    /// Write this run's history as `password | mode | timestamp` lines, to FILE or
    /// password_history_<timestamp>.txt
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1, require_equals = true)]
    export_history: Option<Option<String>>,

    /// Print only the credentials
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Random characters from the selected classes
    Random(RandomArgs),
    /// Alternating consonants and vowels
    Pronounceable(PronounceableArgs),
    /// Numeric PIN
    Pin(PinArgs),
    /// Words from the built-in dictionary
    Passphrase(PassphraseArgs),
    /// Expand a pattern: a=lower, A=upper, 9=digit, #=special, x=any
    Pattern {
        #[arg(default_value = DEFAULT_PATTERN)]
        pattern: String,
    },
    /// Score a password read from a hidden prompt
    Check,
}

#[derive(Args)]
struct RandomArgs {
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_LENGTH as u8,
          value_parser = clap::value_parser!(u8).range(8..=64))]
    length: u8,
    #[arg(long)]
    no_lowercase: bool,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long)]
    no_special: bool,
    /// Exclude i, l, 1, L, o, 0, O
    #[arg(long)]
    exclude_similar: bool,
    /// Exclude { } [ ] ( ) / \ ' " ` ~ , ; : . < >
    #[arg(long)]
    exclude_ambiguous: bool,
    /// Do not force one character of every selected class
    #[arg(long)]
    no_ensure_all_types: bool,
}

#[derive(Args)]
struct PronounceableArgs {
    #[arg(short, long, default_value_t = DEFAULT_PRONOUNCEABLE_LENGTH as u8,
          value_parser = clap::value_parser!(u8).range(8..=20))]
    length: u8,
    #[arg(long)]
    no_capitalize: bool,
    #[arg(long)]
    no_number: bool,
    #[arg(long)]
    no_special: bool,
}

#[derive(Args)]
struct PinArgs {
    #[arg(short, long, default_value_t = DEFAULT_PIN_LENGTH as u8,
          value_parser = clap::value_parser!(u8).range(4..=12))]
    length: u8,
    #[arg(long)]
    allow_repeats: bool,
    #[arg(long)]
    allow_sequences: bool,
}

#[derive(Args)]
struct PassphraseArgs {
    #[arg(short, long, default_value_t = DEFAULT_PASSPHRASE_WORDS as u8,
          value_parser = clap::value_parser!(u8).range(3..=8))]
    words: u8,
    #[arg(short, long, value_enum, default_value = "hyphen")]
    separator: SeparatorArg,
    #[arg(long)]
    capitalize: bool,
    #[arg(long)]
    no_number: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum SeparatorArg {
    Hyphen,
    Underscore,
    Period,
    Space,
    Comma,
    Colon,
    Semicolon,
    Exclamation,
}

impl From<SeparatorArg> for Separator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Hyphen => Separator::Hyphen,
            SeparatorArg::Underscore => Separator::Underscore,
            SeparatorArg::Period => Separator::Period,
            SeparatorArg::Space => Separator::Space,
            SeparatorArg::Comma => Separator::Comma,
            SeparatorArg::Colon => Separator::Colon,
            SeparatorArg::Semicolon => Separator::Semicolon,
            SeparatorArg::Exclamation => Separator::Exclamation,
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CREDFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `--export` alone picks a timestamped name; `--export=FILE` uses FILE.
fn export_path(
    arg: Option<Option<String>>,
    prefix: &str,
    now: NaiveDateTime,
) -> Option<String> {
    arg.map(|path| path.unwrap_or_else(|| credforge::export_filename(prefix, now)))
}

fn build_config(command: Command) -> Option<GenerationConfig> {
    let config = match command {
        Command::Random(args) => RandomConfig {
            length: args.length.into(),
            use_lowercase: !args.no_lowercase,
            use_uppercase: !args.no_uppercase,
            use_digits: !args.no_digits,
            use_special: !args.no_special,
            exclude_similar: args.exclude_similar,
            exclude_ambiguous: args.exclude_ambiguous,
            ensure_all_types: !args.no_ensure_all_types,
        }
        .into(),
        Command::Pronounceable(args) => PronounceableConfig {
            length: args.length.into(),
            capitalize: !args.no_capitalize,
            add_number: !args.no_number,
            add_special: !args.no_special,
        }
        .into(),
        Command::Pin(args) => PinConfig {
            length: args.length.into(),
            avoid_repeats: !args.allow_repeats,
            avoid_sequences: !args.allow_sequences,
        }
        .into(),
        Command::Passphrase(args) => PassphraseConfig {
            word_count: args.words.into(),
            separator: args.separator.into(),
            capitalize_words: args.capitalize,
            add_number: !args.no_number,
        }
        .into(),
        Command::Pattern { pattern } => PatternConfig { pattern }.into(),
        Command::Check => return None,
    };
    Some(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let mut rng = KeystreamRng::from_entropy().context("Failed to seed random source")?;

    let Some(config) = build_config(cli.command) else {
        let input = ui::prompt_secret()?;
        let report = credforge::score(&input);
        let verdict = cli
            .breach
            .then(|| credforge::simulate_breach_check(&input, &mut rng));

        if !options.quiet {
            println!();
        }
        ui::display_report(&input, None, &report, verdict.as_ref(), &options);
        return Ok(());
    };

    tracing::debug!(mode = %config.mode(), count = cli.count, "generating");

    let credentials = credforge::generate_batch(&config, cli.count.into(), &mut rng)
        .context("Failed to generate credentials")?;

    let mut history = History::new();
    let now = Local::now().naive_local();
    for credential in &credentials {
        history.record(credential, now);
    }

    if let Some(path) = export_path(cli.export, CREDENTIALS_EXPORT_PREFIX, now) {
        let content = credforge::export_credentials(&credentials);
        fs::write(&path, content.as_bytes())
            .with_context(|| format!("Failed to write export file {}", path))?;
        ui::display_export(&path, credentials.len(), &options);
    }

    if let Some(path) = export_path(cli.export_history, HISTORY_EXPORT_PREFIX, now) {
        fs::write(&path, history.export().as_bytes())
            .with_context(|| format!("Failed to write history file {}", path))?;
        ui::display_export(&path, history.len(), &options);
    }

    let results: Vec<_> = credentials
        .into_iter()
        .map(|credential| {
            let report = credforge::score(credential.as_str());
            let verdict = cli
                .breach
                .then(|| credforge::simulate_breach_check(credential.as_str(), &mut rng));
            (credential, report, verdict)
        })
        .collect();

    ui::display_credentials(&results, &options);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 9)
            .and_then(|d| d.and_hms_opt(12, 0, 5))
            .unwrap()
    }

    #[test]
    fn test_export_path_default_name() {
        assert_eq!(
            export_path(Some(None), CREDENTIALS_EXPORT_PREFIX, at_noon()).as_deref(),
            Some("passwords_20260309_120005.txt")
        );
        assert_eq!(
            export_path(Some(None), HISTORY_EXPORT_PREFIX, at_noon()).as_deref(),
            Some("password_history_20260309_120005.txt")
        );
    }

    #[test]
    fn test_export_path_explicit_and_absent() {
        let explicit = Some(Some("out.txt".to_string()));
        assert_eq!(
            export_path(explicit, CREDENTIALS_EXPORT_PREFIX, at_noon()).as_deref(),
            Some("out.txt")
        );
        assert_eq!(export_path(None, HISTORY_EXPORT_PREFIX, at_noon()), None);
    }

    #[test]
    fn test_cli_export_flag_forms() {
        let cli = Cli::try_parse_from(["credforge", "--export", "random"]).unwrap();
        assert_eq!(cli.export, Some(None));
        assert!(matches!(cli.command, Command::Random(_)));

        let cli = Cli::try_parse_from(["credforge", "--export=out.txt", "pin"]).unwrap();
        assert_eq!(cli.export, Some(Some("out.txt".to_string())));
        assert_eq!(cli.export_history, None);
    }
}
