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

use anyhow::{Context, Result};
use console::{Style, Term};
use credforge::{BreachVerdict, Credential, Mode, StrengthCategory, StrengthReport};
use rpassword::read_password;
use std::io::{self, Write};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MAX_INPUT_BYTES: usize = 1024 * 1024;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

/// Branch and last-branch markers for tree-style listings.
fn tree_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn category_style(category: StrengthCategory, options: &DisplayOptions) -> Style {
    if !options.color_support {
        return Style::new();
    }
    match category {
        StrengthCategory::Strong => Style::new().green(),
        StrengthCategory::Moderate => Style::new().yellow(),
        StrengthCategory::Weak => Style::new().red(),
    }
}

fn verdict_style(breached: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, breached) {
        (false, _) => Style::new(),
        (true, true) => Style::new().red(),
        (true, false) => Style::new().green(),
    }
}

fn normalize_input(s: &str) -> String {
    s.trim().nfc().collect()
}

/// Reads a string to evaluate without echoing it.
pub fn prompt_secret() -> Result<Zeroizing<String>> {
    print!("In [0]: ");
    io::stdout().flush()?;

    let input = Zeroizing::new(read_password().context("Failed to read password")?);
    let normalized = Zeroizing::new(normalize_input(&input));

    if normalized.len() > MAX_INPUT_BYTES {
        anyhow::bail!(
            "Input too long ({} bytes, maximum is {})",
            normalized.len(),
            MAX_INPUT_BYTES
        );
    }

    Ok(normalized)
}

pub fn display_credentials(
    results: &[(Credential, StrengthReport, Option<BreachVerdict>)],
    options: &DisplayOptions,
) {
    for (i, (credential, report, verdict)) in results.iter().enumerate() {
        if options.quiet {
            println!("{}", credential.as_str());
            continue;
        }

        println!("Out[{}]:\n{}\n", i, credential.as_str());
        display_report(
            credential.as_str(),
            Some(credential.mode),
            report,
            verdict.as_ref(),
            options,
        );

        if i + 1 < results.len() {
            println!();
        }
    }
}

/// One-line form of a report, printed by `check` in quiet mode.
fn quiet_summary(report: &StrengthReport, verdict: Option<&BreachVerdict>) -> String {
    let mut line = format!(
        "{}/{} {}",
        report.score,
        StrengthReport::MAX_SCORE,
        report.category
    );
    if let Some(verdict) = verdict {
        line.push_str(if verdict.breached {
            " breached (simulated)"
        } else {
            " not-found (simulated)"
        });
    }
    line
}

pub fn display_report(
    text: &str,
    mode: Option<Mode>,
    report: &StrengthReport,
    verdict: Option<&BreachVerdict>,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", quiet_summary(report, verdict));
        return;
    }

    let (branch, last) = tree_symbols(options.unicode_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let style = category_style(report.category, options);
    let status = if report.category == StrengthCategory::Strong {
        check_ok
    } else {
        check_warn
    };

    let length = text.chars().count();

    println!("Stats:");
    if let Some(mode) = mode {
        println!("  {} Mode       {}", branch, mode);
    }
    println!(
        "  {} Length     {} {}",
        branch,
        length,
        if length == 1 { "char" } else { "chars" }
    );
    println!(
        "  {} Score      {} {}/{} ({})",
        if report.feedback.is_empty() && verdict.is_none() {
            last
        } else {
            branch
        },
        style.apply_to(format!("[{}]", status)),
        style.apply_to(report.score),
        StrengthReport::MAX_SCORE,
        style.apply_to(report.category)
    );

    if !report.feedback.is_empty() {
        println!(
            "  {} Feedback",
            if verdict.is_none() { last } else { branch }
        );
        let pipe = match (verdict.is_some(), options.unicode_support) {
            (false, _) => " ",
            (true, true) => "│",
            (true, false) => "|",
        };
        for (j, item) in report.feedback.iter().enumerate() {
            let marker = if j + 1 == report.feedback.len() {
                last
            } else {
                branch
            };
            println!("  {}  {} {}", pipe, marker, item);
        }
    }

    if let Some(verdict) = verdict {
        let style = verdict_style(verdict.breached, options);
        let (symbol, label) = if verdict.breached {
            (check_warn, "Breached (simulated)")
        } else {
            (check_ok, "Not found (simulated)")
        };
        println!(
            "  {} Breach     {} {}",
            last,
            style.apply_to(format!("[{}]", symbol)),
            style.apply_to(label)
        );
        println!("                  {}", verdict.message);
    }
}

pub fn display_export(path: &str, count: usize, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let term = Term::stderr();
    let (check_ok, _) = get_status_symbols(options.unicode_support);
    let style = if options.color_support {
        Style::new().green()
    } else {
        Style::new()
    };
    let _ = term.write_line(&format!(
        "{} Exported {} {} to {}",
        style.apply_to(format!("[{}]", check_ok)),
        count,
        if count == 1 { "line" } else { "lines" },
        path
    ));
}
