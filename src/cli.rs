use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, ValueHint};

use crate::descriptor::DEFAULT_CONFIG_DIR;
use crate::formatters::console;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prokit",
    about = "Minimal project scaffolding tool",
    long_about = None,
    disable_version_flag = true,
    override_usage = "prokit -lang=<language> -name=<project-name> [options]"
)]
pub struct Args {
    /// Programming language (see the list below)
    #[arg(long = "lang", value_name = "LANGUAGE")]
    pub lang: Option<String>,

    /// Project name
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Project type (app or library)
    #[arg(long = "type", value_name = "TYPE", default_value = "app")]
    pub project_type: String,

    /// Output directory
    #[arg(long = "output", value_name = "DIR", default_value = ".", value_hint = ValueHint::DirPath)]
    pub output: PathBuf,

    /// Directory holding the per-language descriptors (<lang>.json)
    #[arg(long = "config-dir", value_name = "DIR", default_value = DEFAULT_CONFIG_DIR, value_hint = ValueHint::DirPath)]
    pub config_dir: PathBuf,

    /// Print a JSON report instead of console output
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Show version information
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version: bool,
}

const VALUE_FLAGS: &[&str] = &["lang", "name", "type", "output", "config-dir"];
const SWITCH_FLAGS: &[&str] = &["version", "json", "verbose", "help"];

pub fn command() -> clap::Command {
    Args::command().after_help(console::help_footer())
}

/// Runs the CLI application with the process arguments.
///
/// # Errors
/// Returns an error if scaffolding fails after the arguments were accepted.
pub fn run() -> Result<ExitCode> {
    run_from(std::env::args_os())
}

/// Runs the CLI application with explicit arguments (first item is the program name).
///
/// # Errors
/// Returns an error if scaffolding fails after the arguments were accepted.
pub fn run_from<I, T>(raw: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = normalize_flags(raw);
    let matches = match command().try_get_matches_from(argv) {
        Ok(m) => m,
        Err(err) => {
            let _ = err.print();
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };
    let args = Args::from_arg_matches(&matches)?;
    run_impl::run_with_args(&args)
}

/// Rewrites Go-style long flags (`-lang=go`, `-version`) into the `--lang=go`
/// form clap expects. Values following a value flag are never rewritten.
pub fn normalize_flags<I, T>(raw: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut iter = raw.into_iter().map(Into::<OsString>::into);
    if let Some(program) = iter.next() {
        out.push(program);
    }

    let mut expect_value = false;
    while let Some(arg) = iter.next() {
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        }

        let body = s
            .strip_prefix("--")
            .or_else(|| s.strip_prefix('-'))
            .filter(|b| !b.is_empty());
        let Some(body) = body else {
            out.push(arg);
            continue;
        };
        let (flag, inline) = match body.split_once('=') {
            Some((f, v)) => (f, Some(v)),
            None => (body, None),
        };

        if VALUE_FLAGS.contains(&flag) {
            expect_value = inline.is_none();
            out.push(format!("--{body}").into());
        } else if SWITCH_FLAGS.contains(&flag) {
            match inline.map(parse_go_bool) {
                None | Some(Some(true)) => out.push(format!("--{flag}").into()),
                Some(Some(false)) => {}
                // Let clap reject the malformed value.
                Some(None) => out.push(format!("--{body}").into()),
            }
        } else {
            out.push(arg);
        }
    }
    out
}

fn parse_go_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
