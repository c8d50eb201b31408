// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use docopt::Docopt;

use crate::error::{Error, Result};
use crate::normalize::Settings;

/// Placeholder program name: docopt skips the first argv element.
const PROGRAM_NAME: &str = "";

const OPT_PREFIX: char = '-';
const HELP_OPTION: &str = "-h";
const LONG_HELP_OPTION: &str = "--help";
const VERSION_OPTION: &str = "--version";

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
const END_OF_OPTIONS: &str = "--";

const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// The argument vector to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Argv {
    /// Use the arguments of the running process (see [get_args()]).
    Process,
    /// Use these tokens. The program name must not be included.
    Tokens(Vec<String>),
}

impl Default for Argv {
    fn default() -> Self {
        Argv::Process
    }
}

impl Argv {
    /// Resolve into the list of tokens to parse.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Argv::Process => get_args(),
            Argv::Tokens(tokens) => tokens,
        }
    }
}

impl From<Vec<String>> for Argv {
    fn from(tokens: Vec<String>) -> Self {
        Argv::Tokens(tokens)
    }
}

impl<'a> From<Vec<&'a str>> for Argv {
    fn from(tokens: Vec<&'a str>) -> Self {
        Argv::Tokens(tokens.into_iter().map(String::from).collect())
    }
}

impl<'a> From<&'a [&'a str]> for Argv {
    fn from(tokens: &'a [&'a str]) -> Self {
        Argv::Tokens(tokens.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Argv {
    fn from(tokens: [&'a str; N]) -> Self {
        Argv::Tokens(tokens.iter().map(|s| s.to_string()).collect())
    }
}

/// A single string is split on whitespace.
impl<'a> From<&'a str> for Argv {
    fn from(line: &'a str) -> Self {
        Argv::Tokens(line.split_whitespace().map(String::from).collect())
    }
}

/// `None` means the process arguments.
impl<T: Into<Argv>> From<Option<T>> for Argv {
    fn from(argv: Option<T>) -> Self {
        match argv {
            Some(argv) => argv.into(),
            None => Argv::Process,
        }
    }
}

/// A value as produced by the usage parser, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawValue {
    /// A flag or command that was either given or not.
    Switch(bool),
    /// A repeatable flag or command, with the number of occurrences.
    Count(u64),
    /// An option argument or positional value; [None] when not given.
    Plain(Option<String>),
    /// The values of a repeatable option or positional argument.
    List(Vec<String>),
}

impl RawValue {
    /// Switches and counts may keep bare-word keys.
    pub fn is_flag(&self) -> bool {
        matches!(self, RawValue::Switch(_) | RawValue::Count(_))
    }

    /// An option or positional argument that was not specified.
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Plain(None))
    }

    /// A switch that was given, or a count above zero.
    pub fn is_set(&self) -> bool {
        match self {
            RawValue::Switch(b) => *b,
            RawValue::Count(n) => *n > 0,
            _ => false,
        }
    }
}

impl From<&docopt::Value> for RawValue {
    fn from(value: &docopt::Value) -> Self {
        match value {
            docopt::Value::Switch(b) => RawValue::Switch(*b),
            docopt::Value::Counted(n) => RawValue::Count(*n as u64),
            docopt::Value::Plain(s) => RawValue::Plain(s.clone()),
            docopt::Value::List(v) => RawValue::List(v.clone()),
        }
    }
}

/// The raw key/value pairs, keyed by the literal usage tokens
/// (`--verbose`, `<path>`, `NAME`, `run`).
pub type RawArgs = Vec<(String, RawValue)>;

/// The result of asking a [UsageParser] to parse an argument vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    /// The arguments matched the usage text.
    Matched(RawArgs),
    /// Help was requested; holds the text to display.
    Help(String),
    /// The version was requested; holds the text to display.
    Version(String),
}

/// Trait that a usage-text argument parser must implement.
pub trait UsageParser {
    /// Parse `argv` (without the program name) against the usage text `spec`.
    ///
    /// # Return value
    ///
    /// - A malformed `spec` returns [Error::Specification].
    /// - An `argv` that doesn't match returns [Error::ArgumentMismatch].
    /// - Help and version requests are returned as [Parsed::Help] and
    ///   [Parsed::Version] rather than exiting.
    fn parse(&self, spec: &str, argv: &[String], settings: &Settings) -> Result<Parsed>;
}

/// [UsageParser] backed by the [docopt](https://crates.io/crates/docopt) crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocoptParser;

impl DocoptParser {
    /// Create a new parser.
    pub fn new() -> Self {
        DocoptParser
    }
}

impl UsageParser for DocoptParser {
    fn parse(&self, spec: &str, argv: &[String], settings: &Settings) -> Result<Parsed> {
        let full_argv = std::iter::once(PROGRAM_NAME.to_string()).chain(argv.iter().cloned());

        let result = Docopt::new(spec).and_then(|d| {
            d.argv(full_argv)
                .help(settings.help_enabled())
                .version(settings.version_text().map(String::from))
                .options_first(settings.is_options_first())
                .parse()
        });

        match result {
            Ok(args) => {
                let mut raw: RawArgs = args
                    .map
                    .iter()
                    .map(|(key, value)| (key.clone(), RawValue::from(value)))
                    .collect();

                raw.sort_by(|a, b| a.0.cmp(&b.0));

                // docopt only checks "--help", so a usage text declaring a
                // lone "-h" gets here.
                let help = raw.iter().any(|(k, v)| is_help_key(k) && v.is_set());

                if settings.help_enabled() && help {
                    return Ok(Parsed::Help(spec.trim().into()));
                }

                Ok(Parsed::Matched(raw))
            }
            Err(docopt::Error::Usage(message)) => Err(Error::Specification(message)),
            Err(e) => match requested(spec, argv, settings) {
                // Help and version flags count even when the usage text
                // doesn't declare them.
                Some(parsed) => Ok(parsed),
                None => from_docopt_error(e, String::new()),
            },
        }
    }
}

/// Look for a help or version request in an argument vector that the usage
/// text rejected. Help wins over version wherever they appear.
fn requested(spec: &str, argv: &[String], settings: &Settings) -> Option<Parsed> {
    let mut options: Vec<&str> = Vec::new();

    for arg in argv {
        match arg.as_str() {
            // No more options so nothing else can be requested
            END_OF_OPTIONS => break,
            other if other.starts_with(OPT_PREFIX) => options.push(other),
            // Everything after the first positional argument is positional.
            _ if settings.is_options_first() => break,
            _ => (),
        }
    }

    if settings.help_enabled() && options.iter().any(|opt| is_help_request(opt)) {
        return Some(Parsed::Help(spec.trim().into()));
    }

    match settings.version_text() {
        Some(version) if options.contains(&VERSION_OPTION) => {
            Some(Parsed::Version(version.into()))
        }
        _ => None,
    }
}

fn is_help_key(key: &str) -> bool {
    key == HELP_OPTION || key == LONG_HELP_OPTION
}

/// `-h`, `--help`, or a bundle of short flags containing `h` (`-vh`).
fn is_help_request(opt: &str) -> bool {
    if is_help_key(opt) {
        return true;
    }

    !opt.starts_with(LONG_OPT_PREFIX) && opt.len() > 1 && opt[1..].contains('h')
}

fn from_docopt_error(err: docopt::Error, usage: String) -> Result<Parsed> {
    match err {
        docopt::Error::WithProgramUsage(inner, usage) => from_docopt_error(*inner, usage),
        docopt::Error::Help => Ok(Parsed::Help(usage)),
        docopt::Error::Version(version) => Ok(Parsed::Version(version)),
        docopt::Error::Usage(message) => Err(Error::Specification(message)),
        other => Err(Error::ArgumentMismatch {
            message: other.to_string(),
            usage,
        }),
    }
}
