// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::key::normalize_key;
use crate::literal::parse_literal;
use crate::usage::{Argv, DocoptParser, Parsed, RawArgs, RawValue, UsageParser};
use crate::value::Value;

/// Raw keys of the automatic help flag.
const HELP_KEYS: [&str; 2] = ["-h", "--help"];

/// The normalized arguments, keyed by their cleaned-up names.
pub type Arguments = BTreeMap<String, Value>;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Handle `-h` and `--help` automatically and drop the `help` entry
    /// from the result.
    default_help: bool,

    /// Text reported when `--version` is specified.
    version: Option<String>,

    /// Treat everything after the first positional argument as positional.
    options_first: bool,

    /// Skip unrecognised keys (with a warning) instead of failing.
    lenient_keys: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_help: true,
            version: None,
            options_first: false,
            lenient_keys: false,
        }
    }
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify whether `-h`/`--help` are handled automatically (the default).
    pub fn default_help(self, default_help: bool) -> Self {
        Settings {
            default_help,
            ..self
        }
    }

    /// Leave `-h`/`--help` to the caller: they are returned like any
    /// other flag.
    pub fn no_default_help(self) -> Self {
        self.default_help(false)
    }

    /// Specify the version to report when `--version` is specified.
    pub fn version<V: fmt::Display>(self, version: V) -> Self {
        Settings {
            version: Some(version.to_string()),
            ..self
        }
    }

    /// Require options to precede positional arguments, so options and
    /// positional arguments cannot be intermixed.
    pub fn options_first(self) -> Self {
        Settings {
            options_first: true,
            ..self
        }
    }

    /// Skip keys that cannot be normalized rather than erroring.
    ///
    /// A warning is logged for each key skipped.
    pub fn lenient_keys(self) -> Self {
        Settings {
            lenient_keys: true,
            ..self
        }
    }

    /// Returns true if help is handled automatically.
    pub fn help_enabled(&self) -> bool {
        self.default_help
    }

    /// Returns the version text, if one was specified.
    pub fn version_text(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns true if options must precede positional arguments.
    pub fn is_options_first(&self) -> bool {
        self.options_first
    }

    /// Returns true if unrecognised keys are skipped.
    pub fn is_lenient(&self) -> bool {
        self.lenient_keys
    }
}

/// What a successful parse produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The normalized arguments.
    Args(Arguments),
    /// Help was requested. Holds the text to display.
    Help(String),
    /// The version was requested. Holds the text to display.
    Version(String),
}

impl Outcome {
    /// Returns the arguments, or [None] for help and version requests.
    pub fn args(self) -> Option<Arguments> {
        match self {
            Outcome::Args(args) => Some(args),
            _ => None,
        }
    }

    /// Returns the arguments. For help and version requests, print the text
    /// to stdout and exit successfully.
    pub fn or_exit(self) -> Arguments {
        match self {
            Outcome::Args(args) => args,
            Outcome::Help(text) | Outcome::Version(text) => {
                println!("{}", text);
                std::process::exit(0)
            }
        }
    }
}

fn coerce_str(text: String) -> Value {
    match parse_literal(&text) {
        Some(value) => value,
        None => {
            trace!(value = %text, "not a literal, keeping string");
            Value::Str(text)
        }
    }
}

/// Convert a raw value into a [Value], or [None] if it was not specified.
///
/// Strings that are valid literals become the literal's value, other strings
/// are kept as they are. List elements are converted individually.
pub fn coerce(raw: RawValue) -> Option<Value> {
    match raw {
        RawValue::Switch(b) => Some(Value::Bool(b)),
        RawValue::Count(n) => Some(Value::Int(i64::try_from(n).unwrap_or(i64::MAX))),
        RawValue::Plain(None) => None,
        RawValue::Plain(Some(text)) => Some(coerce_str(text)),
        RawValue::List(items) => Some(Value::List(items.into_iter().map(coerce_str).collect())),
    }
}

/// Rename and convert every specified entry of `raw`.
///
/// Arguments that were not specified are left out entirely so they never
/// override a caller's own defaults.
pub fn normalize_raw(raw: RawArgs, settings: &Settings) -> Result<Arguments> {
    let mut args = Arguments::new();

    for (key, value) in raw {
        if settings.default_help && HELP_KEYS.contains(&key.as_str()) {
            continue;
        }

        if value.is_absent() {
            trace!(key = %key, "argument not specified");
            continue;
        }

        let name = match normalize_key(&key, value.is_flag()) {
            Ok(name) => name,
            Err(e) if settings.lenient_keys => {
                warn!(key = %key, error = %e, "skipping argument");
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(value) = coerce(value) {
            debug!(key = %key, name = %name, value = %value, "normalized argument");

            if args.insert(name.clone(), value).is_some() {
                warn!(key = %key, name = %name, "argument name used more than once");
            }
        }
    }

    Ok(args)
}

/// Parses arguments with a [UsageParser] and normalizes the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalizer<P> {
    parser: P,
    settings: Settings,
}

impl<P: UsageParser> Normalizer<P> {
    /// Create a normalizer using `parser` and the default [Settings].
    pub fn new(parser: P) -> Self {
        Normalizer {
            parser,
            settings: Settings::default(),
        }
    }

    /// Specify any settings.
    pub fn settings(self, settings: Settings) -> Self {
        Normalizer { settings, ..self }
    }

    /// Parse `argv` against the usage text `spec` and normalize the result.
    ///
    /// # Return value
    ///
    /// - [Outcome::Args] with the normalized arguments.
    /// - [Outcome::Help] or [Outcome::Version] if those were requested. The
    ///   caller decides whether to print and exit (see [Outcome::or_exit]).
    /// - An error if the usage text is invalid, `argv` doesn't match it, or
    ///   a key cannot be normalized.
    pub fn normalize<A: Into<Argv>>(&self, spec: &str, argv: A) -> Result<Outcome> {
        let argv = argv.into().into_tokens();

        let raw = match self.parser.parse(spec, &argv, &self.settings)? {
            Parsed::Matched(raw) => raw,
            Parsed::Help(text) => {
                debug!("help requested");
                return Ok(Outcome::Help(text));
            }
            Parsed::Version(text) => {
                debug!("version requested");
                return Ok(Outcome::Version(text));
            }
        };

        normalize_raw(raw, &self.settings).map(Outcome::Args)
    }
}

/// Parse `argv` against the docopt usage text `spec` and normalize it.
///
/// # Examples
///
/// ```rust
/// use docargs::{normalize, Outcome, Settings, Value};
///
/// let spec = "Usage: prog [--verbose] <path>";
///
/// let outcome = normalize(spec, "--verbose /tmp/x", Settings::default()).unwrap();
/// let args = outcome.args().unwrap();
///
/// assert_eq!(args["path"], Value::Str("/tmp/x".into()));
/// assert_eq!(args["verbose"], Value::Bool(true));
/// ```
pub fn normalize<A: Into<Argv>>(spec: &str, argv: A, settings: Settings) -> Result<Outcome> {
    Normalizer::new(DocoptParser::new())
        .settings(settings)
        .normalize(spec, argv)
}

/// Parse the process arguments against `spec` with the default settings.
pub fn docopt_args(spec: &str) -> Result<Outcome> {
    normalize(spec, Argv::Process, Settings::default())
}
