// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Typed, tidy argument maps from [docopt](http://docopt.org) usage text.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Key names](#key-names)
//! * [Values](#values)
//! * [Help and version](#help-and-version)
//! * [Errors](#errors)
//! * [Logging](#logging)
//!
//! ---
//!
//! # Overview
//!
//! The [docopt](https://crates.io/crates/docopt) crate parses a command line
//! against the usage text of a program and returns a map keyed by the
//! literal usage tokens (`--verbose`, `<path>`, `NAME`) with string, boolean,
//! count or list values.
//!
//! This crate post-processes that map so it can be used directly:
//!
//! - Keys lose their dashes and angle brackets and placeholders are folded to
//!   lower case (`--verbose` -> `verbose`, `<path>` -> `path`, `NAME` -> `name`).
//! - Values that are valid literals are converted (`"42"` -> `42`,
//!   `"[1, 2]"` -> a list). Anything else is kept exactly as given.
//! - Options that were not specified are left out, so they can never
//!   override a default the caller has chosen.
//!
//! # Quickstart
//!
//! ```rust
//! use docargs::{normalize, Outcome, Settings, Value};
//!
//! const USAGE: &str = "
//! Usage: prog [--verbose] [--count=<n>] <path>
//! ";
//!
//! let outcome = normalize(USAGE, vec!["--verbose", "/tmp/x"], Settings::default()).unwrap();
//!
//! match outcome {
//!     Outcome::Args(args) => {
//!         assert_eq!(args.get("verbose"), Some(&Value::Bool(true)));
//!         assert_eq!(args.get("path"), Some(&Value::Str("/tmp/x".into())));
//!
//!         // Not specified, so not present.
//!         assert!(args.get("count").is_none());
//!     }
//!     Outcome::Help(text) | Outcome::Version(text) => println!("{}", text),
//! }
//! ```
//!
//! In a program, parse the real command line and let the crate deal with
//! help, version and usage errors:
//!
//! ```rust,no_run
//! # const USAGE: &str = "Usage: prog <path>";
//! let args = docargs::docopt_args(USAGE)
//!     .unwrap_or_else(|e| e.exit())
//!     .or_exit();
//! ```
//!
//! # Details
//!
//! ## Key names
//!
//! Each raw key is checked against these rules in order:
//!
//! 1. Entirely upper case (`FILE`, `<N>`): folded to lower case, with any
//!    angle brackets removed.
//! 1. Angle brackets (`<path>`): the name inside the brackets.
//! 1. Leading dashes (`-v`, `--dry-run`): the name after the dashes.
//! 1. A boolean or counted value (a command such as `run`): unchanged.
//!
//! Any other key is an [Error::KeyParse], unless
//! [Settings::lenient_keys] is set, in which case it is skipped.
//!
//! ## Values
//!
//! | raw value              | [Value]                                   |
//! |------------------------|-------------------------------------------|
//! | flag / command         | [Value::Bool]                             |
//! | repeated flag          | [Value::Int] (the count)                  |
//! | not specified          | *(entry omitted)*                         |
//! | literal string         | the literal, see [parse_literal]          |
//! | any other string       | [Value::Str], unchanged                   |
//! | repeated argument      | [Value::List] of the above                |
//!
//! The literal grammar only covers literal syntax (numbers, quoted strings,
//! `None`, `True`, `False`, lists, tuples, sets and dicts). Nothing is ever
//! evaluated.
//!
//! ## Help and version
//!
//! With [Settings::default_help] (the default), `-h` and `--help` produce
//! [Outcome::Help] and the `help` entry is never part of the arguments.
//! With [Settings::version], `--version` produces [Outcome::Version].
//! Nothing is printed and the process is never terminated unless the
//! caller asks for it with [Outcome::or_exit].
//!
//! ## Errors
//!
//! - [Error::Specification]: the usage text itself is malformed.
//! - [Error::ArgumentMismatch]: the command line doesn't match the usage
//!   text. [Error::exit] prints the message and usage and exits.
//! - [Error::KeyParse]: a key that fits none of the rules above.
//!
//! ## Logging
//!
//! Normalization decisions are reported with
//! [tracing](https://crates.io/crates/tracing) events at `debug` and `trace`
//! level; skipped keys at `warn` level.
//!
//! ## Other parsers
//!
//! [normalize] uses [DocoptParser]. To normalize the output of another
//! usage parser, implement [UsageParser] for it and use a [Normalizer].

mod error;
mod key;
mod literal;
mod normalize;
mod usage;
mod value;

pub use error::{Error, Result};

pub use key::{classify_key, normalize_key, KeyShape};
pub use literal::parse_literal;
pub use normalize::{
    coerce, docopt_args, normalize, normalize_raw, Arguments, Normalizer, Outcome, Settings,
};
pub use usage::{get_args, Argv, DocoptParser, Parsed, RawArgs, RawValue, UsageParser};
pub use value::Value;
