// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Usage text errors (programmer error)
    //------------------------------
    /// The usage text could not be understood by the usage parser.
    #[error("invalid usage specification: {0}")]
    Specification(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// The argument vector does not match any usage pattern.
    #[error("{message}")]
    ArgumentMismatch {
        /// What went wrong.
        message: String,
        /// The usage section to show the user.
        usage: String,
    },

    //------------------------------
    // Normalizer errors
    //------------------------------
    /// A raw key is not a placeholder, `<name>`, dashed option or flag.
    #[error("couldn't parse argument {0:?}")]
    KeyParse(String),
}

impl Error {
    /// Print the error to stderr (with the usage section for argument
    /// mismatches) and exit with status 1.
    pub fn exit(&self) -> ! {
        match self {
            Error::ArgumentMismatch { message, usage } if !usage.is_empty() => {
                eprintln!("{}\n\n{}", message, usage.trim())
            }
            _ => eprintln!("{}", self),
        }

        std::process::exit(1)
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
