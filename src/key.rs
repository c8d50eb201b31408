// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::error::{Error, Result};

const OPT_PREFIX: char = '-';
const ARG_OPEN: char = '<';
const ARG_CLOSE: char = '>';

/// The recognised forms of a raw usage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// All upper case, for example `FILE` or `<N>`.
    Placeholder,
    /// A positional argument in angle brackets, for example `<path>`.
    Bracketed,
    /// An option, for example `-v` or `--dry-run`.
    Dashed,
    /// A bare word with a boolean value (a command).
    Flag,
}

/// Returns the name inside a `<name>` key.
fn bracket_inner(key: &str) -> Option<&str> {
    let rest = key.strip_prefix(ARG_OPEN)?;
    let end = rest.rfind(ARG_CLOSE)?;

    Some(&rest[..end])
}

/// Work out which form `key` takes.
///
/// `is_flag` says whether the raw value is boolean (or an occurrence count);
/// bare words are only accepted in that case.
pub fn classify_key(key: &str, is_flag: bool) -> Result<KeyShape> {
    if key.to_uppercase() == key {
        return Ok(KeyShape::Placeholder);
    }

    if bracket_inner(key).is_some() {
        return Ok(KeyShape::Bracketed);
    }

    if key.len() > 1 && key.starts_with(OPT_PREFIX) {
        return Ok(KeyShape::Dashed);
    }

    if is_flag {
        return Ok(KeyShape::Flag);
    }

    Err(Error::KeyParse(key.into()))
}

/// Convert a raw usage key into the name callers look values up by.
///
/// | raw key      | normalized |
/// |--------------|------------|
/// | `FILE`       | `file`     |
/// | `<N>`        | `n`        |
/// | `<path>`     | `path`     |
/// | `--dry-run`  | `dry-run`  |
/// | `-v`         | `v`        |
/// | `run` (flag) | `run`      |
pub fn normalize_key(key: &str, is_flag: bool) -> Result<String> {
    let name = match classify_key(key, is_flag)? {
        KeyShape::Placeholder => {
            let lower = key.to_lowercase();
            match bracket_inner(&lower) {
                Some(inner) => inner.to_string(),
                None => lower,
            }
        }
        KeyShape::Bracketed => bracket_inner(key).unwrap_or(key).to_string(),
        KeyShape::Dashed => key.trim_start_matches(OPT_PREFIX).to_string(),
        KeyShape::Flag => key.to_string(),
    };

    Ok(name)
}
