//! Helpers for reading typed values out of environment variables.
//!
//! Unset variables fall back to a default (or `None`). Variables that are set
//! but can't be parsed are reported as errors instead of being silently
//! replaced by the default.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvParseError {
    #[error("Invalid value for environment variable {name}: '{value}'")]
    ParseInt {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Environment variable {name} is not valid unicode")]
    NotUnicode { name: String },
}

fn var(name: &str) -> Result<Option<String>, EnvParseError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(EnvParseError::NotUnicode {
            name: name.to_string(),
        }),
    }
}

fn parse_value<T: FromStr<Err = ParseIntError>>(
    name: &str,
    value: Option<String>,
) -> Result<Option<T>, EnvParseError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|source| EnvParseError::ParseInt {
                    name: name.to_string(),
                    value,
                    source,
                })
        })
        .transpose()
}

/// Reads a string environment variable, falling back to `default` when it is
/// unset or not valid unicode.
#[must_use]
pub fn default_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// # Errors
///
/// * If the environment variable is set to something that isn't a valid `u16`
pub fn default_env_u16(name: &str, default: u16) -> Result<u16, EnvParseError> {
    Ok(parse_value(name, var(name)?)?.unwrap_or(default))
}

/// # Errors
///
/// * If the environment variable is set to something that isn't a valid `usize`
pub fn option_env_usize(name: &str) -> Result<Option<usize>, EnvParseError> {
    parse_value(name, var(name)?)
}
