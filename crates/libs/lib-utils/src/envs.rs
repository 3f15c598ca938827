//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, treating unset and blank as `None`.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable.
///
/// Unset or blank yields `Ok(None)`; a value that fails to parse is an error.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; the process environment is shared.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );
    }

    #[test]
    fn test_get_env_parse_opt() {
        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_OPT_UNSET"), Ok(None));

        env::set_var("LIB_UTILS_TEST_OPT_BLANK", "  ");
        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_OPT_BLANK"), Ok(None));

        env::set_var("LIB_UTILS_TEST_OPT_SET", " 30 ");
        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_OPT_SET"), Ok(Some(30)));

        env::set_var("LIB_UTILS_TEST_OPT_BAD", "ten");
        assert_eq!(
            get_env_parse_opt::<u64>("LIB_UTILS_TEST_OPT_BAD"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_OPT_BAD"))
        );
    }
}
