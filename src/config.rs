//! Environment configuration for credentials.
//!
//! Both keys are inspected before any error is reported, so a single failure
//! names every key that is unset or empty.

use crate::tts::Auth;
use crate::{Error, ErrorContext, Result};
use std::env;

/// Environment key holding the service username.
pub const ENV_USERNAME_KEY: &str = "WATSON_TEXT_TO_SPEECH_USERNAME";
/// Environment key holding the service password.
pub const ENV_PASSWORD_KEY: &str = "WATSON_TEXT_TO_SPEECH_PASSWORD";

/// Read credentials from the process environment.
pub fn auth_from_env() -> Result<Auth> {
    auth_from_lookup(|key| env::var(key).ok())
}

/// Read credentials through an arbitrary key lookup. Empty values count as unset.
pub fn auth_from_lookup<F>(lookup: F) -> Result<Auth>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let username = required(&lookup, ENV_USERNAME_KEY, &mut missing);
    let password = required(&lookup, ENV_PASSWORD_KEY, &mut missing);

    match (username, password) {
        (Some(username), Some(password)) => Ok(Auth::new(username, password)),
        _ => {
            let message = missing
                .iter()
                .map(|key| format!("unset {:?}", key))
                .collect::<Vec<_>>()
                .join("; ");
            Err(Error::configuration_with_context(
                message,
                ErrorContext::new()
                    .with_details(format!("missing keys: {}", missing.join(", ")))
                    .with_source("config"),
            ))
        }
    }
}

fn required<F>(lookup: &F, key: &'static str, missing: &mut Vec<&'static str>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(key);
            None
        }
    }
}
