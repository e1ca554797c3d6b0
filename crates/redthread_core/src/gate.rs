//! Password gate in front of the journal.
//!
//! A plain shared-secret comparison. It issues no session or token; every
//! entry point checks again.

use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    WrongPassword,
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongPassword => f.write_str("Wrong password."),
        }
    }
}

impl Error for GateError {}

pub struct PasswordGate {
    secret: String,
}

impl PasswordGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Succeeds only on an exact match.
    pub fn unlock(&self, attempt: &str) -> Result<(), GateError> {
        if attempt == self.secret {
            return Ok(());
        }
        warn!("event=gate_unlock module=gate status=error error_code=wrong_password");
        Err(GateError::WrongPassword)
    }
}
