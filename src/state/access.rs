//! Owner mode gating.
//!
//! The PIN is stored and compared in plain text in the local store. This is
//! UI gating only and not a security boundary: anyone with access to the
//! data directory can read or replace it.

use super::storage::{KeyValueStore, ADMIN_SESSION_KEY, PIN_KEY};
use crate::error::AppResult;

/// Admin flag (session scope) plus the owner PIN (durable scope)
#[derive(Debug, Clone)]
pub struct AccessControl {
    is_admin: bool,
    owner_pin: String,
}

impl AccessControl {
    /// Restore access state at startup.
    ///
    /// A missing PIN is seeded with `default_pin` and persisted. The admin
    /// flag is restored from the session store.
    pub fn load(
        durable: &mut dyn KeyValueStore,
        session: &dyn KeyValueStore,
        default_pin: &str,
    ) -> AppResult<Self> {
        let owner_pin = match durable.get(PIN_KEY)? {
            Some(pin) if !pin.is_empty() => pin,
            _ => {
                durable.set(PIN_KEY, default_pin)?;
                tracing::info!("🔑 No owner PIN stored, seeded the configured default");
                default_pin.to_string()
            }
        };

        let is_admin = session.get(ADMIN_SESSION_KEY)?.as_deref() == Some("true");

        Ok(Self { is_admin, owner_pin })
    }

    pub fn is_unlocked(&self) -> bool {
        self.is_admin
    }

    /// Leave owner mode
    pub fn lock(&mut self, session: &mut dyn KeyValueStore) -> AppResult<()> {
        self.is_admin = false;
        session.set(ADMIN_SESSION_KEY, "false")
    }

    /// Enter owner mode iff `candidate` equals the stored PIN exactly.
    pub fn attempt_unlock(&mut self, candidate: &str, session: &mut dyn KeyValueStore) -> AppResult<bool> {
        if candidate != self.owner_pin {
            tracing::info!("🔒 Owner login rejected");
            return Ok(false);
        }

        session.set(ADMIN_SESSION_KEY, "true")?;
        self.is_admin = true;
        tracing::info!("🔓 Owner studio unlocked");
        Ok(true)
    }

    /// Replace the stored PIN. The caller is responsible for gating.
    pub fn change_pin(&mut self, new_pin: &str, durable: &mut dyn KeyValueStore) -> AppResult<()> {
        durable.set(PIN_KEY, new_pin)?;
        self.owner_pin = new_pin.to_string();
        tracing::info!("🔑 Owner PIN updated");
        Ok(())
    }
}

/// Login / PIN-change dialog state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PinDialog {
    #[default]
    Closed,
    AwaitingLoginPin { input: String, error: Option<String> },
    AwaitingNewPin { input: String, error: Option<String> },
}

impl PinDialog {
    pub fn login() -> Self {
        PinDialog::AwaitingLoginPin {
            input: String::new(),
            error: None,
        }
    }

    pub fn change() -> Self {
        PinDialog::AwaitingNewPin {
            input: String::new(),
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PinDialog::Closed)
    }

    pub fn input(&self) -> &str {
        match self {
            PinDialog::Closed => "",
            PinDialog::AwaitingLoginPin { input, .. } | PinDialog::AwaitingNewPin { input, .. } => input,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PinDialog::Closed => None,
            PinDialog::AwaitingLoginPin { error, .. } | PinDialog::AwaitingNewPin { error, .. } => {
                error.as_deref()
            }
        }
    }

    /// Replace the typed text; a previous inline error is cleared
    pub fn set_input(&mut self, value: String) {
        match self {
            PinDialog::Closed => {}
            PinDialog::AwaitingLoginPin { input, error } | PinDialog::AwaitingNewPin { input, error } => {
                *input = value;
                *error = None;
            }
        }
    }

    pub fn set_error(&mut self, message: &str) {
        match self {
            PinDialog::Closed => {}
            PinDialog::AwaitingLoginPin { error, .. } | PinDialog::AwaitingNewPin { error, .. } => {
                *error = Some(message.to_string());
            }
        }
    }
}

/// What a dialog submission led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinOutcome {
    Unlocked,
    Rejected,
    PinChanged,
    /// Nothing to do (dialog closed or empty new PIN)
    Ignored,
}

/// Apply a submission of the current dialog input.
///
/// - `AwaitingLoginPin`: closes on a correct PIN, otherwise stays open with an
///   inline error. No attempt limit.
/// - `AwaitingNewPin`: any non-empty input replaces the PIN and closes.
pub fn submit_pin(
    dialog: &mut PinDialog,
    access: &mut AccessControl,
    durable: &mut dyn KeyValueStore,
    session: &mut dyn KeyValueStore,
) -> AppResult<PinOutcome> {
    let result = match &mut *dialog {
        PinDialog::Closed => return Ok(PinOutcome::Ignored),
        PinDialog::AwaitingLoginPin { input, .. } => {
            let candidate = input.clone();
            access.attempt_unlock(&candidate, session).map(|unlocked| {
                if unlocked {
                    *dialog = PinDialog::Closed;
                    PinOutcome::Unlocked
                } else {
                    dialog.set_input(String::new());
                    dialog.set_error("Incorrect security code");
                    PinOutcome::Rejected
                }
            })
        }
        PinDialog::AwaitingNewPin { input, .. } => {
            if input.is_empty() {
                dialog.set_error("Security code cannot be empty");
                return Ok(PinOutcome::Ignored);
            }
            let new_pin = input.clone();
            access.change_pin(&new_pin, durable).map(|()| {
                *dialog = PinDialog::Closed;
                PinOutcome::PinChanged
            })
        }
    };

    // A failed write keeps the dialog open with the typed input
    if let Err(err) = &result {
        dialog.set_error(&format!("Could not save: {err}"));
    }
    result
}
