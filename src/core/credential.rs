// src/core/credential.rs
//! Login credential: validated, cipher-encoded, kept in the secure store
//!
//! Only encoded text ever reaches the [`SecretStore`]. Cleartext is handed back
//! inside a zeroizing [`Password`].

use tracing::debug;

use crate::aliases::Password;
use crate::consts::PASSWORD_KEY;
use crate::core::cipher::{decode, encode};
use crate::db::SecretStore;
use crate::enums::PasswordStatus;
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Login rule: at least one ASCII uppercase and one ASCII lowercase letter
pub fn check_password(candidate: &str) -> PasswordStatus {
    let has_upper = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = candidate.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        PasswordStatus::Valid
    } else {
        PasswordStatus::MissingCase
    }
}

pub struct CredentialVault<S: SecretStore> {
    store: S,
}

impl<S: SecretStore> CredentialVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_ref(&self) -> &S {
        &self.store
    }

    /// Validate, encode and persist `password`, replacing any previous one
    pub fn store(&mut self, password: &Password) -> Result<()> {
        if !check_password(password.expose_secret()).is_valid() {
            return Err(CoreError::InvalidInput(
                "password needs an uppercase and a lowercase letter",
            ));
        }
        let encoded = encode(password.expose_secret());
        self.store.set(PASSWORD_KEY, &encoded)?;
        debug!("credential stored");
        Ok(())
    }

    /// Decoded credential, or `None` when nothing was stored
    pub fn recover(&self) -> Result<Option<Password>> {
        let stored = self.store.get(PASSWORD_KEY)?;
        Ok(stored.map(|encoded| Password::new(decode(&encoded))))
    }

    pub fn is_set(&self) -> Result<bool> {
        Ok(self.store.get(PASSWORD_KEY)?.is_some())
    }

    /// Whether `candidate` matches the stored credential; `false` when none is stored
    pub fn verify(&self, candidate: &Password) -> Result<bool> {
        Ok(self
            .recover()?
            .is_some_and(|stored| stored.expose_secret() == candidate.expose_secret()))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(PASSWORD_KEY)?;
        Ok(())
    }
}
