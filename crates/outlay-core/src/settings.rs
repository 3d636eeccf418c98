//! Settings store
//!
//! The web client used to keep the monthly budget and profile in browser
//! local storage. Here they live in an explicit store handed by reference
//! to whoever needs it, never ambient global state. Reads and writes are
//! last-write-wins; nothing is persisted.

use std::sync::{Arc, OnceLock, RwLock};

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::{Profile, Settings};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

#[derive(Default)]
struct SettingsInner {
    monthly_budget: Option<f64>,
    profile: Option<Profile>,
}

/// Shared handle to the settings store
#[derive(Clone, Default)]
pub struct SettingsStore {
    inner: Arc<RwLock<SettingsInner>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monthly_budget(&self) -> Option<f64> {
        self.inner.read().unwrap().monthly_budget
    }

    pub fn set_monthly_budget(&self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidInput(
                "Budget must be a non-negative number".to_string(),
            ));
        }
        self.inner.write().unwrap().monthly_budget = Some(amount);
        Ok(())
    }

    pub fn profile(&self) -> Option<Profile> {
        self.inner.read().unwrap().profile.clone()
    }

    pub fn set_profile(&self, profile: Profile) -> Result<()> {
        validate_profile(&profile)?;
        self.inner.write().unwrap().profile = Some(profile);
        Ok(())
    }

    /// Current settings as a single snapshot
    pub fn snapshot(&self) -> Settings {
        let inner = self.inner.read().unwrap();
        Settings {
            monthly_budget: inner.monthly_budget,
            profile: inner.profile.clone(),
        }
    }
}

fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.name.trim().is_empty() || profile.email.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Name and email are required".to_string(),
        ));
    }
    if !email_pattern().is_match(&profile.email) {
        return Err(Error::InvalidInput(format!(
            "Invalid email address: {}",
            profile.email
        )));
    }
    Ok(())
}
