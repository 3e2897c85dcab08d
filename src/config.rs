use dotenvy::dotenv;
use log::{debug, info};
use std::env as stdenv;

use crate::{
    checkout::{CheckoutLocale, RedirectToCheckoutClientOptions},
    error::CheckoutError,
};

pub const SUCCESS_URL_VAR: &str = "CHECKOUT_SUCCESS_URL";
pub const CANCEL_URL_VAR: &str = "CHECKOUT_CANCEL_URL";
pub const LOCALE_VAR: &str = "CHECKOUT_LOCALE";

/// Redirect targets and locale shared by every checkout a deployment starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDefaults {
    pub success_url: String,
    pub cancel_url: String,
    pub locale: Option<CheckoutLocale>,
}

impl CheckoutDefaults {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> Result<Self, CheckoutError> {
        match dotenv() {
            Ok(path) => info!(".env loading at: {}", path.display()),
            Err(e) => debug!("no .env loaded: {}", e),
        }
        Self::from_lookup(|key| stdenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(CheckoutError::MissingVar(key))
        };
        let success_url = required(SUCCESS_URL_VAR)?;
        let cancel_url = required(CANCEL_URL_VAR)?;
        // An empty CHECKOUT_LOCALE means unset.
        let locale = match lookup(LOCALE_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<CheckoutLocale>()?),
            _ => None,
        };
        debug!(
            "checkout defaults: success={} cancel={} locale={:?}",
            success_url, cancel_url, locale
        );
        Ok(Self {
            success_url,
            cancel_url,
            locale,
        })
    }

    /// Options for a checkout with no line items; the locale stays on the defaults.
    pub fn options(&self) -> RedirectToCheckoutClientOptions {
        RedirectToCheckoutClientOptions::new(&self.success_url, &self.cancel_url)
    }
}
