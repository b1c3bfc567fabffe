//! Panel Configuration
//!
//! API origin, demo identifier and public app URL, injected instead of
//! hard-coded so each environment can point the panel elsewhere.

use reqwest::Url;
use tracing::{info, warn};

use crate::error::{CrmError, CrmResult};

pub const API_BASE_KEY: &str = "MATTRIX_API_BASE";
pub const DEMO_USER_ID_KEY: &str = "MATTRIX_DEMO_USER_ID";
pub const APP_URL_KEY: &str = "MATTRIX_APP_URL";

const DEFAULT_API_BASE: &str = "https://mattrix-production.up.railway.app/api";
const DEFAULT_DEMO_USER_ID: &str = "demo-user-123";
const DEFAULT_APP_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    /// Base of every endpoint, always ending in `/`
    pub api_base: Url,
    /// Identifier used for all API calls
    pub demo_user_id: String,
    /// Public URL of the mini-app, used for page metadata
    pub app_url: Url,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_base: parse_base(DEFAULT_API_BASE).expect("default API base is valid"),
            demo_user_id: DEFAULT_DEMO_USER_ID.to_string(),
            app_url: Url::parse(DEFAULT_APP_URL).expect("default app URL is valid"),
        }
    }
}

impl CrmConfig {
    /// Load from an arbitrary key lookup; missing keys use defaults.
    pub fn load<F>(lookup: F) -> CrmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = try_load(&lookup, API_BASE_KEY, DEFAULT_API_BASE);
        let demo_user_id = try_load(&lookup, DEMO_USER_ID_KEY, DEFAULT_DEMO_USER_ID);
        let app_url = try_load(&lookup, APP_URL_KEY, DEFAULT_APP_URL);

        Ok(Self {
            api_base: parse_base(&api_base)?,
            demo_user_id: demo_user_id.trim().to_string(),
            app_url: Url::parse(app_url.trim())
                .map_err(|e| CrmError::Config(format!("{APP_URL_KEY}: {e}")))?,
        })
    }

    /// Process environment (native builds and tests)
    pub fn from_env() -> CrmResult<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Values baked in at compile time (browser builds)
    pub fn from_build_env() -> CrmResult<Self> {
        Self::load(|key| {
            let baked = match key {
                API_BASE_KEY => option_env!("MATTRIX_API_BASE"),
                DEMO_USER_ID_KEY => option_env!("MATTRIX_DEMO_USER_ID"),
                APP_URL_KEY => option_env!("MATTRIX_APP_URL"),
                _ => None,
            };
            baked.map(str::to_string)
        })
    }

    /// Join a relative endpoint path onto the API base.
    pub fn endpoint(&self, path: &str) -> CrmResult<Url> {
        self.api_base
            .join(path.trim_start_matches('/'))
            .map_err(|e| CrmError::Config(format!("bad endpoint {path}: {e}")))
    }
}

fn try_load<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value,
        Some(_) => {
            warn!("{key} is blank, using default: {default}");
            default.to_string()
        }
        None => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

/// Trailing slash matters for `Url::join`: without it the last segment is replaced.
fn parse_base(raw: &str) -> CrmResult<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| CrmError::Config(format!("{API_BASE_KEY}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(CrmError::Config(format!("{API_BASE_KEY}: {raw} cannot be a base URL")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CrmConfig::load(|_| None).unwrap();
        assert_eq!(config, CrmConfig::default());
        assert_eq!(config.demo_user_id, "demo-user-123");
        assert_eq!(config.api_base.as_str(), "https://mattrix-production.up.railway.app/api/");
    }

    #[test]
    fn test_overrides() {
        let config = CrmConfig::load(lookup_from(&[
            (API_BASE_KEY, "http://localhost:8080/api/"),
            (DEMO_USER_ID_KEY, "tester"),
            (APP_URL_KEY, "https://mattrix.example"),
        ]))
        .unwrap();
        assert_eq!(config.demo_user_id, "tester");
        assert_eq!(
            config.endpoint("/contacts").unwrap().as_str(),
            "http://localhost:8080/api/contacts"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = CrmConfig::load(lookup_from(&[(API_BASE_KEY, "https://host/v1/api")])).unwrap();
        assert_eq!(config.endpoint("stats/u1").unwrap().as_str(), "https://host/v1/api/stats/u1");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            CrmConfig::load(lookup_from(&[(API_BASE_KEY, "not a url")])),
            Err(CrmError::Config(_))
        ));
        assert!(matches!(
            CrmConfig::load(lookup_from(&[(APP_URL_KEY, "::")])),
            Err(CrmError::Config(_))
        ));
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = CrmConfig::load(lookup_from(&[(DEMO_USER_ID_KEY, "   ")])).unwrap();
        assert_eq!(config.demo_user_id, "demo-user-123");
    }
}
