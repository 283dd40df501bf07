use std::{collections::HashMap, fs};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const SETTINGS_FILE: &str = "directory.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

/// Defaults, then `directory.toml` in the working directory, then the environment.
pub fn load_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("DIRECTORY_API_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings
}

fn apply_file_settings(settings: &mut ClientSettings, raw: &str) {
    match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
        }
        Err(err) => tracing::warn!("ignoring unreadable {SETTINGS_FILE}: {err}"),
    }
}

pub fn prepare_api_base_url(raw_base_url: &str) -> anyhow::Result<String> {
    let base_url = normalize_api_base_url(raw_base_url);
    let parsed =
        Url::parse(&base_url).with_context(|| format!("invalid api base url '{base_url}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "api base url '{base_url}' must use http or https, not '{}'",
            parsed.scheme()
        );
    }
    Ok(base_url)
}

fn normalize_api_base_url(raw_base_url: &str) -> String {
    let trimmed = raw_base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return ClientSettings::default().api_base_url;
    }
    trimmed.to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
