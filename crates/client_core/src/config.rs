use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::protocol::{is_agenda_slug, DEFAULT_AGENDA};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://playground.4geeks.com/contact";
pub const SETTINGS_FILE: &str = "contacts.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub agenda: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            agenda: DEFAULT_AGENDA.into(),
        }
    }
}

/// Keys recognised in `contacts.toml`; anything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_base_url: Option<String>,
    agenda: Option<String>,
}

/// Defaults, then `contacts.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    apply_file(&mut settings, Path::new(SETTINGS_FILE));
    apply_env(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file(settings: &mut Settings, path: &Path) {
    let Ok(raw) = fs::read_to_string(path) else {
        return;
    };
    match toml::from_str::<SettingsFile>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.api_base_url {
                settings.api_base_url = v;
            }
            if let Some(v) = file_cfg.agenda {
                settings.agenda = v;
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable settings file: {err}");
        }
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("CONTACTS_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = var("CONTACTS_AGENDA") {
        settings.agenda = v;
    }
    if let Some(v) = var("APP__AGENDA") {
        settings.agenda = v;
    }
}

impl Settings {
    /// Applies command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, api_base_url: Option<String>, agenda: Option<String>) -> Self {
        if let Some(v) = api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = agenda {
            self.agenda = v;
        }
        self
    }

    pub fn validate(mut self) -> anyhow::Result<Self> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&trimmed)
            .with_context(|| format!("invalid contact service url '{}'", self.api_base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "contact service url must use http or https, got '{}'",
                parsed.scheme()
            );
        }
        self.api_base_url = trimmed;

        self.agenda = self.agenda.trim().to_string();
        if self.agenda.is_empty() {
            bail!("agenda name must not be empty");
        }
        if !is_agenda_slug(&self.agenda) {
            bail!(
                "agenda name '{}' may only contain ASCII letters, digits, '-', '_' and '.'",
                self.agenda
            );
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
