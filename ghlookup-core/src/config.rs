//! Configuration management
//!
//! Settings live in `settings.json` inside the ghlookup directory:
//! ```json
//! {
//!   "api": { "baseUrl": "https://api.github.com", "userAgent": "ghlookup/0.1.0" },
//!   "form": { "defaultKind": "user" }
//! }
//! ```
//! Every key is optional and a key with the wrong type is ignored on its own.
//! `save` only writes `form.defaultKind`; everything else in the file is kept.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use url::Url;

use crate::adapters::github::{DEFAULT_USER_AGENT, GITHUB_API_URL};
use crate::domain::LookupKind;

/// Environment variable overriding `api.baseUrl`
pub const API_BASE_URL_ENV: &str = "GHLOOKUP_API_BASE_URL";

/// Environment variable overriding `form.defaultKind`
pub const DEFAULT_KIND_ENV: &str = "GHLOOKUP_DEFAULT_KIND";

pub const SETTINGS_FILE: &str = "settings.json";

/// Values found in settings.json; a key with the wrong type is dropped alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileSettings {
    base_url: Option<String>,
    user_agent: Option<String>,
    default_kind: Option<LookupKind>,
}

impl FileSettings {
    fn from_json(root: &JsonValue) -> Self {
        Self {
            base_url: string_at(root, "api", "baseUrl"),
            user_agent: string_at(root, "api", "userAgent"),
            default_kind: string_at(root, "form", "defaultKind").and_then(|raw| {
                match raw.parse::<LookupKind>() {
                    Ok(kind) => Some(kind),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring form.defaultKind in settings");
                        None
                    }
                }
            }),
        }
    }
}

/// Read `root[section][key]` as a string, warning when it has another type
fn string_at(root: &JsonValue, section: &str, key: &str) -> Option<String> {
    match root.get(section)?.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => None,
        _ => {
            tracing::warn!(section, key, "ignoring settings key with unexpected type");
            None
        }
    }
}

/// Effective configuration after defaults and environment overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api_base_url: String,
    pub user_agent: String,
    pub default_kind: LookupKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_kind: LookupKind::User,
        }
    }
}

impl Config {
    /// Load config from the ghlookup directory
    ///
    /// A missing or unparseable settings file yields defaults. Environment
    /// variables win over the file.
    pub fn load(dir: &Path) -> Result<Self> {
        let file = match read_settings(dir)? {
            Some(Ok(root)) => FileSettings::from_json(&root),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "settings file is not valid JSON, using defaults");
                FileSettings::default()
            }
            None => FileSettings::default(),
        };

        let base_url = match std::env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => file.base_url.unwrap_or_else(|| GITHUB_API_URL.to_string()),
        };

        let default_kind = match std::env::var(DEFAULT_KIND_ENV) {
            Ok(kind) if !kind.trim().is_empty() => kind
                .parse::<LookupKind>()
                .with_context(|| format!("Invalid {}", DEFAULT_KIND_ENV))?,
            _ => file.default_kind.unwrap_or_default(),
        };

        let user_agent = file
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            api_base_url: normalize_base_url(&base_url)?,
            user_agent,
            default_kind,
        })
    }

    /// Persist the default kind to the ghlookup directory
    ///
    /// Only `form.defaultKind` is written; every other key in the file is
    /// left as it was. Values that came from the environment or from
    /// defaults are never written. Refuses to overwrite a file it cannot parse.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let settings_path = dir.join(SETTINGS_FILE);

        let mut root = match read_settings(dir)? {
            Some(Ok(JsonValue::Object(map))) => map,
            Some(Ok(_)) => anyhow::bail!(
                "Refusing to overwrite {:?}: top level is not a JSON object",
                settings_path
            ),
            Some(Err(e)) => {
                return Err(e).with_context(|| {
                    format!("Refusing to overwrite unparseable {:?}", settings_path)
                })
            }
            None => Map::new(),
        };

        let form = root
            .entry("form")
            .or_insert_with(|| JsonValue::Object(Map::new()));
        if !form.is_object() {
            *form = JsonValue::Object(Map::new());
        }
        if let JsonValue::Object(form) = form {
            form.insert(
                "defaultKind".to_string(),
                JsonValue::String(self.default_kind.as_str().to_string()),
            );
        }

        let content = serde_json::to_string_pretty(&JsonValue::Object(root))?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }
}

/// `None` when there is no settings file, otherwise the parse result
fn read_settings(dir: &Path) -> Result<Option<serde_json::Result<JsonValue>>> {
    let settings_path = dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(Some(serde_json::from_str(&content)))
}

/// Require an absolute http(s) URL and drop trailing slashes
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw.trim()).with_context(|| format!("Invalid API base URL: {}", raw))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("API base URL must use http or https: {}", raw);
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}
