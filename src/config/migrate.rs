//! Configuration-file migrations.
//!
//! The config schema grew across versions: the storage backend selector,
//! the sync section and the nested `jira` block were all added later, and
//! early files kept Jira credentials in flat `jira_*` keys. `check` lists
//! what is missing; `run` fills gaps in place without touching keys the
//! user already set.

use serde_yaml::{Mapping, Value};
use std::fs;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Keys every up-to-date config file carries.
const REQUIRED_KEYS: &[&str] = &[
    "backend",
    "database",
    "data_file",
    "remote_url",
    "sync_interval_secs",
    "share_base_url",
    "jira",
];

/// Legacy flat keys → field inside the nested `jira` block.
const LEGACY_JIRA_KEYS: &[(&str, &str)] = &[
    ("jira_url", "url"),
    ("jira_email", "email"),
    ("jira_api_token", "api_token"),
    ("jira_project", "default_project"),
];

fn load_yaml() -> AppResult<Option<Mapping>> {
    let path = super::Config::config_file();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    match value {
        Value::Mapping(map) => Ok(Some(map)),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Report missing top-level keys without modifying anything.
pub fn check() -> AppResult<Vec<String>> {
    let Some(map) = load_yaml()? else {
        return Ok(REQUIRED_KEYS.iter().map(|k| k.to_string()).collect());
    };

    let missing = REQUIRED_KEYS
        .iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .map(|k| k.to_string())
        .collect();
    Ok(missing)
}

fn default_for(key: &str) -> Value {
    let defaults = super::Config::default();
    match key {
        "backend" => Value::String(defaults.backend.as_str().to_string()),
        "database" => Value::String(defaults.database),
        "data_file" => Value::String(defaults.data_file),
        "remote_url" => Value::String(String::new()),
        "sync_interval_secs" => Value::Number(defaults.sync_interval_secs.into()),
        "share_base_url" => Value::String(defaults.share_base_url),
        "jira" => serde_yaml::to_value(defaults.jira).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Fill missing keys with defaults and fold legacy flat `jira_*` keys
/// into the nested `jira` block. Returns true when the file changed.
pub fn run() -> AppResult<bool> {
    let Some(mut map) = load_yaml()? else {
        return Ok(false);
    };

    let mut changed = false;

    for key in REQUIRED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default_for(key));
            info(format!("config migration: added missing key '{}'", key));
            changed = true;
        }
    }

    // Fold legacy flat jira_* keys into the nested block.
    let mut legacy: Vec<(String, Value)> = Vec::new();
    for (old_key, _) in LEGACY_JIRA_KEYS {
        let k = Value::String(old_key.to_string());
        if let Some(v) = map.remove(&k) {
            legacy.push((old_key.to_string(), v));
        }
    }

    if !legacy.is_empty() {
        let jira_key = Value::String("jira".to_string());
        let mut jira = match map.get(&jira_key) {
            Some(Value::Mapping(m)) => m.clone(),
            _ => Mapping::new(),
        };

        for (old_key, value) in legacy {
            let new_field = LEGACY_JIRA_KEYS
                .iter()
                .find(|(o, _)| *o == old_key)
                .map(|(_, n)| *n)
                .unwrap_or(old_key.as_str());
            let nk = Value::String(new_field.to_string());
            if !jira.contains_key(&nk) {
                jira.insert(nk, value);
            }
            info(format!(
                "config migration: moved '{}' into jira.{}",
                old_key, new_field
            ));
        }

        map.insert(jira_key, Value::Mapping(jira));
        changed = true;
    }

    if changed {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))
            .map_err(|e| AppError::Config(format!("serialize error: {}", e)))?;
        fs::write(super::Config::config_file(), serialized)?;
    }

    Ok(changed)
}
