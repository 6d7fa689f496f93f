//! Bring an older configuration file up to the current set of keys.
//!
//! Existing values are never touched; only missing keys are added, with
//! their default values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        // empty file
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn defaults_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Walk `defaults` and copy into `target` every key it lacks.
/// Returns dotted names of the keys that were (or would be) added.
fn merge_missing(target: &mut Mapping, defaults: &Mapping, prefix: &str) -> Vec<String> {
    let mut added = Vec::new();

    for (key, default_val) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        if !target.contains_key(key) {
            target.insert(key.clone(), default_val.clone());
            added.push(name);
            continue;
        }

        if let (Some(Value::Mapping(sub)), Value::Mapping(sub_defaults)) =
            (target.get_mut(key), default_val)
        {
            added.extend(merge_missing(sub, sub_defaults, &name));
        }
    }

    added
}

/// Keys present in the current configuration schema but missing from `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    Ok(merge_missing(&mut current, &defaults_mapping()?, ""))
}

/// Add missing keys to the file at `path`. Returns the keys written; the
/// file is left untouched when nothing is missing.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let added = merge_missing(&mut current, &defaults_mapping()?, "");

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
