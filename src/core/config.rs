use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open `path` in `editor`, then `$EDITOR`/`$VISUAL`, then nano/notepad.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let ok = Command::new(&ed)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if ok {
            success(format!("Configuration file edited using '{}'", ed));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            ed, default_editor
        ));

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, status
            )));
        }

        success(format!(
            "Configuration file edited using fallback '{}'",
            default_editor
        ));
        Ok(())
    }

    /// Report keys the file lacks. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `hoslogger init`.",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for key in &missing {
                warning(format!("Missing key: {}", key));
            }
            info("Run `hoslogger config --migrate` to add them with default values.");
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }

        let added = migrate::migrate_config_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added to configuration: {}", added.join(", ")));
        }
        Ok(added)
    }
}
