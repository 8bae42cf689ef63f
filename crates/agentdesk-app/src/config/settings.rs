//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use agentdesk_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "agentdesk";

const DEFAULT_CONFIG: &str = r#"# agentdesk configuration

[agent]
# Shown in the sidebar and the settings popover
id = "88219"
name = "Yang Huai"
title = "Senior Agent"

[calls]
# Lines available in the start-call dialog; the first is preselected
outbound_numbers = ["025-88219999", "025-88880000"]
# video | audio
default_kind = "video"

[timers]
# Simulated back-end delays in milliseconds
id_scan_ms = 1500
face_match_ms = 2000
toast_ms = 3000
sign_in_ms = 500

[ui]
tick_rate_ms = 50
# Clicking outside the header closes popovers
mouse = true

[fixtures]
# JSON fixture file; leave empty for the built-in data
path = ""
"#;

/// `~/.config/agentdesk/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`.
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults, so a bad config never blocks startup.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `path` unless a file exists there.
///
/// Returns `true` if a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        debug!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
