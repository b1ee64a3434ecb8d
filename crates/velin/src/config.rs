use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub editor: EditorConfig,
}

/// Named colors for the four styled screen regions. Values are ratatui
/// color names ("yellow", "blue", ...) resolved by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub status_foreground: String,
    pub status_background: String,
    pub command_foreground: String,
    pub suggestion_foreground: String,
    pub error_foreground: String,
    pub error_background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    pub line_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme {
                status_foreground: String::from("black"),
                status_background: String::from("white"),
                command_foreground: String::from("yellow"),
                suggestion_foreground: String::from("blue"),
                error_foreground: String::from("red"),
                error_background: String::from("white"),
            },
            editor: EditorConfig { line_numbers: false },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => {
                        if content.trim().is_empty() {
                            log::warn!("Config file is empty, creating new one");
                            let default_config = Self::default();
                            let _ = default_config.save();
                            return Ok(default_config);
                        }

                        match serde_json::from_str::<Self>(&content) {
                            Ok(mut config) => {
                                config.validate();
                                log::info!("Loaded config from: {}", config_path.display());
                                return Ok(config);
                            }
                            Err(json_err) => {
                                log::error!("Failed to parse config file: {}", json_err);

                                // Keep the broken file around for inspection.
                                let backup_path = config_path.with_extension("bak");
                                if let Err(e) = std::fs::copy(&config_path, &backup_path) {
                                    log::warn!("Failed to back up broken config: {}", e);
                                }

                                let default_config = Self::default();
                                let _ = default_config.save();
                                return Ok(default_config);
                            }
                        }
                    }
                    Err(io_err) => {
                        log::error!("Failed to read config file: {}", io_err);
                    }
                }
            } else {
                log::info!("Config file does not exist, creating default");
            }
        }

        let default_config = Self::default();
        let _ = default_config.save();
        Ok(default_config)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, content)?;
            log::info!("Saved config to: {}", config_path.display());
        }
        Ok(())
    }

    /// Replaces blank color entries so the renderer always has a name to
    /// resolve (unknown names fall back there, not here).
    pub fn validate(&mut self) {
        let defaults = Config::default().theme;
        let fields = [
            (&mut self.theme.status_foreground, defaults.status_foreground),
            (&mut self.theme.status_background, defaults.status_background),
            (
                &mut self.theme.command_foreground,
                defaults.command_foreground,
            ),
            (
                &mut self.theme.suggestion_foreground,
                defaults.suggestion_foreground,
            ),
            (&mut self.theme.error_foreground, defaults.error_foreground),
            (&mut self.theme.error_background, defaults.error_background),
        ];
        for (value, default) in fields {
            if value.trim().is_empty() {
                log::warn!("Empty theme color, using default");
                *value = default;
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("VELIN_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(dir) = std::env::var("VELIN_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.json"));
        }

        ProjectDirs::from("com", "velin", "velin")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.status_background, "white");
        assert_eq!(config.theme.command_foreground, "yellow");
        assert_eq!(config.theme.suggestion_foreground, "blue");
        assert_eq!(config.theme.error_foreground, "red");
        assert!(!config.editor.line_numbers);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"editor\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme.status_foreground, config.theme.status_foreground);
        assert_eq!(parsed.editor.line_numbers, config.editor.line_numbers);
    }

    #[test]
    fn test_validate_fixes_empty_colors() {
        let mut config = Config::default();
        config.theme.command_foreground = String::new();
        config.theme.error_background = "  ".to_string();

        config.validate();
        assert_eq!(config.theme.command_foreground, "yellow");
        assert_eq!(config.theme.error_background, "white");
    }
}
