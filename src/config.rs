use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Birthday CSV file
    #[serde(default)]
    pub(crate) file: Option<String>,
    /// Birthday CSV feed URL
    #[serde(default)]
    pub(crate) url: Option<String>,
    /// Event CSV file
    #[serde(default)]
    pub(crate) events_file: Option<String>,
    /// Event CSV feed URL
    #[serde(default)]
    pub(crate) events_url: Option<String>,
    /// Default upcoming list size
    #[serde(default)]
    pub(crate) count: Option<u32>,
    #[serde(default)]
    pub(crate) table: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/countdown/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("countdown").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/countdown/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("countdown").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.countdown.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".countdown.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_not_empty() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            file = "people.csv"
            events_url = "https://example.com/events.csv"
            count = 10
            table = true
            color = "never"
            "#,
        )
        .unwrap();
        assert_eq!(config.file.as_deref(), Some("people.csv"));
        assert_eq!(
            config.events_url.as_deref(),
            Some("https://example.com/events.csv")
        );
        assert_eq!(config.count, Some(10));
        assert!(config.table);
        assert_eq!(config.color.as_deref(), Some("never"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.file.is_none());
        assert!(config.count.is_none());
        assert!(!config.table);
    }
}
