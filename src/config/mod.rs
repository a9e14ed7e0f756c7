//! Configuration management for the repository shell.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::identifier::{DEFAULT_REPO, DEFAULT_USERNAME, SEPARATOR};
use crate::core::{Error, Identifier};

/// How user notifications are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStyle {
    /// Modal dialog that must be dismissed before typing resumes.
    #[default]
    Alert,
    /// Banner that disappears on its own and never blocks input.
    Toast,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting identifier.
    pub shell: ShellConfig,

    /// Repository panel configuration.
    pub repository: RepositoryConfig,

    /// TUI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Load configuration from the default paths.
    ///
    /// Loads global config first, then merges project-local config if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read, parsed, or
    /// holds invalid values.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(project_path) = Self::project_config_path() {
            if project_path.exists() {
                let project_config = Self::load_from(&project_path)?;
                config.merge(project_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a single configuration file, falling back to defaults if it is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the project-local configuration file path.
    ///
    /// Looks for `.repo-shell/config.toml` in the current directory.
    pub fn project_config_path() -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(cwd.join(".repo-shell").join("config.toml"))
    }

    /// Merge another config into this one (project overrides global).
    fn merge(&mut self, other: Self) {
        let shell_default = ShellConfig::default();
        if other.shell.username != shell_default.username {
            self.shell.username = other.shell.username;
        }
        if other.shell.repo != shell_default.repo {
            self.shell.repo = other.shell.repo;
        }

        if other.repository.base_url != RepositoryConfig::default().base_url {
            self.repository.base_url = other.repository.base_url;
        }

        let tui_default = TuiConfig::default();
        if other.tui.notice != tui_default.notice {
            self.tui.notice = other.tui.notice;
        }
        if other.tui.toast_ms != tui_default.toast_ms {
            self.tui.toast_ms = other.tui.toast_ms;
        }
    }

    /// Check values that the type system cannot.
    pub fn validate(&self) -> crate::core::Result<()> {
        for (field, value) in [
            ("shell.username", &self.shell.username),
            ("shell.repo", &self.shell.repo),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{field} must not be empty")));
            }
            if value.contains(SEPARATOR) {
                return Err(Error::Config(format!(
                    "{field} must not contain '{SEPARATOR}'"
                )));
            }
        }
        if self.tui.toast_ms == 0 {
            return Err(Error::Config("tui.toast_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Get the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (`~/.config/repo-shell/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home).join("repo-shell"));
        }

        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(base.config_dir().join("repo-shell"))
    }
}

/// Starting identifier for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Initial owner segment.
    pub username: String,

    /// Initial repository segment.
    pub repo: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl ShellConfig {
    /// The configured starting identifier.
    #[must_use]
    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.username.clone(), self.repo.clone())
    }
}

/// Repository panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Web host that repositories are browsed on.
    pub base_url: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com".to_string(),
        }
    }
}

/// TUI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Notification presentation.
    pub notice: NoticeStyle,

    /// How long a toast stays up, in milliseconds.
    pub toast_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            notice: NoticeStyle::Alert,
            toast_ms: 2500,
        }
    }
}

impl TuiConfig {
    /// Toast lifetime.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_twython() {
        let config = Config::default();
        assert_eq!(config.shell.identifier().to_string(), "ryanmcgrath/twython");
        assert_eq!(config.repository.base_url, "https://github.com");
        assert_eq!(config.tui.notice, NoticeStyle::Alert);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.shell, ShellConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[shell]
username = "facebook"

[tui]
notice = "toast"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.shell.username, "facebook");
        assert_eq!(config.shell.repo, "twython");
        assert_eq!(config.tui.notice, NoticeStyle::Toast);
        assert_eq!(config.tui.toast_ms, 2500);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[shell\nusername = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn unknown_notice_style_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\nnotice = \"popup\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn project_values_override_global() {
        let mut global = Config::default();
        global.shell.username = "global".to_string();
        global.tui.toast_ms = 1000;

        let mut project = Config::default();
        project.shell.repo = "local".to_string();
        project.tui.notice = NoticeStyle::Toast;

        global.merge(project);

        assert_eq!(global.shell.username, "global");
        assert_eq!(global.shell.repo, "local");
        assert_eq!(global.tui.notice, NoticeStyle::Toast);
        assert_eq!(global.tui.toast_ms, 1000);
    }

    #[test]
    fn validate_rejects_separator_in_username() {
        let mut config = Config::default();
        config.shell.username = "a/b".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shell.username"));
    }

    #[test]
    fn validate_rejects_empty_repo() {
        let mut config = Config::default();
        config.shell.repo = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shell.repo must not be empty"));
    }

    #[test]
    fn validate_rejects_zero_toast() {
        let mut config = Config::default();
        config.tui.toast_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = Config::default();
        config.tui.notice = NoticeStyle::Toast;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("notice = \"toast\""));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.tui.notice, NoticeStyle::Toast);
    }
}
