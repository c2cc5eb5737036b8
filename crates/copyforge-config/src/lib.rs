use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

fn default_words_per_minute() -> u32 {
    200
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory published pages are written into.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub site_name: String,
    /// Prefix for canonical URLs. Empty leaves them blank.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    /// HTML-escape article text before rendering.
    #[serde(default)]
    pub escape_html: bool,
    /// Custom page template; the built-in one is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    /// Author shown when an article's frontmatter has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Config {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            site_name: String::new(),
            base_url: String::new(),
            words_per_minute: default_words_per_minute(),
            escape_html: false,
            template_path: None,
            author: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template_path = config
            .template_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/copyforge");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/copyforge/config.toml"));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = toml::from_str(r#"output_dir = "/srv/site""#).unwrap();

        assert_eq!(config, Config::new("/srv/site"));
        assert_eq!(config.words_per_minute, 200);
        assert!(!config.escape_html);
    }

    #[test]
    fn test_full_config() {
        let config_content = r#"
output_dir = "/srv/site"
site_name = "Bootstrapped"
base_url = "https://example.com"
words_per_minute = 250
escape_html = true
template_path = "/srv/templates/article.html"
author = "Editorial"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.site_name, "Bootstrapped");
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.words_per_minute, 250);
        assert!(config.escape_html);
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/srv/templates/article.html"))
        );
        assert_eq!(config.author.as_deref(), Some("Editorial"));
    }

    #[test]
    fn test_missing_output_dir_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "site_name = \"x\"\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::new("/tmp/site-out");
        test_config.site_name = "Test Site".into();
        test_config.author = Some("Me".into());

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_env_vars_expand_in_loaded_paths() {
        unsafe {
            env::set_var("COPYFORGE_TEST_ROOT", "/custom/root");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "output_dir = \"$COPYFORGE_TEST_ROOT/out\"\ntemplate_path = \"$COPYFORGE_TEST_ROOT/page.html\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_dir, PathBuf::from("/custom/root/out"));
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("/custom/root/page.html"))
        );

        unsafe {
            env::remove_var("COPYFORGE_TEST_ROOT");
        }
    }
}
