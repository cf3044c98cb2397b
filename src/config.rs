use anyhow::{Context, Result};
use dirs::config_dir;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory before the XDG location
pub const LOCAL_CONFIG_FILE: &str = "gallerysync.yml";

/// Main configuration structure for gallerysync
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Directory that `image_dir` and `target_file` are resolved against
    #[serde(default = "default_project_root")]
    pub project_root: String,

    /// Directory scanned for images (non-recursive)
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Script file holding the image list declaration
    #[serde(default = "default_target_file")]
    pub target_file: String,

    /// Accepted file extensions, matched case-insensitively
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Web-relative prefix put in front of every file name
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Declaration matching and rendering
    #[serde(default)]
    pub declaration: DeclarationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shape of the declaration spliced into the target file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeclarationConfig {
    /// Name of the `const` holding the list
    #[serde(default = "default_variable")]
    pub variable: String,

    /// Indentation added per nesting level when rendering entries
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Replace every matching declaration; `false` replaces only the first
    #[serde(default = "default_true")]
    pub replace_all: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String, // "info"

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

// Default value functions
fn default_project_root() -> String {
    ".".to_string()
}
fn default_image_dir() -> String {
    "assets/image".to_string()
}
fn default_target_file() -> String {
    "script.js".to_string()
}
fn default_extensions() -> Vec<String> {
    [".png", ".jpg", ".jpeg", ".gif", ".webp"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}
fn default_path_prefix() -> String {
    "assets/image".to_string()
}
fn default_variable() -> String {
    "images".to_string()
}
fn default_indent() -> String {
    "    ".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for DeclarationConfig {
    fn default() -> Self {
        Self {
            variable: default_variable(),
            indent: default_indent(),
            replace_all: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the first location that exists, falling back to defaults
    ///
    /// Lookup order is `./gallerysync.yml`, then the XDG config file.
    pub fn load_or_default() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load(&local);
        }

        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        // Expand environment variables in paths
        config.expand_paths()?;

        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get the default configuration file path (XDG compliant)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to get user config directory")?;

        Ok(config_dir.join("gallerysync").join("config.yml"))
    }

    /// Expand environment variables and `~` in configuration paths
    pub fn expand_paths(&mut self) -> Result<()> {
        self.project_root = shellexpand::full(&self.project_root)
            .context("Failed to expand project_root path")?
            .into_owned();

        self.image_dir = shellexpand::full(&self.image_dir)
            .context("Failed to expand image_dir path")?
            .into_owned();

        self.target_file = shellexpand::full(&self.target_file)
            .context("Failed to expand target_file path")?
            .into_owned();

        Ok(())
    }

    /// Replace the project root, e.g. from a command-line override
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Absolute-or-relative image directory resolved against the project root
    pub fn image_dir_path(&self) -> PathBuf {
        Path::new(&self.project_root).join(&self.image_dir).clean()
    }

    /// Target file resolved against the project root
    pub fn target_file_path(&self) -> PathBuf {
        Path::new(&self.project_root).join(&self.target_file).clean()
    }

    /// Configured extensions lowercased and without the leading dot
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            image_dir: default_image_dir(),
            target_file: default_target_file(),
            extensions: default_extensions(),
            path_prefix: default_path_prefix(),
            declaration: DeclarationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
