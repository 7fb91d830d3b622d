use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Rows shown per page when browsing raw data
    #[serde(default = "default_raw_page_size")]
    pub raw_page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    /// Print how long each statistic took to compute
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_raw_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            raw_page_size: default_raw_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.bikeshare`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is absent
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.raw_page_size == 0 {
            return Err(AppError::Config(
                "raw_page_size must be at least 1".to_string(),
            ));
        }
        if self.separator_char.is_empty() {
            return Err(AppError::Config(
                "separator_char must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Separator line printed after each report section
    pub fn separator(&self) -> String {
        self.separator_char.repeat(self.separator_width)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`, creating parent dirs.
    /// An existing file is left untouched unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
