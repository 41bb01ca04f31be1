use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

mod pipeline;

pub use pipeline::PipelineConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_symptom_placeholder")]
    pub symptom_placeholder: String,
    #[serde(default = "default_selector_tokens")]
    pub selector_tokens: [String; 4],
}

fn default_schema() -> String {
    PipelineConfig::default().schema
}
fn default_symptom_placeholder() -> String {
    PipelineConfig::default().symptom_placeholder
}
fn default_selector_tokens() -> [String; 4] {
    PipelineConfig::default().selector_tokens
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            schema: default_schema(),
            symptom_placeholder: default_symptom_placeholder(),
            selector_tokens: default_selector_tokens(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".besseresser")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("besseresser.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("besseresser.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Validated pipeline settings derived from this configuration.
    pub fn pipeline(&self) -> AppResult<PipelineConfig> {
        PipelineConfig {
            schema: self.schema.clone(),
            symptom_placeholder: self.symptom_placeholder.clone(),
            selector_tokens: self.selector_tokens.clone(),
            ..PipelineConfig::default()
        }
        .validate()
    }

    /// Initialize configuration file and database path.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) if is_test => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
