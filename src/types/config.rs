use crate::error::GradeError;
use crate::store::autosave::DEFAULT_DELAY_MS;
use serde::Deserialize;

pub const DEFAULT_STORE_PATH: &str = ".gradecalc/store.json";
pub const MAX_AUTOSAVE_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_store_path")]
    pub path: String,
    #[serde(default = "default_autosave_delay")]
    pub autosave_delay_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_store_path(),
            autosave_delay_ms: default_autosave_delay(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_autosave_delay() -> u64 {
    DEFAULT_DELAY_MS
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormatSetting,
}

impl GradeConfig {
    pub fn validate(&self) -> Result<(), GradeError> {
        if self.storage.path.trim().is_empty() {
            return Err(GradeError::ConfigInvalid(
                "storage.path must not be empty".to_string(),
            ));
        }
        if self.storage.autosave_delay_ms > MAX_AUTOSAVE_DELAY_MS {
            return Err(GradeError::ConfigInvalid(format!(
                "storage.autosave_delay_ms must be at most {MAX_AUTOSAVE_DELAY_MS}, got {}",
                self.storage.autosave_delay_ms
            )));
        }
        Ok(())
    }
}
