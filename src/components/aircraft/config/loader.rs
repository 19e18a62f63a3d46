use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Reads and deserializes a YAML document from disk.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let file = std::fs::File::open(path)?;
    let value = serde_yaml::from_reader(file)?;
    Ok(value)
}

/// Serializes a value as YAML and writes it to disk, replacing any existing file.
pub fn save_yaml<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let file = std::fs::File::create(path)?;
    serde_yaml::to_writer(file, value)?;
    Ok(())
}
