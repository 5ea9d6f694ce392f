use crate::error::{ConfigReadErr, IoErr, Result};
use serde::Deserialize;
use snafu::prelude::*;
use std::{collections::HashMap, io::ErrorKind, path::Path};
use tokio::fs::read_to_string;
use toml::from_str;

/// Load a config file, falling back to the built-in defaults when none
/// exists at `path`.
pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let s = match read_to_string(path.as_ref()).await {
        Ok(s) => s,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!(
                "no config file at {}; using default limits",
                path.as_ref().display()
            );
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(err).context(IoErr {
                path: path.as_ref(),
            })
        }
    };

    from_str(s.as_str()).context(ConfigReadErr {})
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    images: ImageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    max_sizes: HashMap<String, u64>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        let max_sizes = HashMap::from([
            ("png".to_string(), 505_000),
            ("gif".to_string(), 2_100_000),
        ]);

        Self { max_sizes }
    }
}

impl Config {
    /// Maximum allowed byte count per image extension. Extensions absent
    /// from the table impose no ceiling.
    pub fn max_image_sizes(&self) -> &HashMap<String, u64> {
        &self.images.max_sizes
    }
}
