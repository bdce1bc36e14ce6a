use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Operator-supplied names, merged in front of the built-in tables.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vendors: Vec<VendorConfig>,
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VendorConfig {
    pub id: u16,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DeviceConfig {
    pub vendor: u16,
    pub device: u16,
    pub name: String,
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Loads a single config file, or every file in a directory concatenated in name order.
    pub fn load(path: &Path) -> Result<Self> {
        let read_err = |source| Error::ConfigRead {
            path: path.to_owned(),
            source,
        };

        let config_data = if fs::metadata(path).map_err(read_err)?.is_file() {
            fs::read_to_string(path).map_err(read_err)?
        } else {
            let mut paths = fs::read_dir(path)
                .map_err(read_err)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .collect::<Vec<_>>();
            paths.sort();

            let mut config_data = String::new();
            for path in paths {
                match fs::read_to_string(&path) {
                    Ok(tmp) => {
                        config_data.push_str(&tmp);
                        config_data.push('\n');
                    }
                    Err(err) => log::warn!("skipping {}: {err}", path.display()),
                }
            }
            config_data
        };

        Self::from_toml(&config_data)
    }
}
