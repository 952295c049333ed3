use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Asset locations used by the CLI. All fields have defaults so the
/// binary works without a config file present.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_performers_dir")]
    pub performers_dir: String,
    #[serde(default = "default_gallery_root")]
    pub gallery_root: String,
}

fn default_performers_dir() -> String {
    "assets/images/performers".to_string()
}

fn default_gallery_root() -> String {
    "assets/images".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            performers_dir: default_performers_dir(),
            gallery_root: default_gallery_root(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: AssetsConfig::default(),
        }
    }
}

impl Config {
    /// Load `catalog.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = "catalog.toml";
        if !Path::new(config_path).exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.assets.performers_dir, "assets/images/performers");
        assert_eq!(config.assets.gallery_root, "assets/images");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [assets]
            performers_dir = "photos"
            "#,
        )
        .unwrap();
        assert_eq!(config.assets.performers_dir, "photos");
        assert_eq!(config.assets.gallery_root, "assets/images");
    }
}
