use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cube::{CubeError, CubeState},
    face::Color,
    start, success, working,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the cube config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Could not parse the cube config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("The cube config describes an invalid cube: {0}")]
    InvalidCube(#[from] CubeError),
}

/// An RGB triple.
pub type Rgb = [u8; 3];

/// The display color of each sticker color. Renderers read this; the cube
/// itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub white: Rgb,
    pub yellow: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
    pub orange: Rgb,
    pub red: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            white: [255, 255, 255],
            yellow: [255, 255, 0],
            green: [0, 255, 0],
            blue: [0, 0, 255],
            orange: [255, 165, 0],
            red: [255, 0, 0],
        }
    }
}

impl ColorScheme {
    #[must_use]
    pub fn rgb(&self, color: Color) -> Rgb {
        match color {
            Color::White => self.white,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Orange => self.orange,
            Color::Red => self.red,
        }
    }
}

/// Cube configuration.
///
/// ```toml
/// size = 4
///
/// [colors]
/// orange = [255, 128, 0]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubeConfig {
    pub size: usize,
    #[serde(default)]
    pub colors: ColorScheme,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            size: 3,
            colors: ColorScheme::default(),
        }
    }
}

impl CubeConfig {
    /// # Errors
    ///
    /// If `config` is not valid TOML or does not match the config layout.
    pub fn from_toml_str(config: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config)?)
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(start!("Loading cube config from {}"), path.display());
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(success!("Loaded a {}x{} cube config"), config.size, config.size);
        Ok(config)
    }

    /// Create the solved cube this config describes.
    ///
    /// # Errors
    ///
    /// If the configured size is zero.
    pub fn build(&self) -> Result<CubeState, ConfigError> {
        debug!(working!("Building a cube of size {}"), self.size);
        Ok(CubeState::new(self.size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_colors() {
        let config = CubeConfig::from_toml_str("size = 5").unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.colors, ColorScheme::default());
        assert_eq!(config.build().unwrap().size(), 5);
    }

    #[test]
    fn test_parse_color_override() {
        let config = CubeConfig::from_toml_str(
            r"
            size = 2

            [colors]
            orange = [255, 128, 0]
            ",
        )
        .unwrap();
        assert_eq!(config.colors.rgb(Color::Orange), [255, 128, 0]);
        assert_eq!(config.colors.rgb(Color::Red), [255, 0, 0]);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            CubeConfig::from_toml_str("size = 3\nshape = \"dodecahedron\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CubeConfig::from_toml_str("size = 3\n[colors]\npurple = [1, 2, 3]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_missing_and_negative_size() {
        assert!(matches!(
            CubeConfig::from_toml_str(""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CubeConfig::from_toml_str("size = -1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_size_fails_to_build() {
        let config = CubeConfig::from_toml_str("size = 0").unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigError::InvalidCube(CubeError::InvalidSize(0)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CubeConfig::load("/nonexistent/cube.toml"),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = CubeConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CubeConfig::from_toml_str(&text).unwrap(), config);
    }
}
