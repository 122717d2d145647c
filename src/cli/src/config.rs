use color_eyre::eyre::{WrapErr, eyre};
use hollow_cube::DEFAULT_SCRAMBLE_LENGTH;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "hollow_cube.toml";

/// Session configuration, read from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Side length of the cube.
    pub size: usize,
    /// Number of random turns in a scramble.
    pub scramble_length: usize,
    /// Seed for reproducible scrambles.
    pub seed: Option<u64>,
    /// Print face nets with ANSI colors.
    pub color: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            size: 3,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
        }
    }
}

impl SessionConfig {
    /// Load the configuration at `path`. When the path was not given
    /// explicitly, a missing file just means the defaults.
    pub fn load(path: &Path, explicit: bool) -> color_eyre::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display())),
            Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
                Ok(SessionConfig::default())
            }
            Err(err) => Err(eyre!(
                "Failed to read configuration file {}: {err}",
                path.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config: SessionConfig = toml::from_str("size = 5").unwrap();
        assert_eq!(
            config,
            SessionConfig {
                size: 5,
                ..SessionConfig::default()
            }
        );
        assert_eq!(config.scramble_length, 10);
    }

    #[test]
    fn full_config() {
        let config: SessionConfig = toml::from_str(
            "size = 4\nscramble_length = 25\nseed = 1234\ncolor = false\n",
        )
        .unwrap();
        assert_eq!(
            config,
            SessionConfig {
                size: 4,
                scramble_length: 25,
                seed: Some(1234),
                color: false,
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SessionConfig>("sise = 4").is_err());
    }

    #[test]
    fn missing_default_file_is_fine() {
        let path = Path::new("definitely/not/a/real/hollow_cube.toml");
        assert_eq!(
            SessionConfig::load(path, false).unwrap(),
            SessionConfig::default()
        );
        assert!(SessionConfig::load(path, true).is_err());
    }
}
