use std::path::{Path, PathBuf};

use enum_map::{enum_map, EnumMap};
use goban::BoundaryPolicy;
use goban_types::Cell;
use serde::{Deserialize, Serialize};

/// Every glyph fills the 4 columns between two grid lines.
pub const GLYPH_WIDTH: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Viewer settings, loadable from a RON file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub boundary: BoundaryPolicy,
    pub glyphs: Glyphs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub empty: String,
    pub black: String,
    pub white: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: "    ".to_owned(),
            black: " ██ ".to_owned(),
            white: " ░░ ".to_owned(),
        }
    }
}

impl Glyphs {
    #[must_use]
    pub fn by_cell(&self) -> EnumMap<Cell, &str> {
        enum_map! {
            Cell::Empty => self.empty.as_str(),
            Cell::Black => self.black.as_str(),
            Cell::White => self.white.as_str(),
        }
    }
}

impl ReplayConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: ReplayConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (cell, glyph) in self.glyphs.by_cell() {
            let width = glyph.chars().count();
            if width != GLYPH_WIDTH {
                return Err(ConfigError::Validation(format!(
                    "glyph for {cell:?} must be {GLYPH_WIDTH} characters wide, got {width}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ReplayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.boundary, BoundaryPolicy::Clamp);
        assert_eq!(ReplayConfig::load(None).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ReplayConfig::from_ron("(boundary: Wrap)").unwrap();
        assert_eq!(config.boundary, BoundaryPolicy::Wrap);
        assert_eq!(config.glyphs, Glyphs::default());

        let config = ReplayConfig::from_ron(r#"(glyphs: (white: " () "))"#).unwrap();
        assert_eq!(config.glyphs.white, " () ");
        assert_eq!(config.glyphs.black, Glyphs::default().black);
    }

    #[test]
    fn wrong_glyph_width() {
        let err = ReplayConfig::from_ron(r#"(glyphs: (black: "X"))"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: glyph for Black must be 4 characters wide, got 1"
        );
    }

    #[test]
    fn syntax_error() {
        assert!(matches!(
            ReplayConfig::from_ron("(boundary: Sideways)"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = ReplayConfig::load(Some(Path::new("does/not/exist.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
