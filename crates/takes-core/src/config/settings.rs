use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TakeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeConfig {
    /// Name of the implicit root take.
    pub root_take: String,
    /// Numeric component suffixes probed during reconciliation: `0..n`.
    pub numeric_suffix_count: u32,
    /// Axis component suffixes probed during reconciliation, one per char.
    pub axis_suffixes: String,
    /// Fold case when matching parameter filters and take list patterns.
    pub case_insensitive_filters: bool,
}

impl Default for TakeConfig {
    fn default() -> Self {
        Self {
            root_take: "Main".to_string(),
            numeric_suffix_count: 12,
            axis_suffixes: "xyzuvw".to_string(),
            case_insensitive_filters: false,
        }
    }
}

impl TakeConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, TakeError> {
        let json = std::fs::read_to_string(path)?;
        let config: TakeConfig = serde_json::from_str(&json)
            .map_err(|e| TakeError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), TakeError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), TakeError> {
        if self.root_take.trim().is_empty() {
            return Err(TakeError::Config("root_take must not be empty".into()));
        }
        Ok(())
    }

    /// Component suffixes in probing order: numeric first, then axes.
    pub fn component_suffixes(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.numeric_suffix_count)
            .map(|i| i.to_string())
            .chain(self.axis_suffixes.chars().map(String::from))
    }
}
