//! Strip configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabstrip_header::{HeaderLayout, HeaderStyle};

use crate::error::StripError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Height of a group header row
    pub header_height: f64,
    /// Height of a member tab row
    pub row_height: f64,
    /// Header metrics, shared by every header cell
    pub header_layout: HeaderLayout,
    pub header_style: HeaderStyle,
}

impl StripConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StripConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded strip configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("header_height", self.header_height)?;
        ensure_positive("row_height", self.row_height)?;
        if self.header_layout.disclosure_size < 0.0 {
            return Err(StripError::Config(
                "header_layout.disclosure_size cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(StripError::Config(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            header_height: 24.0,
            row_height: 22.0,
            header_layout: HeaderLayout::default(),
            header_style: HeaderStyle::default(),
        }
    }
}
