use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::genetic_code;
use crate::translation::FixOptions;

/// Run-wide translation settings loaded from JSON.
///
/// ```json
/// { "translTable": 11, "fixes": { "fixNoStopCodonMake3Partial": true } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslationConfig {
    /// Table used for features without a `transl_table` attribute.
    pub transl_table: Option<u32>,
    #[serde(default)]
    pub fixes: FixOptions,
}

impl TranslationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(id) = self.transl_table {
            genetic_code::table(id)
                .with_context(|| format!("invalid translTable in config: {id}"))?;
        }
        Ok(())
    }
}
