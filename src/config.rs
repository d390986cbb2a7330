use crate::error::{Result, ScoringError};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "sdgscore.toml";

/// Tuning constants of the scoring algorithm.
///
/// The default values were inherited from the original questionnaire rollout
/// and are not derived from a documented rubric, which is why every one of
/// them can be overridden from the `[scoring]` table of `sdgscore.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConstants {
    /// Multiplier applied to the raw/max ratio before clamping to 10.
    pub boost: f64,
    /// Minimum direct score once a category has any points at all.
    pub floor: f64,
    /// Lower bound (inclusive) of the progressively rescaled mid band.
    pub mid_band_low: f64,
    /// Upper bound (exclusive) of the mid band; scores at or above it are
    /// left untouched.
    pub mid_band_high: f64,
    /// Amplification of the portion of a mid-band score above the floor.
    pub mid_scale: f64,
    /// Direct score a source goal must reach before it radiates any bonus.
    pub bonus_threshold: f64,
    /// Scale applied to (direct - threshold) * strength per edge.
    pub bonus_factor: f64,
    /// Cap on the accumulated bonus a single goal may receive.
    pub max_bonus: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            boost: 1.25,
            floor: 3.0,
            mid_band_low: 3.0,
            mid_band_high: 7.0,
            mid_scale: 1.2,
            bonus_threshold: 6.0,
            bonus_factor: 0.15,
            max_bonus: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    scoring: Option<ScoringConstants>,
}

/// Loads scoring constants from a TOML file, returning `None` when the file
/// does not exist. A present file with no `[scoring]` table yields defaults.
pub fn load_constants(path: &Path) -> Result<Option<ScoringConstants>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = toml::from_str(&content)
        .map_err(|e| ScoringError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(parsed.scoring.unwrap_or_default()))
}
