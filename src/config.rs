use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs of the declutter pass.
///
/// The defaults are what every test in this crate assumes.
/// `min_clearance` (0.25 planar units) and `scale_threshold` (50) in
/// particular are empirical values with no documented derivation;
/// change them only against real scenes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclutterConfig {
    /// Degrees blocked to each side of the bearing toward another
    /// anchor, keeping labels clear of the anchor symbol.
    pub pad_degrees: i32,
    /// An open sector must be wider than this many degrees to accept a
    /// candidate bearing at all.
    pub min_sector_size: i32,
    /// Search radius is `label diagonal × radius_scale × attempt`.
    pub radius_scale: f64,
    /// Number of increasing search radii tried per anchor.
    pub max_attempts: u32,
    /// Wide sectors are re-centered around the candidate bearing with
    /// at most this half-width, so placements stay plausible.
    pub half_width_cap: i32,
    /// Minimum distance between an anchor and the center of its placed
    /// box; closer placements get pushed out radially.
    pub min_clearance: f64,
    /// Map scale factor beyond which the clearance push-out shrinks
    /// proportionally.
    pub scale_threshold: f64,
}

impl Default for DeclutterConfig {
    fn default() -> Self {
        Self {
            pad_degrees: 5,
            min_sector_size: 6,
            radius_scale: 1.5,
            max_attempts: 3,
            half_width_cap: 70,
            min_clearance: 0.25,
            scale_threshold: 50.0,
        }
    }
}

/// Load a config file (JSON, comments allowed), or defaults when no
/// path is given. Missing fields fall back to their defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DeclutterConfig> {
    let Some(path) = path else {
        return Ok(DeclutterConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: DeclutterConfig = json5::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_tuning_constants() {
        let config = DeclutterConfig::default();
        assert_eq!(config.pad_degrees, 5);
        assert_eq!(config.min_sector_size, 6);
        assert_eq!(config.radius_scale, 1.5);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.half_width_cap, 70);
        assert_eq!(config.min_clearance, 0.25);
        assert_eq!(config.scale_threshold, 50.0);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: DeclutterConfig = json5::from_str("{ padDegrees: 8 }").expect("parse");
        assert_eq!(config.pad_degrees, 8);
        assert_eq!(config.min_sector_size, 6);
    }

    #[test]
    fn missing_path_means_defaults() {
        let config = load_config(None).expect("defaults");
        assert_eq!(config.max_attempts, 3);
    }
}
