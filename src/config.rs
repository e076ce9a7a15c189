//! Classifier thresholds and session timings
//!
//! Defaults reproduce the bands the page has always used. The page may
//! override any subset with a JSON object through `configure`.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Knee and leg-spread bands for the lunge check (degrees, open intervals)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungeThresholds {
    pub knee_min: f32,
    pub knee_max: f32,
    pub spread_min: f32,
    pub spread_max: f32,
}

impl Default for LungeThresholds {
    fn default() -> Self {
        Self {
            knee_min: 80.0,
            knee_max: 110.0,
            spread_min: 80.0,
            spread_max: 110.0,
        }
    }
}

/// Bent-knee and torso limits for the sit-up state machine (degrees)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitUpThresholds {
    /// Both knees must be below this to advance the phase
    pub knee_bent_max: f32,
    /// Torso above this counts as lying back
    pub lying_torso_min: f32,
    /// Torso below this counts as sitting up
    pub sitting_torso_max: f32,
}

impl Default for SitUpThresholds {
    fn default() -> Self {
        Self {
            knee_bent_max: 70.0,
            lying_torso_min: 60.0,
            sitting_torso_max: 30.0,
        }
    }
}

/// Everything tunable about a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub lunge: LungeThresholds,
    pub sit_up: SitUpThresholds,
    /// Delay before a completed sit-up drops back to idle
    pub reset_delay_ms: u32,
    /// Frames kept in the rolling angle history
    pub history_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            lunge: LungeThresholds::default(),
            sit_up: SitUpThresholds::default(),
            reset_delay_ms: 1000,
            history_len: 30,
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject bands that no angle could ever satisfy
    pub fn validate(&self) -> Result<()> {
        let l = &self.lunge;
        if l.knee_min >= l.knee_max {
            return Err(FormError::invalid_config(format!(
                "lunge knee band is empty: ({}, {})",
                l.knee_min, l.knee_max
            )));
        }
        if l.spread_min >= l.spread_max {
            return Err(FormError::invalid_config(format!(
                "lunge leg spread band is empty: ({}, {})",
                l.spread_min, l.spread_max
            )));
        }

        let s = &self.sit_up;
        if s.sitting_torso_max >= s.lying_torso_min {
            return Err(FormError::invalid_config(format!(
                "sitting torso limit {} must be below lying torso limit {}",
                s.sitting_torso_max, s.lying_torso_min
            )));
        }
        if !(0.0..=180.0).contains(&s.knee_bent_max) {
            return Err(FormError::invalid_config(format!(
                "knee bend limit {} outside 0-180",
                s.knee_bent_max
            )));
        }

        if self.history_len == 0 {
            return Err(FormError::invalid_config("history_len must be at least 1"));
        }

        Ok(())
    }
}
