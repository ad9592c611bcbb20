//! Threshold preset definition and validation

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use soundlevel_core::{
    generate_contours, Canvas, ContourLevel, PropagationModel, SceneCache, ThresholdDefinition,
};

use crate::PresetError;

/// A named set of limits plus the spreading model they are evaluated with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPreset {
    /// Unique name, e.g. "flanders_residential"
    pub name: String,

    /// Human readable summary
    #[serde(default)]
    pub description: String,

    /// Spreading model; hemispherical when omitted
    #[serde(default)]
    pub model: PropagationModel,

    /// Limits in any order; an empty list draws no rings
    pub thresholds: Vec<ThresholdDefinition>,
}

impl ThresholdPreset {
    /// Parse and validate a preset from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, PresetError> {
        let preset: Self =
            serde_json::from_str(json).map_err(|e| PresetError::Parse(e.to_string()))?;
        preset.validate()?;
        Ok(preset)
    }

    /// Read, parse and validate a preset file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PresetError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_json_str(&json).map_err(|e| match e {
            PresetError::Parse(msg) => PresetError::Parse(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, PresetError> {
        serde_json::to_string_pretty(self).map_err(|e| PresetError::Serialize(e.to_string()))
    }

    /// Check the preset can be drawn unambiguously
    ///
    /// Rejects an empty name, non-finite levels, empty labels and the same
    /// level listed twice. An empty threshold list is allowed.
    pub fn validate(&self) -> Result<(), PresetError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }

        if self.thresholds.is_empty() {
            log::warn!("Preset {} has no thresholds, no rings will be drawn", self.name);
        }

        for (i, threshold) in self.thresholds.iter().enumerate() {
            if !threshold.db.is_finite() {
                return Err(self.invalid(&format!("threshold {} is not a finite level", i)));
            }
            if threshold.label.trim().is_empty() {
                return Err(self.invalid(&format!("threshold {} dB has an empty label", threshold.db)));
            }
            if self.thresholds[..i].iter().any(|other| other.db == threshold.db) {
                return Err(self.invalid(&format!("threshold {} dB listed twice", threshold.db)));
            }
        }

        Ok(())
    }

    /// Rings for a source of the given sound power level, innermost first
    pub fn contours(&self, sound_power: f64) -> Vec<ContourLevel> {
        generate_contours(sound_power, &self.thresholds, self.model)
    }

    /// Scene cache primed with this preset's thresholds
    pub fn scene_cache(&self, canvas: Canvas) -> SceneCache {
        SceneCache::new(self.thresholds.clone(), canvas)
    }

    fn invalid(&self, reason: &str) -> PresetError {
        PresetError::Invalid {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
