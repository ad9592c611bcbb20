//! Preset Registry
//!
//! Thread-safe lookup of validated presets by name. The embedded presets are
//! compiled in from `presets/`; more can be loaded from a directory at runtime.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use include_dir::{include_dir, Dir};

use crate::{PresetError, ThresholdPreset};

static EMBEDDED_PRESETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/presets");

/// Thread-safe preset registry
pub struct PresetRegistry {
    presets: RwLock<HashMap<String, ThresholdPreset>>,
}

impl PresetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            presets: RwLock::new(HashMap::new()),
        }
    }

    /// Validate and register a preset under its own name
    pub fn register(&self, preset: ThresholdPreset) -> Result<(), PresetError> {
        preset.validate()?;

        let mut presets = self.presets.write().map_err(|_| PresetError::LockPoisoned)?;
        if presets.contains_key(&preset.name) {
            return Err(PresetError::Duplicate(preset.name));
        }

        log::debug!(
            "Registered preset {} ({} thresholds, {:?})",
            preset.name,
            preset.thresholds.len(),
            preset.model
        );
        presets.insert(preset.name.clone(), preset);
        Ok(())
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Result<ThresholdPreset, PresetError> {
        let presets = self.presets.read().map_err(|_| PresetError::LockPoisoned)?;

        presets
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Registered names in alphabetical order
    pub fn names(&self) -> Result<Vec<String>, PresetError> {
        let presets = self.presets.read().map_err(|_| PresetError::LockPoisoned)?;

        let mut names: Vec<String> = presets.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Register every preset compiled into the crate
    pub fn load_defaults(&self) -> Result<usize, PresetError> {
        let mut files: Vec<_> = EMBEDDED_PRESETS
            .files()
            .filter(|f| f.path().extension().map_or(false, |ext| ext == "json"))
            .collect();
        files.sort_by_key(|f| f.path());

        for file in &files {
            let json = file.contents_utf8().ok_or_else(|| {
                PresetError::Io(format!("{}: not valid UTF-8", file.path().display()))
            })?;
            self.register(ThresholdPreset::from_json_str(json)?)?;
        }

        log::info!("Loaded {} embedded presets", files.len());
        Ok(files.len())
    }

    /// Register every `*.json` file in a directory, in file name order
    ///
    /// Stops at the first file that fails to load; presets registered before
    /// it stay registered.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<usize, PresetError> {
        let dir = dir.as_ref();
        let entries =
            fs::read_dir(dir).map_err(|e| PresetError::Io(format!("{}: {}", dir.display(), e)))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| PresetError::Io(format!("{}: {}", dir.display(), e)))?
                .path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.register(ThresholdPreset::from_path(path)?)?;
        }

        if paths.is_empty() {
            log::warn!("No presets found in {}", dir.display());
        } else {
            log::info!("Loaded {} presets from {}", paths.len(), dir.display());
        }
        Ok(paths.len())
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global preset registry with the embedded presets loaded
    pub static ref GLOBAL_REGISTRY: PresetRegistry = {
        let registry = PresetRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::warn!("Embedded presets failed to load: {}", e);
        }
        registry
    };
}
