//! Scene Composition and Memoization
//!
//! A [`Scene`] is everything a UI needs for one pair of inputs: the headline
//! pressure level, the attenuation, the rings and the projected primitives.
//! It is rebuilt from scratch whenever an input changes.
//!
//! [`SceneCache`] skips the rebuild when nothing changed. Two single-slot
//! memos are kept:
//!
//! ```text
//! scene    keyed by (sound_power, distance, model)
//! contours keyed by (sound_power, model)
//! ```
//!
//! so moving the observer reuses the rings. Keys compare floats by bit
//! pattern. Caching never changes a result: a cached scene is equal to one
//! from [`compute_scene`].

use alloc::vec::Vec;

use crate::contours::{generate_contours, ContourLevel, ThresholdDefinition};
use crate::projection::{project, Canvas, Projection};
use crate::propagation::{compute_pressure, round_to_tenth, AcousticParams, PropagationModel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full result for one set of inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// Inputs the scene was built from
    pub params: AcousticParams,
    /// Spreading model used
    pub model: PropagationModel,
    /// Headline pressure level, rounded to 0.1 dB
    pub pressure_db: f64,
    /// Drop from sound power to the headline level, rounded to 0.1 dB
    pub attenuation_db: f64,
    /// Rings, innermost first
    pub contours: Vec<ContourLevel>,
    /// Scale and draw primitives
    pub projection: Projection,
}

/// Build a scene without any caching.
pub fn compute_scene(
    params: &AcousticParams,
    model: PropagationModel,
    thresholds: &[ThresholdDefinition],
    canvas: &Canvas,
) -> Scene {
    let contours = generate_contours(params.sound_power, thresholds, model);
    assemble(params, model, contours, canvas)
}

fn assemble(
    params: &AcousticParams,
    model: PropagationModel,
    contours: Vec<ContourLevel>,
    canvas: &Canvas,
) -> Scene {
    let pressure_db = compute_pressure(params, model);
    let attenuation_db = round_to_tenth(params.sound_power - pressure_db);
    let projection = project(params.distance, pressure_db, &contours, canvas);

    Scene {
        params: *params,
        model,
        pressure_db,
        attenuation_db,
        contours,
        projection,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SceneKey {
    sound_power: u64,
    distance: u64,
    model: PropagationModel,
}

impl SceneKey {
    fn new(params: &AcousticParams, model: PropagationModel) -> Self {
        Self {
            sound_power: params.sound_power.to_bits(),
            distance: params.distance.to_bits(),
            model,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContourKey {
    sound_power: u64,
    model: PropagationModel,
}

/// Counters for cache behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Calls answered from the scene memo
    pub hits: u64,
    /// Calls that rebuilt the scene
    pub misses: u64,
    /// Rebuilds that reused the memoized rings
    pub contour_reuses: u64,
}

/// Memoizing front end over [`compute_scene`]
#[derive(Debug, Clone)]
pub struct SceneCache {
    thresholds: Vec<ThresholdDefinition>,
    canvas: Canvas,
    contours: Option<(ContourKey, Vec<ContourLevel>)>,
    scene: Option<(SceneKey, Scene)>,
    stats: CacheStats,
}

impl SceneCache {
    /// Create an empty cache for a fixed threshold list and canvas
    pub fn new(thresholds: Vec<ThresholdDefinition>, canvas: Canvas) -> Self {
        Self {
            thresholds,
            canvas,
            contours: None,
            scene: None,
            stats: CacheStats::default(),
        }
    }

    /// Thresholds rings are generated for
    pub fn thresholds(&self) -> &[ThresholdDefinition] {
        &self.thresholds
    }

    /// Drawing surface scenes are projected onto
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Replace the thresholds; drops both memos
    pub fn set_thresholds(&mut self, thresholds: Vec<ThresholdDefinition>) {
        self.thresholds = thresholds;
        self.invalidate();
    }

    /// Replace the canvas; drops the scene memo, rings stay valid
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.scene = None;
    }

    /// Forget every memoized value
    pub fn invalidate(&mut self) {
        self.contours = None;
        self.scene = None;
    }

    /// Hit and miss counters since creation
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Scene for the given inputs, rebuilt only when they changed
    pub fn scene(&mut self, params: AcousticParams, model: PropagationModel) -> &Scene {
        let key = SceneKey::new(&params, model);

        let scene = match self.scene.take() {
            Some((cached, scene)) if cached == key => {
                self.stats.hits += 1;
                log_trace!("Scene cache hit (Lw={}, r={})", params.sound_power, params.distance);
                scene
            }
            _ => {
                self.stats.misses += 1;
                log_trace!("Scene cache miss (Lw={}, r={})", params.sound_power, params.distance);
                let contours = self.contours_for(params.sound_power, model);
                assemble(&params, model, contours, &self.canvas)
            }
        };

        &self.scene.insert((key, scene)).1
    }

    fn contours_for(&mut self, sound_power: f64, model: PropagationModel) -> Vec<ContourLevel> {
        let key = ContourKey {
            sound_power: sound_power.to_bits(),
            model,
        };

        if let Some((cached, contours)) = &self.contours {
            if *cached == key {
                self.stats.contour_reuses += 1;
                return contours.clone();
            }
        }

        let contours = generate_contours(sound_power, &self.thresholds, model);
        self.contours = Some((key, contours.clone()));
        contours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn flanders_cache() -> SceneCache {
        SceneCache::new(
            vec![
                ThresholdDefinition::new(45.0, "Dag (45dB)"),
                ThresholdDefinition::new(35.0, "Nacht (35dB)"),
            ],
            Canvas::default(),
        )
    }

    #[test]
    fn same_inputs_hit() {
        let mut cache = flanders_cache();
        let params = AcousticParams::new(60.0, 5.0);

        let first = cache.scene(params, PropagationModel::Hemispherical).clone();
        let second = cache.scene(params, PropagationModel::Hemispherical).clone();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, contour_reuses: 0 });
    }

    #[test]
    fn attenuation_is_power_minus_pressure() {
        let mut cache = flanders_cache();
        let scene = cache.scene(AcousticParams::new(60.0, 5.0), PropagationModel::Hemispherical);
        assert_eq!(scene.attenuation_db, 22.0);

        let scene = cache.scene(AcousticParams::new(60.0, 5.0), PropagationModel::Spherical);
        assert_eq!(scene.attenuation_db, 25.0);

        // 72.3 - 64.3 is not exactly 8 in binary
        let scene = cache.scene(AcousticParams::new(72.3, 1.0), PropagationModel::Hemispherical);
        assert_eq!(scene.pressure_db, 64.3);
        assert_eq!(scene.attenuation_db, 8.0);
    }

    #[test]
    fn distance_change_reuses_rings() {
        let mut cache = flanders_cache();
        cache.scene(AcousticParams::new(60.0, 5.0), PropagationModel::Hemispherical);
        let scene = cache.scene(AcousticParams::new(60.0, 12.0), PropagationModel::Hemispherical);

        assert_eq!(scene.params.distance, 12.0);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().contour_reuses, 1);
    }

    #[test]
    fn model_change_rebuilds_rings() {
        let mut cache = flanders_cache();
        let params = AcousticParams::new(60.0, 5.0);
        let hemi = cache.scene(params, PropagationModel::Hemispherical).pressure_db;
        let sphere = cache.scene(params, PropagationModel::Spherical).pressure_db;

        assert_eq!(hemi, 38.0);
        assert_eq!(sphere, 35.0);
        assert_eq!(cache.stats().contour_reuses, 0);
    }

    #[test]
    fn cached_scene_matches_fresh_computation() {
        let mut cache = flanders_cache();
        let params = AcousticParams::new(72.5, 3.3);
        cache.scene(AcousticParams::new(60.0, 5.0), PropagationModel::Hemispherical);
        cache.scene(params, PropagationModel::Hemispherical);
        let cached = cache.scene(params, PropagationModel::Hemispherical).clone();

        let fresh = compute_scene(
            &params,
            PropagationModel::Hemispherical,
            cache.thresholds(),
            &Canvas::default(),
        );
        assert_eq!(cached, fresh);
    }

    #[test]
    fn new_thresholds_invalidate() {
        let mut cache = flanders_cache();
        let params = AcousticParams::new(60.0, 5.0);
        assert_eq!(cache.scene(params, PropagationModel::Hemispherical).contours.len(), 2);

        cache.set_thresholds(vec![ThresholdDefinition::new(40.0, "Evening")]);
        let scene = cache.scene(params, PropagationModel::Hemispherical);

        assert_eq!(scene.contours.len(), 1);
        assert_eq!(scene.contours[0].label.as_deref(), Some("Evening"));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn new_canvas_keeps_rings() {
        let mut cache = flanders_cache();
        let params = AcousticParams::new(60.0, 5.0);
        cache.scene(params, PropagationModel::Hemispherical);

        cache.set_canvas(Canvas::new(1200.0, 1200.0));
        let scene = cache.scene(params, PropagationModel::Hemispherical);

        assert!((scene.projection.origin().x - 600.0).abs() < 1e-9);
        assert_eq!(cache.stats().contour_reuses, 1);
    }
}
