use serde::Serialize;
use tracing::debug;

use crate::config::MachiningRates;

/// Aggregate measures the time estimate is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeInputs {
    /// Raw stock block volume (mm³).
    pub stock_volume: f64,
    /// Model bounding-box volume (mm³).
    pub bounding_box_volume: f64,
    /// Model volume (mm³).
    pub model_volume: f64,
    /// Total model surface area (mm²).
    pub surface_area: f64,
    /// Area of the 3D faces (mm²).
    pub three_d_area: f64,
    /// Number of 3D faces, before deduplication.
    pub three_d_face_count: usize,
}

/// Estimated machining minutes per process step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MachiningTime {
    /// Facing the stock down to the bounding box.
    pub bb_roughing: f64,
    /// Roughing the bounding box down to the model.
    pub model_roughing: f64,
    /// Finishing the linear surfaces.
    pub finish: f64,
    /// Contouring the 3D surfaces.
    pub three_d: f64,
    /// Drilling, threading and pocket features. Always zero for now.
    pub feature: f64,
    /// Sum of all steps.
    pub total: f64,
}

/// Converts aggregate measures into machining minutes.
///
/// Differences of measures are clamped at zero, so every bucket is
/// non-negative even when the kernel reports slightly inconsistent values
/// (a model volume a hair above its bounding box, say).
#[must_use]
pub fn estimate_machining_time(inputs: &TimeInputs, rates: &MachiningRates) -> MachiningTime {
    let bb_roughing = (inputs.stock_volume - inputs.bounding_box_volume).max(0.0) * rates.rate_bb;
    let model_roughing =
        (inputs.bounding_box_volume - inputs.model_volume).max(0.0) * rates.rate_roughing;
    let finish = (inputs.surface_area - inputs.three_d_area).max(0.0) * rates.rate_finish;
    #[allow(clippy::cast_precision_loss)]
    let three_d = inputs.three_d_area.max(0.0) * rates.rate_per_area
        + inputs.three_d_face_count as f64 * rates.rate_per_surface;
    let feature = feature_minutes();
    let total = bb_roughing + model_roughing + finish + three_d + feature;

    debug!(
        bb_roughing,
        model_roughing, finish, three_d, total, "Estimated machining time"
    );
    MachiningTime {
        bb_roughing,
        model_roughing,
        finish,
        three_d,
        feature,
        total,
    }
}

// Feature recognition (holes, threads, pockets) is not implemented, so this
// bucket contributes nothing to the total.
fn feature_minutes() -> f64 {
    0.0
}
