#![allow(dead_code)]
//! The resolved state of one layer at a single instant.

use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_f32;

/// Resolved per-instant layer state. `x`/`y` are absolute banner-local pixels
/// (the asset's captured position plus any phase offset); scale is relative to
/// the asset's captured size. Applying this to a live visual target is the
/// adapter's job, not this crate's.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
}

impl Pose {
    /// Fully visible, unmoved, unscaled, unrotated.
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
    };

    /// Component-wise linear blend.
    pub fn lerp(a: &Pose, b: &Pose, t: f32) -> Pose {
        Pose {
            opacity: lerp_f32(a.opacity, b.opacity, t),
            x: lerp_f32(a.x, b.x, t),
            y: lerp_f32(a.y, b.y, t),
            scale_x: lerp_f32(a.scale_x, b.scale_x, t),
            scale_y: lerp_f32(a.scale_y, b.scale_y, t),
            rotation: lerp_f32(a.rotation, b.rotation, t),
        }
    }

    /// Clamp opacity into [0,1]; other components are unbounded.
    pub fn clamped(mut self) -> Pose {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}
