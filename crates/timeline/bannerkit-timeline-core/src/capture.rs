#![allow(dead_code)]
//! Capture planner: bake a banner's timeline into fixed-step pose frames for
//! video export. The host composites each frame's poses onto its canvas; this
//! crate only does the time math.

use serde::{Deserialize, Serialize};

use crate::data::BannerData;
use crate::pose::Pose;
use crate::sampling::sample_pose;

/// Default capture step (~30 fps).
pub const DEFAULT_FRAME_STEP_MS: f32 = 33.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// Time between captured frames, in milliseconds.
    pub frame_step_ms: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_step_ms: DEFAULT_FRAME_STEP_MS,
        }
    }
}

/// One resolved layer pose inside a captured frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FramePose {
    pub asset_id: String,
    pub pose: Pose,
}

/// All layer poses at one step's time, in setting order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapturedFrame {
    pub index: usize,
    pub time_ms: f32,
    pub poses: Vec<FramePose>,
}

/// The full fixed-step plan for one banner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FramePlan {
    pub frame_step_ms: f32,
    pub frames: Vec<CapturedFrame>,
}

/// Produce `floor(duration / step)` frames, each holding every resolved
/// asset's pose at that step's time. Settings without a matching asset are
/// dropped, matching the sampler's resolution rules.
pub fn plan_frames(banner: &BannerData, cfg: &CaptureConfig) -> FramePlan {
    let step = if cfg.frame_step_ms.is_finite() && cfg.frame_step_ms > 0.0 {
        cfg.frame_step_ms
    } else {
        DEFAULT_FRAME_STEP_MS
    };
    let duration = banner.duration_ms.max(0.0);
    let frame_count = (duration / step).floor() as usize;

    let layers = banner.resolved_layers();
    let mut frames = Vec::with_capacity(frame_count);
    for index in 0..frame_count {
        let time_ms = index as f32 * step;
        let poses = layers
            .iter()
            .map(|(setting, asset)| FramePose {
                asset_id: asset.id.clone(),
                pose: sample_pose(setting, asset, time_ms),
            })
            .collect();
        frames.push(CapturedFrame {
            index,
            time_ms,
            poses,
        });
    }

    FramePlan {
        frame_step_ms: step,
        frames,
    }
}

/// Export a plan as serde_json::Value (stable schema for FFI/tooling).
pub fn plan_to_json(plan: &FramePlan) -> serde_json::Value {
    serde_json::to_value(plan).unwrap_or(serde_json::Value::Null)
}
