#![allow(dead_code)]
//! Bannerkit Timeline Core (host-agnostic)
//!
//! The pure half of the banner pipeline: the declarative per-layer timeline
//! model (entry / attention-loop / exit phases), the time -> pose sampler used
//! for both interactive scrubbing and discrete frame capture, and the capture
//! planner that bakes a whole banner into fixed-step pose frames.

pub mod capture;
pub mod data;
pub mod interp;
pub mod pose;
pub mod sampling;

// Re-exports for consumers (adapters and the export crate)
pub use capture::{plan_frames, plan_to_json, CaptureConfig, CapturedFrame, FramePlan, FramePose};
pub use data::{
    AnimationSetting, Asset, BannerData, ExportPreset, Geometry, InPhase, InStyle, LayerKind,
    MidPhase, MidStyle, OutPhase, OutStyle, Phase, PhaseParams,
};
pub use interp::functions::ease_in_out;
pub use pose::Pose;
pub use sampling::{entry_pose, exit_pose, sample_pose, shake_amplitude, PhaseWindows};
