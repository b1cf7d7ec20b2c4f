#![allow(dead_code)]
//! Phase resolver / sampler: (setting, asset, time) -> Pose.
//!
//! Model:
//! - Each setting is a small interval state machine over the time axis:
//!   [inStart,inEnd], [midStart,midEnd], [outStart,outEnd], resolved in that
//!   fixed priority order.
//! - The mid interval starts at max(authored mid delay, in end); if that start
//!   does not precede the out start, the attention loop is suppressed
//!   entirely. This reproduces the authoring tool's documented sequencing.
//! - Pure and total: identical inputs always yield bit-identical poses, which
//!   frame capture for video relies on.

use std::f32::consts::PI;

use crate::data::{AnimationSetting, Asset, InStyle, MidStyle, OutStyle, PhaseParams};
use crate::interp::functions::{ease_in_out, phase_progress};
use crate::pose::Pose;

/// Entry/exit displacement for the slide family, in pixels.
const SLIDE_OFFSET: f32 = 30.0;
/// Pre-entry / post-exit scale for the zoom family.
const ZOOM_SCALE: f32 = 0.8;
/// Default attention intensity when the phase carries none.
const DEFAULT_INTENSITY: f32 = 1.2;
/// Shake displacement never collapses below this many pixels.
const MIN_SHAKE_AMPLITUDE: f32 = 2.0;

/// The computed in/mid/out intervals for one setting, in milliseconds.
/// An absent or `none` out phase is treated as starting at +inf, so the mid
/// loop is never suppressed by it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseWindows {
    pub in_start: f32,
    pub in_end: f32,
    pub mid_start: f32,
    pub mid_end: f32,
    pub out_start: f32,
    pub out_end: f32,
}

impl PhaseWindows {
    pub fn of(setting: &AnimationSetting) -> Self {
        let in_start = setting.r#in.delay_ms;
        let in_end = in_start + setting.r#in.duration_ms;
        // The authored mid delay is overridden when it would overlap the
        // entry phase; see the authoring tool's sequencing rules.
        let mid_start = setting.mid.delay_ms.max(in_end);
        let mid_end = mid_start + setting.mid.duration_ms;
        let (out_start, out_end) = if setting.out.style == OutStyle::None {
            (f32::INFINITY, f32::INFINITY)
        } else {
            let s = setting.out.delay_ms;
            (s, s + setting.out.duration_ms)
        };
        Self {
            in_start,
            in_end,
            mid_start,
            mid_end,
            out_start,
            out_end,
        }
    }

    /// True when the attention loop may run at all for this setting.
    pub fn mid_active(&self, style: MidStyle) -> bool {
        matches!(style, MidStyle::Pulse | MidStyle::Shake) && self.mid_start < self.out_start
    }
}

/// Pre-entry pose (relative to the asset's captured placement) for an entry
/// style. `custom` reads the phase's raw fields literally; opacity defaults
/// to 0 when absent.
pub fn entry_pose(style: InStyle, params: &PhaseParams) -> Pose {
    match style {
        InStyle::None => Pose::IDENTITY,
        InStyle::FadeIn => Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        },
        InStyle::SlideInUp => slide_pose(0.0, -SLIDE_OFFSET),
        InStyle::SlideInDown => slide_pose(0.0, SLIDE_OFFSET),
        InStyle::SlideInLeft => slide_pose(-SLIDE_OFFSET, 0.0),
        InStyle::SlideInRight => slide_pose(SLIDE_OFFSET, 0.0),
        InStyle::ZoomIn => Pose {
            opacity: 0.0,
            scale_x: ZOOM_SCALE,
            scale_y: ZOOM_SCALE,
            ..Pose::IDENTITY
        },
        InStyle::Custom => custom_pose(params),
    }
}

/// Post-exit pose for an exit style, mirroring the entry table.
pub fn exit_pose(style: OutStyle, params: &PhaseParams) -> Pose {
    match style {
        OutStyle::None => Pose::IDENTITY,
        OutStyle::FadeOut => Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        },
        OutStyle::SlideOutUp => slide_pose(0.0, -SLIDE_OFFSET),
        OutStyle::SlideOutDown => slide_pose(0.0, SLIDE_OFFSET),
        OutStyle::SlideOutLeft => slide_pose(-SLIDE_OFFSET, 0.0),
        OutStyle::SlideOutRight => slide_pose(SLIDE_OFFSET, 0.0),
        OutStyle::ZoomOut => Pose {
            opacity: 0.0,
            scale_x: ZOOM_SCALE,
            scale_y: ZOOM_SCALE,
            ..Pose::IDENTITY
        },
        OutStyle::Custom => custom_pose(params),
    }
}

fn slide_pose(x: f32, y: f32) -> Pose {
    Pose {
        opacity: 0.0,
        x,
        y,
        ..Pose::IDENTITY
    }
}

fn custom_pose(params: &PhaseParams) -> Pose {
    let scale = params.scale.unwrap_or(1.0);
    Pose {
        opacity: params.opacity.unwrap_or(0.0),
        x: params.x.unwrap_or(0.0),
        y: params.y.unwrap_or(0.0),
        scale_x: scale,
        scale_y: scale,
        rotation: params.rotation.unwrap_or(0.0),
    }
}

/// Shake displacement in pixels for a given intensity, floored so the motion
/// never collapses to zero.
#[inline]
pub fn shake_amplitude(intensity: Option<f32>) -> f32 {
    ((intensity.unwrap_or(DEFAULT_INTENSITY) - 1.0) * 20.0).max(MIN_SHAKE_AMPLITUDE)
}

fn attention_pose(setting: &AnimationSetting, windows: &PhaseWindows, time: f32) -> Pose {
    if setting.mid.duration_ms <= 0.0 {
        return Pose::IDENTITY;
    }
    let p = (time - windows.mid_start) / setting.mid.duration_ms;
    match setting.mid.style {
        MidStyle::Pulse => {
            let intensity = setting.mid.params.intensity.unwrap_or(DEFAULT_INTENSITY);
            let scale = 1.0 + (intensity - 1.0) * (4.0 * PI * p).sin() * 0.5;
            Pose {
                scale_x: scale,
                scale_y: scale,
                ..Pose::IDENTITY
            }
        }
        MidStyle::Shake => {
            let amt = shake_amplitude(setting.mid.params.intensity);
            Pose {
                x: (20.0 * PI * p).sin() * amt,
                y: (15.0 * PI * p).cos() * 0.5 * amt,
                ..Pose::IDENTITY
            }
        }
        MidStyle::None | MidStyle::Custom => Pose::IDENTITY,
    }
}

/// Sample one setting at `time_ms`, anchored to the asset's captured
/// placement. Deterministic and state-free; negative times clamp to zero and
/// times past the exit hold the post-exit pose.
pub fn sample_pose(setting: &AnimationSetting, asset: &Asset, time_ms: f32) -> Pose {
    let time = if time_ms.is_finite() {
        time_ms.max(0.0)
    } else {
        0.0
    };
    let windows = PhaseWindows::of(setting);
    anchor(relative_pose(setting, &windows, time), asset).clamped()
}

/// The pose before anchoring: offsets relative to the captured geometry.
fn relative_pose(setting: &AnimationSetting, windows: &PhaseWindows, time: f32) -> Pose {
    // 1-2) Entry: hold the pre-entry pose, then ease toward identity.
    if setting.r#in.style != InStyle::None {
        let from = entry_pose(setting.r#in.style, &setting.r#in.params);
        if time < windows.in_start {
            return from;
        }
        if time <= windows.in_end {
            let p = ease_in_out(phase_progress(time, windows.in_start, setting.r#in.duration_ms));
            return Pose::lerp(&from, &Pose::IDENTITY, p);
        }
    }

    // 3) Attention loop, only when its computed start precedes the exit.
    if windows.mid_active(setting.mid.style)
        && time >= windows.mid_start
        && time <= windows.mid_end
    {
        return attention_pose(setting, windows, time);
    }

    // 4-5) Exit: ease toward the post-exit pose, then hold it.
    if setting.out.style != OutStyle::None {
        let to = exit_pose(setting.out.style, &setting.out.params);
        if time > windows.out_end {
            return to;
        }
        if time >= windows.out_start {
            let p = ease_in_out(phase_progress(time, windows.out_start, setting.out.duration_ms));
            return Pose::lerp(&Pose::IDENTITY, &to, p);
        }
    }

    Pose::IDENTITY
}

fn anchor(pose: Pose, asset: &Asset) -> Pose {
    Pose {
        x: asset.geometry.x + pose.x,
        y: asset.geometry.y + pose.y,
        ..pose
    }
}
