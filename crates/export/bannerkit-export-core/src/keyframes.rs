#![allow(dead_code)]
//! Keyframe / CSS generator.
//!
//! Compiles each (setting, asset) pair into two parallel renditions of the
//! same pose semantics:
//! - native keyframe lists consumed by the interactive scrub engine, and
//! - CSS `@keyframes` blocks plus an `animation` shorthand for static export.
//!
//! Both renditions share the sampler's style -> pose offset table, so the
//! continuous-math and discrete-CSS paths cannot drift apart.

use serde::{Serialize, Serializer};

use bannerkit_timeline_core::{
    entry_pose, exit_pose, shake_amplitude, AnimationSetting, Asset, BannerData, InStyle, MidStyle,
    OutStyle, PhaseWindows, Pose,
};

/// Pulse scale default for the discrete-CSS path (the continuous sampler uses
/// a stronger 1.2; the CSS rendition is deliberately subtler).
const CSS_PULSE_INTENSITY: f32 = 1.05;
/// Iteration counts above this render as `infinite` to bound stylesheet
/// growth for long-running loops.
const MAX_LITERAL_ITERATIONS: f32 = 10.0;

/// One (opacity, transform) stop. Stops are evenly spaced across the
/// keyframe's duration.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeStep {
    pub opacity: f32,
    pub transform: String,
}

/// CSS/WAAPI iteration count. Serialized as a number when finite and as the
/// literal string "infinite" otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IterationCount::Finite(n) => serializer.serialize_u32(*n),
            IterationCount::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl std::fmt::Display for IterationCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IterationCount::Finite(n) => write!(f, "{n}"),
            IterationCount::Infinite => write!(f, "infinite"),
        }
    }
}

/// Timing record attached to one keyframe list. Fill mode is fixed to
/// "forwards" (hold final value).
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeTiming {
    pub delay_ms: f32,
    pub duration_ms: f32,
    pub easing: String,
    pub iterations: IterationCount,
}

impl KeyframeTiming {
    pub const FILL_MODE: &'static str = "forwards";
}

/// A named, ordered keyframe list plus its timing.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeDefinition {
    pub name: String,
    pub steps: Vec<KeyframeStep>,
    pub timing: KeyframeTiming,
}

/// Everything the markup assembler needs for one asset.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedAnimationData {
    pub asset_id: String,
    /// Element id of the layer (also the CSS selector sans `#`).
    pub selector: String,
    pub keyframes: Vec<KeyframeDefinition>,
    /// Absolute placement + initial opacity, applied inline.
    pub initial_style: String,
    /// `@keyframes` blocks for static export (empty when no phases emit).
    pub css: String,
    /// Value of the `animation` shorthand chaining all emitted keyframes.
    pub animation_shorthand: String,
}

/// Restrict an id to characters safe inside element ids and keyframe names.
fn css_ident(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn transform_string(pose: &Pose) -> String {
    format!(
        "translate({}px, {}px) scale({}, {}) rotate({}deg)",
        pose.x, pose.y, pose.scale_x, pose.scale_y, pose.rotation
    )
}

fn step_of(pose: &Pose) -> KeyframeStep {
    KeyframeStep {
        opacity: pose.opacity.clamp(0.0, 1.0),
        transform: transform_string(pose),
    }
}

fn identity_step() -> KeyframeStep {
    step_of(&Pose::IDENTITY)
}

fn scale_step(scale: f32) -> KeyframeStep {
    step_of(&Pose {
        scale_x: scale,
        scale_y: scale,
        ..Pose::IDENTITY
    })
}

fn shift_x_step(x: f32) -> KeyframeStep {
    step_of(&Pose {
        x,
        ..Pose::IDENTITY
    })
}

/// Static-CSS iteration count: `max(1, floor((outStart - midStart) / midDuration))`,
/// rendered literally unless it exceeds the literal cap (then `infinite`).
/// An absent exit loops forever.
fn mid_iterations(setting: &AnimationSetting, windows: &PhaseWindows) -> IterationCount {
    if !windows.out_start.is_finite() {
        return IterationCount::Infinite;
    }
    let count = if setting.mid.duration_ms > 0.0 {
        ((windows.out_start - windows.mid_start) / setting.mid.duration_ms)
            .floor()
            .max(1.0)
    } else {
        1.0
    };
    if count > MAX_LITERAL_ITERATIONS {
        IterationCount::Infinite
    } else {
        IterationCount::Finite(count as u32)
    }
}

fn mid_definition(
    setting: &AnimationSetting,
    windows: &PhaseWindows,
    ident: &str,
) -> Option<KeyframeDefinition> {
    if !windows.mid_active(setting.mid.style) {
        return None;
    }
    let steps = match setting.mid.style {
        MidStyle::Pulse => {
            let intensity = setting.mid.params.intensity.unwrap_or(CSS_PULSE_INTENSITY);
            vec![scale_step(1.0), scale_step(intensity), scale_step(1.0)]
        }
        MidStyle::Shake => {
            let amt = shake_amplitude(setting.mid.params.intensity);
            vec![
                shift_x_step(0.0),
                shift_x_step(amt),
                shift_x_step(-amt),
                shift_x_step(amt),
                shift_x_step(0.0),
            ]
        }
        MidStyle::None | MidStyle::Custom => return None,
    };
    Some(KeyframeDefinition {
        name: format!("kf-{ident}-mid"),
        steps,
        timing: KeyframeTiming {
            delay_ms: windows.mid_start,
            duration_ms: setting.mid.duration_ms,
            easing: setting.mid.easing.clone(),
            iterations: mid_iterations(setting, windows),
        },
    })
}

/// Compile one (setting, asset) pair.
pub fn render_setting(setting: &AnimationSetting, asset: &Asset) -> RenderedAnimationData {
    let ident = css_ident(&asset.id);
    let selector = format!("layer-{ident}");
    let windows = PhaseWindows::of(setting);
    let mut defs: Vec<KeyframeDefinition> = Vec::with_capacity(3);

    if setting.r#in.style != InStyle::None {
        let from = entry_pose(setting.r#in.style, &setting.r#in.params);
        defs.push(KeyframeDefinition {
            name: format!("kf-{ident}-in"),
            steps: vec![step_of(&from), identity_step()],
            timing: KeyframeTiming {
                delay_ms: setting.r#in.delay_ms,
                duration_ms: setting.r#in.duration_ms,
                easing: setting.r#in.easing.clone(),
                iterations: IterationCount::Finite(1),
            },
        });
    }

    if let Some(def) = mid_definition(setting, &windows, &ident) {
        defs.push(def);
    }

    if setting.out.style != OutStyle::None {
        let to = exit_pose(setting.out.style, &setting.out.params);
        defs.push(KeyframeDefinition {
            name: format!("kf-{ident}-out"),
            steps: vec![identity_step(), step_of(&to)],
            timing: KeyframeTiming {
                delay_ms: setting.out.delay_ms,
                duration_ms: setting.out.duration_ms,
                easing: setting.out.easing.clone(),
                iterations: IterationCount::Finite(1),
            },
        });
    }

    let initial_opacity = if setting.r#in.style == InStyle::None {
        1
    } else {
        0
    };
    let g = &asset.geometry;
    let initial_style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;opacity:{initial_opacity};",
        g.x, g.y, g.width, g.height
    );

    let css = defs.iter().map(keyframes_block).collect::<Vec<_>>().join("\n");
    let animation_shorthand = defs
        .iter()
        .map(shorthand_fragment)
        .collect::<Vec<_>>()
        .join(", ");

    RenderedAnimationData {
        asset_id: asset.id.clone(),
        selector,
        keyframes: defs,
        initial_style,
        css,
        animation_shorthand,
    }
}

/// Compile every resolved (setting, asset) pair in setting order.
pub fn render_animations(banner: &BannerData) -> Vec<RenderedAnimationData> {
    banner
        .resolved_layers()
        .into_iter()
        .map(|(setting, asset)| render_setting(setting, asset))
        .collect()
}

fn keyframes_block(def: &KeyframeDefinition) -> String {
    let n = def.steps.len();
    let mut out = format!("@keyframes {} {{\n", def.name);
    for (i, step) in def.steps.iter().enumerate() {
        let offset = if n <= 1 { 100 } else { i * 100 / (n - 1) };
        out.push_str(&format!(
            "  {offset}% {{ opacity: {}; transform: {}; }}\n",
            step.opacity, step.transform
        ));
    }
    out.push('}');
    out
}

/// `name duration easing delay iteration-count fill-mode`, one comma-joined
/// fragment per emitted keyframe list.
fn shorthand_fragment(def: &KeyframeDefinition) -> String {
    format!(
        "{} {}ms {} {}ms {} {}",
        def.name,
        def.timing.duration_ms,
        def.timing.easing,
        def.timing.delay_ms,
        def.timing.iterations,
        KeyframeTiming::FILL_MODE
    )
}
