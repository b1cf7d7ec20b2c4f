#![allow(dead_code)]
//! Canonical banner timeline data model.
//! Pose/sampling math lives in pose.rs and sampling.rs.

use serde::{Deserialize, Serialize};

/// Captured layer geometry in banner-local pixels.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Kind tag carried over from the host design surface.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    Image,
    Text,
    Shape,
    Group,
}

/// One visual layer captured for a generation pass. Immutable once captured.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub geometry: Geometry,
}

/// Entry styles. `Custom` reads the phase's raw fields instead of a preset.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InStyle {
    #[default]
    None,
    FadeIn,
    SlideInUp,
    SlideInDown,
    SlideInLeft,
    SlideInRight,
    ZoomIn,
    Custom,
}

/// Attention-loop styles applied between entry and exit.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MidStyle {
    #[default]
    None,
    Pulse,
    Shake,
    /// No defined attention motion; contributes nothing (same as `None`).
    Custom,
}

/// Exit styles, mirrored from the entry family.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutStyle {
    #[default]
    None,
    FadeOut,
    SlideOutUp,
    SlideOutDown,
    SlideOutLeft,
    SlideOutRight,
    ZoomOut,
    Custom,
}

/// Raw numeric fields, read only by `Custom` styles and the attention family.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PhaseParams {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub scale: Option<f32>,
    #[serde(default)]
    pub rotation: Option<f32>,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub intensity: Option<f32>,
}

/// One timed phase of a setting (entry, attention, or exit depending on `S`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phase<S> {
    pub style: S,
    /// Start offset from t=0 in milliseconds.
    #[serde(default, rename = "delay")]
    pub delay_ms: f32,
    /// Phase length in milliseconds.
    #[serde(default = "default_phase_duration", rename = "duration")]
    pub duration_ms: f32,
    /// Easing name passed through verbatim to CSS / Web Animations timing.
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(flatten)]
    pub params: PhaseParams,
}

fn default_phase_duration() -> f32 {
    500.0
}

fn default_easing() -> String {
    "ease-in-out".to_string()
}

impl<S: Default> Default for Phase<S> {
    fn default() -> Self {
        Self {
            style: S::default(),
            delay_ms: 0.0,
            duration_ms: default_phase_duration(),
            easing: default_easing(),
            params: PhaseParams::default(),
        }
    }
}

pub type InPhase = Phase<InStyle>;
pub type MidPhase = Phase<MidStyle>;
pub type OutPhase = Phase<OutStyle>;

/// Binds one in/mid/out phase triple to an asset id.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSetting {
    pub asset_id: String,
    #[serde(default, rename = "in")]
    pub r#in: InPhase,
    #[serde(default)]
    pub mid: MidPhase,
    #[serde(default)]
    pub out: OutPhase,
}

/// Advertising-network packaging profile.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExportPreset {
    #[default]
    Iab,
    GoogleAds,
    Sizmek,
    Xandr,
}

/// The aggregate passed into a generation request. Constructed fresh per call;
/// nothing here persists across invocations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerData {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub click_url: String,
    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    /// Total timeline duration in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: f32,
    #[serde(default)]
    pub settings: Vec<AnimationSetting>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub preset: ExportPreset,
}

impl BannerData {
    /// Validate basic invariants (positive canvas, finite non-zero duration).
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("BannerData dimensions must be > 0".into());
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err("BannerData.duration must be a finite positive number of ms".into());
        }
        for setting in &self.settings {
            for (slot, delay, duration) in [
                ("in", setting.r#in.delay_ms, setting.r#in.duration_ms),
                ("mid", setting.mid.delay_ms, setting.mid.duration_ms),
                ("out", setting.out.delay_ms, setting.out.duration_ms),
            ] {
                if !delay.is_finite() || delay < 0.0 || !duration.is_finite() || duration < 0.0 {
                    return Err(format!(
                        "{} phase timing must be finite and non-negative for '{}'",
                        slot, setting.asset_id
                    ));
                }
            }
        }
        Ok(())
    }

    /// Pair each setting with its asset, in setting order. Settings whose id
    /// matches no asset are dropped, not errors.
    pub fn resolved_layers(&self) -> Vec<(&AnimationSetting, &Asset)> {
        let mut out = Vec::with_capacity(self.settings.len());
        for setting in &self.settings {
            match self.assets.iter().find(|a| a.id == setting.asset_id) {
                Some(asset) => out.push((setting, asset)),
                None => log::warn!(
                    "animation setting references unknown asset '{}'; dropping it",
                    setting.asset_id
                ),
            }
        }
        out
    }
}
