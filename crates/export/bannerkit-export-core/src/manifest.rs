#![allow(dead_code)]
//! Manifest generator: the network-specific sidecar document.
//!
//! Pure function of the preset and banner metadata. Some networks manage
//! sizing/click-through outside the package and get no manifest at all.

use serde::{Deserialize, Serialize};
use serde_json::json;

use bannerkit_timeline_core::ExportPreset;

/// Banner metadata the manifest shapes draw from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestInputs {
    pub frame_name: String,
    pub banner_width: u32,
    pub banner_height: u32,
    pub click_tag: String,
}

/// Produce the preset's manifest document, or `None` when the network takes
/// none (xandr resolves size and clicks server-side).
pub fn manifest_for(preset: ExportPreset, inputs: &ManifestInputs) -> Option<serde_json::Value> {
    match preset {
        // iab/google: dimensions as strings, clickTag under `clicktags`.
        ExportPreset::Iab | ExportPreset::GoogleAds => Some(json!({
            "title": inputs.frame_name,
            "description": "",
            "width": inputs.banner_width.to_string(),
            "height": inputs.banner_height.to_string(),
            "clicktags": {
                "clickTag": inputs.click_tag,
            },
        })),
        // sizmek: numeric dimensions, named clickThrough record.
        ExportPreset::Sizmek => Some(json!({
            "width": inputs.banner_width,
            "height": inputs.banner_height,
            "clickThrough": {
                "url": inputs.click_tag,
                "name": "clickTag",
            },
        })),
        ExportPreset::Xandr => None,
    }
}
