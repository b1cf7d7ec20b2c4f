#![allow(dead_code)]
//! Per-network packaging rules.
//!
//! Each supported ad network fixes its own header script, click handling,
//! wrapper element, clickTag injection, and loop eligibility. All dispatch is
//! an exhaustive match on `ExportPreset` so adding a network is a
//! compile-time-checked change.

use bannerkit_timeline_core::ExportPreset;

/// Sizmek creatives load the vendor SDK from the ad server before anything
/// else in the document.
const SIZMEK_LOADER: &str = "<script src=\"https://secure-ds.serving-sys.com/BurstingPipe/adServer.bs?cn=tbl&c=28&pli=&PluID=0&ord=[timestamp]\"></script>";

/// Xandr resolves this macro server-side; the document must not carry a
/// literal landing URL.
pub const XANDR_CLICK_MACRO: &str = "${CLICK_URL}";

/// Vendor script injected into the document head, before styles.
pub fn header_script(preset: ExportPreset) -> Option<&'static str> {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds | ExportPreset::Xandr => None,
        ExportPreset::Sizmek => Some(SIZMEK_LOADER),
    }
}

/// Literal `clickTag` variable assignment (iab/google only; other networks
/// either use their SDK or resolve clicks server-side).
pub fn clicktag_script(preset: ExportPreset, click_url: &str) -> Option<String> {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds => Some(format!(
            "<script>var clickTag = \"{click_url}\";</script>"
        )),
        ExportPreset::Sizmek | ExportPreset::Xandr => None,
    }
}

/// Opening markup of the banner wrapper. Xandr wraps the container in an
/// anchor carrying the unresolved click macro.
pub fn wrapper_open(preset: ExportPreset) -> String {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds | ExportPreset::Sizmek => {
            "<div id=\"banner\">".to_string()
        }
        ExportPreset::Xandr => format!(
            "<a href=\"{XANDR_CLICK_MACRO}\" target=\"_blank\"><div id=\"banner\">"
        ),
    }
}

pub fn wrapper_close(preset: ExportPreset) -> &'static str {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds | ExportPreset::Sizmek => "</div>",
        ExportPreset::Xandr => "</div></a>",
    }
}

/// Click-through script appended after the wrapper. Xandr leaves clicks to
/// the network's anchor.
pub fn click_handler_script(preset: ExportPreset) -> Option<&'static str> {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds => Some(
            "<script>document.getElementById(\"banner\").addEventListener(\"click\", function () { window.open(window.clickTag, \"_blank\"); });</script>",
        ),
        ExportPreset::Sizmek => Some(
            "<script>document.getElementById(\"banner\").addEventListener(\"click\", function () { EB.clickthrough(); });</script>",
        ),
        ExportPreset::Xandr => None,
    }
}

/// Reload-after-total-duration loop script. Honored only for iab/google,
/// regardless of the caller's flag.
pub fn loop_script(preset: ExportPreset, loop_enabled: bool, duration_ms: f32) -> Option<String> {
    match preset {
        ExportPreset::Iab | ExportPreset::GoogleAds if loop_enabled => Some(format!(
            "<script>setTimeout(function () {{ location.reload(); }}, {duration_ms});</script>"
        )),
        _ => None,
    }
}
