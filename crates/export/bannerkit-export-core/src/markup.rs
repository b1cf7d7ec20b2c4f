#![allow(dead_code)]
//! Markup assembler: one self-contained document per banner.
//!
//! Interactive documents drive native animations from a scrub-control script
//! (paused at time zero until the host says otherwise); static documents rely
//! on CSS `@keyframes` plus the network preset's click/loop plumbing and are
//! minified downstream.

use hashbrown::HashMap;
use serde_json::json;

use bannerkit_timeline_core::BannerData;

use crate::keyframes::RenderedAnimationData;
use crate::preset;

/// Per-asset visual content: inline data URI (interactive) or relative file
/// path (static), keyed by asset id.
pub type SourceMap = HashMap<String, String>;

/// Static-mode no-script fallback image reference.
const FALLBACK_IMAGE: &str = "backup.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentMode {
    /// Scrub-authoritative preview driven by SEEK/PLAY/PAUSE messages.
    Interactive,
    /// Network-ready document; animations are plain CSS.
    Static,
}

/// Compose the full document string for one banner.
pub fn assemble_document(
    banner: &BannerData,
    rendered: &[RenderedAnimationData],
    sources: &SourceMap,
    mode: DocumentMode,
) -> String {
    let mut doc = String::with_capacity(4096);
    let width = banner.width;
    let height = banner.height;
    let background = if banner.background_color.is_empty() {
        "transparent"
    } else {
        banner.background_color.as_str()
    };

    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    doc.push_str(&format!(
        "<meta name=\"ad.size\" content=\"width={width},height={height}\">\n"
    ));
    doc.push_str(&format!("<title>{}</title>\n", banner.name));

    if let Some(loader) = preset::header_script(banner.preset) {
        doc.push_str(loader);
        doc.push('\n');
    }
    if let Some(clicktag) = preset::clicktag_script(banner.preset, &banner.click_url) {
        doc.push_str(&clicktag);
        doc.push('\n');
    }

    doc.push_str("<style>\n");
    doc.push_str("html, body { margin: 0; padding: 0; }\n");
    doc.push_str(&format!(
        "#banner {{ position: relative; overflow: hidden; width: {width}px; height: {height}px; background-color: {background}; }}\n"
    ));
    doc.push_str(".layer { position: absolute; }\n");
    doc.push_str(".layer img { width: 100%; height: 100%; display: block; }\n");
    if mode == DocumentMode::Static {
        for item in rendered {
            if item.keyframes.is_empty() {
                continue;
            }
            doc.push_str(&item.css);
            doc.push('\n');
            doc.push_str(&format!(
                "#{} {{ animation: {}; }}\n",
                item.selector, item.animation_shorthand
            ));
        }
    }
    doc.push_str("</style>\n</head>\n<body>\n");

    doc.push_str(&preset::wrapper_open(banner.preset));
    doc.push('\n');
    for item in rendered {
        doc.push_str(&format!(
            "<div class=\"layer\" id=\"{}\" style=\"{}\">",
            item.selector, item.initial_style
        ));
        if let Some(src) = sources.get(&item.asset_id) {
            doc.push_str(&format!("<img src=\"{src}\" alt=\"{}\">", item.asset_id));
        }
        doc.push_str("</div>\n");
    }
    doc.push_str(preset::wrapper_close(banner.preset));
    doc.push('\n');

    match mode {
        DocumentMode::Interactive => {
            doc.push_str(&control_script(rendered));
            doc.push('\n');
        }
        DocumentMode::Static => {
            if let Some(handler) = preset::click_handler_script(banner.preset) {
                doc.push_str(handler);
                doc.push('\n');
            }
            if let Some(loop_tag) =
                preset::loop_script(banner.preset, banner.loop_enabled, banner.duration_ms)
            {
                doc.push_str(&loop_tag);
                doc.push('\n');
            }
            doc.push_str(&format!(
                "<noscript><img src=\"{FALLBACK_IMAGE}\" width=\"{width}\" height=\"{height}\" alt=\"{}\"></noscript>\n",
                banner.name
            ));
        }
    }

    doc.push_str("</body>\n</html>\n");
    doc
}

/// The scrub-control script: construct every native animation paused at time
/// zero, emit one `ready` signal, then apply SEEK/PLAY/PAUSE messages to the
/// whole animation set uniformly.
fn control_script(rendered: &[RenderedAnimationData]) -> String {
    let timeline: Vec<serde_json::Value> = rendered
        .iter()
        .filter(|item| !item.keyframes.is_empty())
        .map(|item| {
            json!({
                "selector": item.selector,
                "keyframes": item.keyframes,
            })
        })
        .collect();
    let timeline_json =
        serde_json::to_string(&timeline).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<script>
(function () {{
  var timeline = {timeline_json};
  var anims = [];
  timeline.forEach(function (item) {{
    var el = document.getElementById(item.selector);
    if (!el) {{ return; }}
    item.keyframes.forEach(function (def) {{
      var frames = def.steps.map(function (s) {{
        return {{ opacity: s.opacity, transform: s.transform }};
      }});
      var iterations = def.timing.iterations === "infinite" ? Infinity : def.timing.iterations;
      var anim = el.animate(frames, {{
        delay: def.timing.delayMs,
        duration: def.timing.durationMs,
        easing: def.timing.easing,
        iterations: iterations,
        fill: "forwards"
      }});
      anim.pause();
      anim.currentTime = 0;
      anims.push(anim);
    }});
  }});
  window.parent.postMessage({{ type: "ready" }}, "*");
  window.addEventListener("message", function (ev) {{
    var msg = ev.data || {{}};
    if (msg.type === "seek") {{
      anims.forEach(function (a) {{ a.currentTime = msg.time; }});
    }} else if (msg.type === "play") {{
      anims.forEach(function (a) {{ a.play(); }});
    }} else if (msg.type === "pause") {{
      anims.forEach(function (a) {{ a.pause(); }});
    }}
  }});
}})();
</script>"#
    )
}
