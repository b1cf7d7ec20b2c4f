use bannerkit_export_core::{
    export_batch, export_interactive, export_static, CancelToken, ExportJob, SourceMap,
};
use bannerkit_timeline_core::BannerData;

fn load(name: &str) -> BannerData {
    bannerkit_test_fixtures::banners::load(name).expect("fixture should parse")
}

fn sources_for(banner: &BannerData) -> SourceMap {
    let mut sources = SourceMap::new();
    for asset in &banner.assets {
        sources.insert(asset.id.clone(), format!("images/{}.png", asset.id));
    }
    sources
}

fn job(name: &str) -> ExportJob {
    let banner = load(name);
    let sources = sources_for(&banner);
    ExportJob { banner, sources }
}

#[test]
fn static_export_is_minified_with_manifest() {
    let banner = load("showcase");
    let export = export_static(&banner, &sources_for(&banner)).expect("export");
    assert!(!export.document.contains('\n'));
    assert!(export.document.contains("@keyframes"));
    let manifest = export.manifest.expect("google-ads manifest");
    assert_eq!(manifest["width"], "728");
}

#[test]
fn static_export_keeps_keyframe_percent_selectors() {
    let banner = load("showcase");
    let export = export_static(&banner, &sources_for(&banner)).expect("export");
    assert!(export.document.contains("0%{"));
    assert!(export.document.contains("100%{"));
    assert!(!export.document.contains("{0{"));
}

#[test]
fn xandr_export_carries_no_manifest() {
    let banner = load("xandr-minimal");
    let export = export_static(&banner, &sources_for(&banner)).expect("export");
    assert!(export.manifest.is_none());
    assert!(export.document.contains("${CLICK_URL}"));
}

#[test]
fn interactive_export_stays_legible() {
    let banner = load("single-fade");
    let doc = export_interactive(&banner, &sources_for(&banner)).expect("export");
    assert!(doc.contains('\n'));
    assert!(doc.contains("postMessage"));
}

#[test]
fn invalid_banner_is_rejected() {
    let mut banner = load("single-fade");
    banner.width = 0;
    let err = export_static(&banner, &SourceMap::new()).unwrap_err();
    assert!(err.to_string().contains("invalid banner data"));
}

#[test]
fn batch_keeps_completed_items_and_tags_failures_by_index() {
    let mut broken = job("single-fade");
    broken.banner.duration_ms = 0.0;
    let jobs = vec![job("single-fade"), broken, job("showcase")];

    let outcome = export_batch(&jobs, &CancelToken::new());
    assert!(!outcome.cancelled);
    let indices: Vec<usize> = outcome.exports.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [0, 2]);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].index, 1);
    assert!(outcome.failures[0].message.contains("index 1"));
}

#[test]
fn cancelled_batch_stops_between_items() {
    let jobs = vec![job("single-fade"), job("showcase")];
    let cancel = CancelToken::new();
    cancel.cancel();
    let outcome = export_batch(&jobs, &cancel);
    assert!(outcome.cancelled);
    assert!(outcome.exports.is_empty());
    assert!(outcome.failures.is_empty());
}
