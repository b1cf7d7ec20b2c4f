use bannerkit_export_core::{manifest_for, ManifestInputs};
use bannerkit_timeline_core::ExportPreset;

fn inputs() -> ManifestInputs {
    ManifestInputs {
        frame_name: "spring-sale".to_string(),
        banner_width: 300,
        banner_height: 250,
        click_tag: "https://example.com/sale".to_string(),
    }
}

#[test]
fn iab_manifest_uses_string_dimensions_and_clicktags() {
    let manifest = manifest_for(ExportPreset::Iab, &inputs()).expect("iab manifest");
    assert_eq!(manifest["title"], "spring-sale");
    assert_eq!(manifest["description"], "");
    assert_eq!(manifest["width"], "300");
    assert_eq!(manifest["height"], "250");
    assert_eq!(manifest["clicktags"]["clickTag"], "https://example.com/sale");
    // google-ads shares the default shape
    assert_eq!(
        manifest_for(ExportPreset::GoogleAds, &inputs()),
        manifest_for(ExportPreset::Iab, &inputs())
    );
}

#[test]
fn sizmek_manifest_uses_numeric_dimensions() {
    let manifest = manifest_for(ExportPreset::Sizmek, &inputs()).expect("sizmek manifest");
    assert!(manifest["width"].is_u64());
    assert!(manifest["height"].is_u64());
    assert_eq!(manifest["width"], 300);
    assert_eq!(manifest["clickThrough"]["url"], "https://example.com/sale");
    assert_eq!(manifest["clickThrough"]["name"], "clickTag");
}

#[test]
fn xandr_has_no_manifest() {
    assert!(manifest_for(ExportPreset::Xandr, &inputs()).is_none());
}
