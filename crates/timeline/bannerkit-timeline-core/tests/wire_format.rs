use bannerkit_timeline_core::{BannerData, ExportPreset, InStyle, MidStyle, OutStyle};

#[test]
fn single_fade_fixture_parses() {
    let banner: BannerData =
        bannerkit_test_fixtures::banners::load("single-fade").expect("fixture should parse");
    assert_eq!(banner.width, 300);
    assert_eq!(banner.height, 250);
    assert_eq!(banner.preset, ExportPreset::Iab);
    assert_eq!(banner.settings.len(), 1);
    let setting = &banner.settings[0];
    assert_eq!(setting.r#in.style, InStyle::FadeIn);
    assert_eq!(setting.r#in.duration_ms, 1000.0);
    assert_eq!(setting.mid.style, MidStyle::None);
    assert_eq!(setting.out.style, OutStyle::None);
    banner.validate_basic().expect("fixture should validate");
}

#[test]
fn showcase_fixture_parses_custom_and_attention_phases() {
    let banner: BannerData =
        bannerkit_test_fixtures::banners::load("showcase").expect("fixture should parse");
    assert_eq!(banner.preset, ExportPreset::GoogleAds);
    assert!(banner.loop_enabled);

    let badge = banner
        .settings
        .iter()
        .find(|s| s.asset_id == "badge")
        .expect("badge setting");
    assert_eq!(badge.r#in.style, InStyle::Custom);
    assert_eq!(badge.r#in.params.y, Some(-45.0));
    assert_eq!(badge.r#in.params.scale, Some(0.5));
    assert_eq!(badge.mid.style, MidStyle::Shake);
    assert_eq!(badge.mid.params.intensity, Some(1.1));

    // One setting references an unknown asset and must drop out.
    assert_eq!(banner.settings.len(), 5);
    assert_eq!(banner.resolved_layers().len(), 4);
}

#[test]
fn banner_round_trips_through_json() {
    let banner: BannerData =
        bannerkit_test_fixtures::banners::load("showcase").expect("fixture should parse");
    let text = serde_json::to_string(&banner).expect("serialize");
    let back: BannerData = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(banner, back);
}

#[test]
fn validate_basic_rejects_bad_shapes() {
    let mut banner: BannerData =
        bannerkit_test_fixtures::banners::load("single-fade").expect("fixture should parse");
    banner.duration_ms = 0.0;
    assert!(banner.validate_basic().is_err());

    let mut banner: BannerData =
        bannerkit_test_fixtures::banners::load("single-fade").expect("fixture should parse");
    banner.settings[0].r#in.delay_ms = f32::NAN;
    assert!(banner.validate_basic().is_err());
}
