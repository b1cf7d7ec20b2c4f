use bannerkit_timeline_core::{
    plan_frames, plan_to_json, sample_pose, AnimationSetting, Asset, BannerData, CaptureConfig,
    ExportPreset, Geometry, InStyle, LayerKind, MidStyle, OutStyle, Phase,
};

fn mk_banner(duration_ms: f32) -> BannerData {
    let asset = Asset {
        id: "hero".to_string(),
        name: "Hero".to_string(),
        kind: LayerKind::Image,
        geometry: Geometry {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 250.0,
        },
    };
    let setting = AnimationSetting {
        asset_id: "hero".to_string(),
        r#in: Phase {
            style: InStyle::FadeIn,
            delay_ms: 0.0,
            duration_ms: 1000.0,
            easing: "ease-in-out".to_string(),
            params: Default::default(),
        },
        mid: Phase {
            style: MidStyle::None,
            ..Default::default()
        },
        out: Phase {
            style: OutStyle::None,
            ..Default::default()
        },
    };
    BannerData {
        name: "capture".to_string(),
        width: 300,
        height: 250,
        background_color: "#ffffff".to_string(),
        click_url: "https://example.com".to_string(),
        loop_enabled: false,
        duration_ms,
        settings: vec![setting],
        assets: vec![asset],
        preset: ExportPreset::Iab,
    }
}

#[test]
fn frame_count_is_floor_of_duration_over_step() {
    let banner = mk_banner(1000.0);
    let plan = plan_frames(&banner, &CaptureConfig { frame_step_ms: 33.0 });
    assert_eq!(plan.frames.len(), 30); // floor(1000 / 33)
    assert_eq!(plan.frames[0].time_ms, 0.0);
    assert_eq!(plan.frames[1].time_ms, 33.0);
}

#[test]
fn planned_poses_match_direct_sampling() {
    let banner = mk_banner(2000.0);
    let plan = plan_frames(&banner, &CaptureConfig::default());
    let layers = banner.resolved_layers();
    for frame in &plan.frames {
        for (pose, (setting, asset)) in frame.poses.iter().zip(layers.iter()) {
            assert_eq!(pose.pose, sample_pose(setting, asset, frame.time_ms));
        }
    }
}

#[test]
fn unknown_asset_settings_are_dropped_from_frames() {
    let mut banner = mk_banner(1000.0);
    let mut ghost = banner.settings[0].clone();
    ghost.asset_id = "missing".to_string();
    banner.settings.push(ghost);
    let plan = plan_frames(&banner, &CaptureConfig::default());
    assert!(plan.frames.iter().all(|f| f.poses.len() == 1));
}

#[test]
fn invalid_step_falls_back_to_default() {
    let banner = mk_banner(330.0);
    let plan = plan_frames(&banner, &CaptureConfig { frame_step_ms: 0.0 });
    assert_eq!(plan.frame_step_ms, 33.0);
    assert_eq!(plan.frames.len(), 10);
}

#[test]
fn plan_serializes_to_stable_json() {
    let banner = mk_banner(100.0);
    let plan = plan_frames(&banner, &CaptureConfig::default());
    let json = plan_to_json(&plan);
    assert_eq!(json["frameStepMs"], 33.0);
    assert_eq!(json["frames"][0]["poses"][0]["assetId"], "hero");
    assert!(json["frames"][0]["poses"][0]["pose"]["opacity"].is_number());
}
