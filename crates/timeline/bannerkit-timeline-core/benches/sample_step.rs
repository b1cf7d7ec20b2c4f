use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bannerkit_timeline_core::{plan_frames, sample_pose, BannerData, CaptureConfig};

fn load_showcase() -> BannerData {
    bannerkit_test_fixtures::banners::load("showcase").expect("showcase fixture should load")
}

fn bench_sample_pose(c: &mut Criterion) {
    let banner = load_showcase();
    let layers = banner.resolved_layers();
    c.bench_function("sample_pose_all_layers_90_frames", |b| {
        b.iter(|| {
            for frame in 0..90u32 {
                let t = frame as f32 * 33.0;
                for (setting, asset) in &layers {
                    black_box(sample_pose(setting, asset, black_box(t)));
                }
            }
        })
    });
}

fn bench_plan_frames(c: &mut Criterion) {
    let banner = load_showcase();
    let cfg = CaptureConfig::default();
    c.bench_function("plan_frames_showcase_30fps", |b| {
        b.iter(|| black_box(plan_frames(black_box(&banner), &cfg)))
    });
}

criterion_group!(benches, bench_sample_pose, bench_plan_frames);
criterion_main!(benches);
