use criterion::{Criterion, criterion_group, criterion_main};
use kundali_layout::api::{ChartInput, ChartLayoutConfig, ChartLayoutEngine};
use kundali_layout::core::{
    Ascendant, Body, DisplayConvention, DisplayMode, HouseCusps, house_for_longitude,
};
use kundali_layout::render::NullRenderer;
use std::hint::black_box;

fn sample_chart(seed: usize) -> ChartInput {
    let bodies = (0..9)
        .map(|i| Body::natal(format!("B{i}"), ((seed * 13 + i * 41) % 360) as f64 + 0.5))
        .collect();
    let transits = (0..9)
        .map(|i| Body::transit(format!("T{i}"), ((seed * 7 + i * 29) % 360) as f64 + 0.25))
        .collect();
    let ascendant = Ascendant::from_index(Some((seed % 12) as u8)).expect("ascendant");
    ChartInput::new(ascendant, bodies)
        .with_transits(transits)
        .with_cusps(HouseCusps::equal_from((seed % 30) as f64).expect("cusps"))
}

fn bench_cusp_lookup(c: &mut Criterion) {
    let cusps = [
        355.0, 28.0, 57.0, 85.0, 114.0, 146.0, 175.0, 208.0, 237.0, 265.0, 294.0, 326.0,
    ];

    c.bench_function("cusp_lookup", |b| {
        b.iter(|| {
            let _ = house_for_longitude(black_box(301.25), black_box(&cusps)).expect("house");
        })
    });
}

fn bench_layout_1k_charts(c: &mut Criterion) {
    let engine = ChartLayoutEngine::new(ChartLayoutConfig::new(
        DisplayConvention::NorthIndian,
        DisplayMode::BhavaChalit,
    ))
    .expect("engine init");
    let charts: Vec<ChartInput> = (0..1_000).map(sample_chart).collect();

    c.bench_function("layout_1k_charts", |b| {
        b.iter(|| {
            let _ = engine
                .layout_batch(black_box(&charts))
                .expect("layout should succeed");
        })
    });
}

fn bench_render_south_indian(c: &mut Criterion) {
    let engine = ChartLayoutEngine::new(ChartLayoutConfig::new(
        DisplayConvention::SouthIndian,
        DisplayMode::Rashi,
    ))
    .expect("engine init");
    let chart = sample_chart(7);
    let mut renderer = NullRenderer::default();

    c.bench_function("render_south_indian", |b| {
        b.iter(|| {
            let _ = engine
                .render(&mut renderer, black_box(&chart))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_cusp_lookup,
    bench_layout_1k_charts,
    bench_render_south_indian
);
criterion_main!(benches);
