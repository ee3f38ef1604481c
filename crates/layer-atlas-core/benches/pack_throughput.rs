use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use layer_atlas_core::prelude::*;

fn generate_layers(count: usize, min_size: u32, max_size: u32) -> Vec<(String, u32, u32)> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xA71A5);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            (format!("layer_{}", i), w, h)
        })
        .collect()
}

fn bench_build_atlas(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_atlas");

    for count in [50, 100, 200] {
        let layers = generate_layers(count, 8, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("guillotine_grow", count),
            &layers,
            |b, layers| {
                b.iter(|| {
                    let atlas = build_atlas(layers.clone(), AtlasConfig::default()).unwrap();
                    black_box(atlas)
                });
            },
        );
    }

    group.finish();
}

fn bench_uv_mapping(c: &mut Criterion) {
    let layers = generate_layers(200, 8, 64);
    let atlas = build_atlas(layers, AtlasConfig::default()).unwrap();
    let uv = atlas.uv_transform();

    c.bench_function("uv_corners_200", |b| {
        b.iter(|| {
            for item in &atlas.items {
                black_box(item.uv_corners(&uv));
            }
        });
    });
}

criterion_group!(benches, bench_build_atlas, bench_uv_mapping);
criterion_main!(benches);
