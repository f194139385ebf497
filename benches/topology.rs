//! Benchmarks for the topology pipeline
//!
//! Measures candidate graph construction and the full pipeline on
//! synthetic clustered clouds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Point3;
use puncta_topology::{analyze, build_neighbor_graph, PointCloud, TopologyConfig};

/// Deterministic clustered cloud: `clusters` blobs of `per_cluster` points
/// scattered with a cheap trig scatter (no RNG so runs are comparable).
fn clustered_cloud(clusters: usize, per_cluster: usize) -> PointCloud {
    let mut points = Vec::with_capacity(clusters * per_cluster);
    for c in 0..clusters {
        let base = Point3::new(
            (c % 10) as f32 * 25.0,
            (c / 10) as f32 * 25.0,
            (c % 3) as f32 * 15.0,
        );
        for k in 0..per_cluster {
            let t = k as f32 * 0.618;
            points.push(Point3::new(
                base.x + t.cos() * 3.0 + (t * 7.0).sin(),
                base.y + t.sin() * 3.0 + (t * 5.0).cos(),
                base.z + (t * 0.37).sin() * 3.0,
            ));
        }
    }
    PointCloud::new(points)
}

fn benchmark_neighbor_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_graph");
    let config = TopologyConfig {
        max_neighbors: 20,
        max_radius: 5.0,
        ..TopologyConfig::default()
    };

    for &n in &[1_000usize, 10_000] {
        let cloud = clustered_cloud(n / 100, 100);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cloud, |b, cloud| {
            b.iter(|| build_neighbor_graph(black_box(cloud), &config).unwrap());
        });
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = TopologyConfig {
        max_neighbors: 20,
        max_radius: 5.0,
        min_group_size: 10,
        ..TopologyConfig::default()
    };

    let cloud = clustered_cloud(100, 100);
    group.bench_function("10k_points", |b| {
        b.iter(|| analyze(black_box(&cloud), &config).unwrap());
    });
    group.finish();
}

criterion_group!(benches, benchmark_neighbor_graph, benchmark_full_pipeline);
criterion_main!(benches);
