//! Criterion micro-benchmarks for region and lattice operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use detgeom_bench::sample_points;
use detgeom_csg::{rectangular_prism, slab, Axis, BoundaryType, BoundingBox, Region};
use detgeom_test_utils::lattice_column;

fn block(x: f64) -> Region {
    rectangular_prism(0.35, 0.175, [x, 0.0, 0.0], BoundaryType::Transmission).unwrap()
        & slab(Axis::Z, -0.175, 0.175, BoundaryType::Transmission).unwrap()
}

/// Benchmark: bounding box of a union of 64 blocks with the domain cut out.
fn bench_bounding_box_union_64(c: &mut Criterion) {
    let column = (1..64).fold(block(0.0), |acc, i| acc | block(i as f64));
    let domain = rectangular_prism(1000.0, 1000.0, [0.0; 3], BoundaryType::Vacuum).unwrap();
    let region = domain & !column;

    c.bench_function("bounding_box_union_64", |b| {
        b.iter(|| black_box(region.bounding_box()));
    });
}

/// Benchmark: point membership for 10K points against one detector block.
fn bench_contains_block_10k(c: &mut Criterion) {
    let region = block(0.0);
    let points = sample_points(
        &BoundingBox::new([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]),
        10_000,
        42,
    );

    c.bench_function("contains_block_10k", |b| {
        b.iter(|| points.iter().filter(|&&p| region.contains(p)).count());
    });
}

/// Benchmark: place() over every element of a 10K-element lattice.
fn bench_lattice_place_10k(c: &mut Criterion) {
    let f = lattice_column(10_000);
    let lattice = f.geometry.lattice(f.lattice).unwrap();
    let indices: Vec<_> = lattice.indices().collect();

    c.bench_function("lattice_place_10k", |b| {
        b.iter(|| {
            for index in &indices {
                black_box(lattice.place(index).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_bounding_box_union_64,
    bench_contains_block_10k,
    bench_lattice_place_10k
);
criterion_main!(benches);
