//! Benchmarks for the horizontal grid crate.
//!
//! Run with: cargo bench --package horizontal-grid
//! Or: cargo bench --package horizontal-grid --bench grid_benchmarks

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use horizontal_grid::definition::presets;
use horizontal_grid::{
    CrsCode, GridDefinition, HorizontalPosition, ProjectedGrid, ReferenceableAxis,
};
use projection::{PlateCarree, RotatedPole};

// =============================================================================
// AXIS LOOKUP BENCHMARKS
// =============================================================================

fn bench_axis_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_lookup");

    // Regular 1000-point axis
    let regular = ReferenceableAxis::regular(0.0, 0.25, 1000, false).unwrap();
    group.bench_function("find_index_regular_1000", |b| {
        b.iter(|| regular.find_index_of(black_box(123.4)))
    });

    group.bench_function("contains_regular_1000", |b| {
        b.iter(|| regular.contains(black_box(123.4)))
    });

    // Irregular spacing forces the full midpoint search
    let values: Vec<f64> = (0..1000)
        .map(|i| i as f64 + (i as f64 * 0.37).sin())
        .collect();
    let irregular = ReferenceableAxis::new(values, false).unwrap();
    group.bench_function("find_index_irregular_1000", |b| {
        b.iter(|| irregular.find_index_of(black_box(700.7)))
    });

    // Global longitude axis with a query needing wraparound
    let wrapping = ReferenceableAxis::regular(0.0, 1.0, 360, true).unwrap();
    group.bench_function("find_index_wrapped", |b| {
        b.iter(|| wrapping.find_index_of(black_box(725.3)))
    });

    group.finish();
}

// =============================================================================
// GRID QUERY BENCHMARKS
// =============================================================================

fn bench_grid_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_queries");

    // COSMO-EU sized rotated-pole grid, queries in grid coordinates
    let cosmo = ProjectedGrid::new(
        presets::cosmo_eu(),
        Arc::new(RotatedPole::new(-170.0, 40.0)),
    )
    .unwrap();
    group.bench_function("find_index_cosmo", |b| {
        b.iter(|| cosmo.find_index_of(black_box(&HorizontalPosition::lon_lat(2.5, 1.25))))
    });

    group.bench_function("contains_cosmo", |b| {
        b.iter(|| cosmo.contains(black_box(&HorizontalPosition::lon_lat(2.5, 1.25))))
    });

    // CONUS-like lat/lon grid queried in Web Mercator coordinates
    let conus = ProjectedGrid::new(
        GridDefinition::regular(-130.0, 0.1, 700, 20.0, 0.1, 350),
        Arc::new(PlateCarree::new()),
    )
    .unwrap();
    let mercator = HorizontalPosition::new(-10_853_650.0, 4_163_881.0, CrsCode::Epsg3857);
    group.bench_function("find_index_transformed_query", |b| {
        b.iter(|| conus.find_index_of(black_box(&mercator)))
    });

    // Typical multi-point sample
    let points = [
        HorizontalPosition::lon_lat(-97.5, 35.2),
        HorizontalPosition::lon_lat(-100.0, 40.0),
        HorizontalPosition::lon_lat(-85.5, 32.1),
        HorizontalPosition::lon_lat(-122.4, 37.8),
        HorizontalPosition::lon_lat(-77.0, 38.9),
    ];
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("find_index_batch_5", |b| {
        b.iter(|| {
            for point in &points {
                let _ = conus.find_index_of(black_box(point));
            }
        })
    });

    group.finish();
}

// =============================================================================
// CELL TABLE BENCHMARKS
// =============================================================================

fn bench_cell_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_table");

    // Full table build, identity projection
    let definition = GridDefinition::regular(0.0, 0.36, 100, -45.0, 0.9, 100);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("build_10k_cells_plate_carree", |b| {
        b.iter(|| {
            let grid =
                ProjectedGrid::new(definition.clone(), Arc::new(PlateCarree::new())).unwrap();
            grid.cells().count()
        })
    });

    // Full table build through the rotation matrices
    let rotated_definition = GridDefinition::regular(-5.0, 0.2, 50, -5.0, 0.2, 50);
    group.throughput(Throughput::Elements(2_500));
    group.bench_function("build_2500_cells_rotated_pole", |b| {
        b.iter(|| {
            let grid = ProjectedGrid::new(
                rotated_definition.clone(),
                Arc::new(RotatedPole::new(-170.0, 40.0)),
            )
            .unwrap();
            grid.cells().count()
        })
    });

    // Reads against an already built table
    let cached =
        ProjectedGrid::new(definition.clone(), Arc::new(PlateCarree::new())).unwrap();
    let _ = cached.cells().count();
    group.bench_function("cell_at_cached", |b| {
        b.iter(|| cached.cell_at(black_box(17), black_box(33)))
    });

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("enumerate_cached", |b| {
        b.iter(|| black_box(&cached).cells().count())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_axis_lookup,
    bench_grid_queries,
    bench_cell_table,
);
criterion_main!(benches);
