use box_picker::camera::{Camera, CameraConfig};
use box_picker::core::{PickingService, PointerState, Viewport};
use box_picker::math::{intersect_aabb, Ray};
use box_picker::scene::{GridLayout, ObjectRegistry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

fn grid_registry(side: usize) -> ObjectRegistry {
    let mut registry: ObjectRegistry = ObjectRegistry::default();
    GridLayout {
        counts: [side, side, side],
        ..GridLayout::default()
    }
    .populate(&mut registry);
    registry
}

fn bench_aabb_intersection(c: &mut Criterion) {
    let origin = Vec3::new(-10.0, 0.3, 0.2);
    let hit_dir = Vec3::X;
    let miss_dir = Vec3::NEG_X;
    let min = Vec3::splat(-0.5);
    let max = Vec3::splat(0.5);

    c.bench_function("aabb_intersection_hit", |b| {
        b.iter(|| intersect_aabb(black_box(origin), black_box(hit_dir), min, max))
    });
    c.bench_function("aabb_intersection_miss", |b| {
        b.iter(|| intersect_aabb(black_box(origin), black_box(miss_dir), min, max))
    });
}

fn bench_pick_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_grid");
    let camera = Camera::new(&CameraConfig::default(), 16.0 / 9.0);
    let viewport = Viewport::new(1280, 720);
    let mut pointer = PointerState::default();
    pointer.update(640.0, 360.0, viewport);

    for side in [5usize, 10, 20] {
        let registry = grid_registry(side);
        group.bench_with_input(BenchmarkId::from_parameter(side * side * side), &registry, |b, registry| {
            b.iter(|| PickingService.cast_ray(&camera, black_box(&pointer), registry.iter()))
        });
    }
    group.finish();
}

fn bench_pick_after_removals(c: &mut Criterion) {
    let mut registry = grid_registry(10);
    let handles: Vec<_> = registry.handles().collect();
    for handle in handles.iter().step_by(2) {
        registry.remove(*handle);
    }
    let ray = Ray::new(Vec3::new(-20.0, 3.0, 30.0), Vec3::new(20.0, -3.0, -30.0));

    c.bench_function("pick_half_removed_grid", |b| {
        b.iter(|| PickingService.nearest(black_box(&ray), registry.iter()))
    });
}

criterion_group!(benches, bench_aabb_intersection, bench_pick_grid, bench_pick_after_removals);
criterion_main!(benches);
