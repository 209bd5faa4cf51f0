use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scan_annotation_editor::{
    core::geometry, Annotation, AnnotationKind, MarkerIndex, Measurement, MeasurementKind,
    MeasurementUnit,
};
use std::hint::black_box;

fn build_polyline(point_count: usize) -> Vec<Vec3> {
    (0..point_count)
        .map(|i| {
            let t = i as f32 * 0.37;
            Vec3::new(t.sin() * 5.0, t * 0.01, t.cos() * 5.0)
        })
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for count in [8usize, 256, 4096] {
        let points = build_polyline(count);
        group.bench_with_input(
            BenchmarkId::new("polyline_length", count),
            &points,
            |b, points| b.iter(|| black_box(geometry::polyline_length(black_box(points)))),
        );
        group.bench_with_input(BenchmarkId::new("fan_area", count), &points, |b, points| {
            b.iter(|| black_box(geometry::fan_area(black_box(points))))
        });
    }

    group.finish();
}

fn build_entities(measurement_count: usize) -> (Vec<Measurement>, Vec<Annotation>) {
    let measurements = (0..measurement_count)
        .map(|i| {
            let base = Vec3::new((i % 100) as f32, 0.0, (i / 100) as f32);
            Measurement::new(
                i as u64 + 1,
                MeasurementKind::Distance,
                vec![base, base + Vec3::X, base + Vec3::new(1.0, 0.0, 1.0)],
                MeasurementUnit::Meters,
                "bench".into(),
                0.0,
            )
        })
        .collect();
    let annotations = (0..measurement_count / 4)
        .map(|i| {
            Annotation::new(
                100_000 + i as u64,
                AnnotationKind::Pin,
                Vec3::new((i % 50) as f32 + 0.5, 1.0, (i / 50) as f32),
                String::new(),
                "bench".into(),
                0.0,
            )
        })
        .collect();
    (measurements, annotations)
}

fn bench_marker_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_index");

    for count in [100usize, 1000] {
        let (measurements, annotations) = build_entities(count);

        group.bench_with_input(
            BenchmarkId::new("rebuild", count),
            &(&measurements, &annotations),
            |b, (measurements, annotations)| {
                b.iter(|| {
                    black_box(MarkerIndex::from_entities(
                        measurements.iter(),
                        annotations.iter(),
                    ))
                })
            },
        );

        let index = MarkerIndex::from_entities(measurements.iter(), annotations.iter());
        let queries: Vec<Vec3> = (0..64)
            .map(|i| Vec3::new((i * 7 % 100) as f32 + 0.3, 0.2, (i * 13 % 10) as f32))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("nearest", count),
            &(&index, &queries),
            |b, (index, queries)| {
                b.iter(|| {
                    for q in queries.iter() {
                        black_box(index.nearest(black_box(*q)));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_marker_index);
criterion_main!(benches);
