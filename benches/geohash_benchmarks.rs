use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geocell::{Direction, Point, codec, distance, hash_and_neighbours, neighbour};

fn sample_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let lat = -80.0 + (i as f64 * 0.731) % 160.0;
            let lng = -179.0 + (i as f64 * 1.379) % 358.0;
            Point::new(lat, lng)
        })
        .collect()
}

fn benchmark_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode");
    let points = sample_points(1000);

    for precision in [20u8, 40, 60] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                let mut i = 0;
                b.iter(|| {
                    let hash = codec::encode(black_box(&points[i % points.len()]), precision);
                    i += 1;
                    hash
                })
            },
        );
    }

    let texts: Vec<String> = points
        .iter()
        .map(|p| codec::encode(p, 60).text().to_string())
        .collect();

    group.bench_function("decode_12_chars", |b| {
        let mut i = 0;
        b.iter(|| {
            let point = codec::decode(black_box(&texts[i % texts.len()])).unwrap();
            i += 1;
            point
        })
    });

    group.finish();
}

fn benchmark_neighbours(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbours");
    let points = sample_points(1000);

    group.bench_function("neighbour_north", |b| {
        b.iter(|| neighbour(black_box("ub188qkx0n18"), Direction::North).unwrap())
    });

    // Worst case: every character is on a border, so the carry reaches the root.
    group.bench_function("neighbour_full_carry", |b| {
        b.iter(|| neighbour(black_box("zzzzzzzzzzzz"), Direction::East).unwrap())
    });

    group.bench_function("hash_and_neighbours_40", |b| {
        let mut i = 0;
        b.iter(|| {
            let cells = hash_and_neighbours(Some(black_box(&points[i % points.len()])), 40);
            i += 1;
            cells
        })
    });

    group.finish();
}

fn benchmark_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let points = sample_points(1000);

    group.bench_function("haversine", |b| {
        let mut i = 0;
        b.iter(|| {
            let d = distance(
                black_box(&points[i % points.len()]),
                black_box(&points[(i + 1) % points.len()]),
            );
            i += 1;
            d
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_decode,
    benchmark_neighbours,
    benchmark_distance
);

criterion_main!(benches);
