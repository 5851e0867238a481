//! Benchmarks for laying out and fitting turtle text

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quill_turtle::{RecordingTurtle, TextStyle, TextWriter};

const TEXTS: [(&str, &str); 3] = [
    ("short", "ABC"),
    ("phrase", "THE GREAT SEAL"),
    ("pangram", "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"),
];

fn bench_solve_radius(c: &mut Criterion) {
    let writer = TextWriter::new(TextStyle::default());
    let mut group = c.benchmark_group("solve_radius");

    for (name, text) in TEXTS {
        for extent in [90.0, 180.0, 360.0] {
            group.bench_with_input(
                BenchmarkId::new(name, extent as u32),
                &extent,
                |b, &extent| {
                    b.iter(|| black_box(writer.solve_radius(black_box(text), extent, true)));
                },
            );
        }
    }

    group.finish();
}

fn bench_straight_text(c: &mut Criterion) {
    let writer = TextWriter::new(TextStyle::default());
    let mut group = c.benchmark_group("straight_text");

    for (name, text) in TEXTS {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut turtle = RecordingTurtle::new();
                writer.text(&mut turtle, black_box(text)).unwrap();
                black_box(turtle.commands().len())
            });
        });
    }

    group.finish();
}

fn bench_circle_text(c: &mut Criterion) {
    let writer = TextWriter::new(TextStyle::new(40.0));
    let mut group = c.benchmark_group("circle_text");

    for (name, text) in TEXTS {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut turtle = RecordingTurtle::new();
                writer.text_circle(&mut turtle, black_box(text), None).unwrap();
                black_box(turtle.commands().len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_solve_radius,
    bench_straight_text,
    bench_circle_text
);
criterion_main!(benches);
