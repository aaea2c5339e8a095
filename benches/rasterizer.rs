use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wirecube::render::framebuffer::PixelBuffer;
use wirecube::render::raster;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffer() -> PixelBuffer {
    PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT).unwrap()
}

fn benchmark_fill_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_rect");

    for (name, rect) in [
        ("small", (100, 100, 120, 120)),
        ("medium", (100, 100, 300, 300)),
        ("large", (50, 50, 750, 550)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &rect, |b, &(x1, y1, x2, y2)| {
            let mut buffer = create_buffer();
            b.iter(|| {
                raster::fill_rect(
                    &mut buffer,
                    black_box(x1),
                    black_box(y1),
                    black_box(x2),
                    black_box(y2),
                    0xFFFF0000,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_draw_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    for (name, line) in [
        ("horizontal", (0, 300, 799, 300)),
        ("diagonal", (0, 0, 599, 599)),
        ("steep", (400, 0, 420, 599)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &line, |b, &(x1, y1, x2, y2)| {
            let mut buffer = create_buffer();
            b.iter(|| {
                raster::draw_line(
                    &mut buffer,
                    black_box(x1),
                    black_box(y1),
                    black_box(x2),
                    black_box(y2),
                    0xFFFFFFFF,
                );
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_fill_rect, benchmark_draw_line);
criterion_main!(benches);
