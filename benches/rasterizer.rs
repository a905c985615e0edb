use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use halftone::bench::{DitherRasterizer, FrameBuffer, Rasterizer, Triangle};
use halftone::default_model::TORUS_WRL;
use halftone::light::DirectionalLight;
use halftone::math::vec2::Vec2;
use halftone::pipeline;
use halftone::{Model, Projection, RotationState};

const BUFFER_WIDTH: u32 = 320;
const BUFFER_HEIGHT: u32 = 240;
const COLOR: u32 = 0xFF70C6A9;

fn create_buffer() -> Vec<u32> {
    vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize]
}

fn triangle(points: [(f32, f32); 3], brightness: f32) -> Triangle {
    Triangle::new(points.map(|(x, y)| Vec2::new(x, y)), brightness, 0.0)
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)], 0.6)
}

fn medium_triangle() -> Triangle {
    triangle([(40.0, 40.0), (200.0, 40.0), (120.0, 180.0)], 0.6)
}

fn large_triangle() -> Triangle {
    triangle([(0.0, 0.0), (319.0, 20.0), (160.0, 239.0)], 0.6)
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let rasterizer = DitherRasterizer::new();

    for (name, tri) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("dither", name), &tri, |b, tri| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(tri), &mut fb, COLOR);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let rasterizer = DitherRasterizer::new();

    // A grid of small triangles sweeping the whole brightness range
    let triangles: Vec<Triangle> = (0..16)
        .flat_map(|row| {
            (0..16).map(move |col| {
                let x = col as f32 * 20.0;
                let y = row as f32 * 15.0;
                triangle(
                    [(x, y), (x + 18.0, y), (x + 9.0, y + 13.0)],
                    (row * 16 + col) as f32 / 255.0,
                )
            })
        })
        .collect();

    group.bench_function("dither_256_triangles", |b| {
        let mut buffer = create_buffer();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut fb, COLOR);
            }
        });
    });

    group.finish();
}

fn benchmark_torus_frame(c: &mut Criterion) {
    let model = Model::load(TORUS_WRL, 50.0).expect("built-in torus parses");
    let projection = Projection::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let light = DirectionalLight::default();
    let rotation = RotationState::new(0.7, 0.4);

    c.bench_function("torus_frame", |b| {
        let mut buffer = create_buffer();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            pipeline::render(
                black_box(&model),
                &rotation,
                &projection,
                &light,
                COLOR,
                &mut fb,
            )
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_torus_frame
);
criterion_main!(benches);
