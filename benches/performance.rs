use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hs_histogram::{compute_hs_histogram, render_histogram, BgrImage, HsHistogram};

fn bench_histogram(c: &mut Criterion) {
    let test_image = BgrImage::from_rgb(&image::RgbImage::from_fn(1920, 1080, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));

    c.bench_function("hs_histogram_1920x1080", |b| {
        b.iter(|| {
            let _result = compute_hs_histogram(black_box(&test_image));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut histogram = HsHistogram::new();
    for h in 0..30 {
        for s in 0..32 {
            histogram.set(h, s, (h * s) as f64);
        }
    }

    c.bench_function("render_histogram", |b| {
        b.iter(|| {
            let _result = render_histogram(black_box(&histogram));
        })
    });
}

criterion_group!(benches, bench_histogram, bench_render);
criterion_main!(benches);
