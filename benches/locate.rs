use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tomoscan::locator::locate_code;
use tomoscan::models::{Image, Mono};
use tomoscan::threshold::otsu_binarize;
use tomoscan::tomography::{project, project_parallel};

fn scan_with_band(width: usize, height: usize) -> Image<Mono> {
    let mut img = Image::from_raw(width, height, vec![Mono::WHITE; width * height]);
    let top = height / 3;
    for y in top..top + height / 4 {
        for x in 0..width {
            img.set(x, y, Mono::BLACK);
        }
    }
    img
}

fn bench_projection(c: &mut Criterion) {
    let img = scan_with_band(1212, 428);
    c.bench_function("tomography_project_1212x428", |b| {
        b.iter(|| project(black_box(&img), black_box(0.01)))
    });
    c.bench_function("tomography_project_parallel_1212x428", |b| {
        b.iter(|| project_parallel(black_box(&img), black_box(0.01)))
    });
}

fn bench_locate(c: &mut Criterion) {
    let img = scan_with_band(1212, 428);
    c.bench_function("locate_code_1212x428_m10", |b| {
        b.iter(|| locate_code(black_box(&img), black_box(10), black_box(107)))
    });
}

fn bench_otsu(c: &mut Criterion) {
    let img = scan_with_band(640, 480);
    c.bench_function("otsu_binarize_640x480", |b| {
        b.iter(|| otsu_binarize(black_box(&img)))
    });
}

criterion_group!(benches, bench_projection, bench_locate, bench_otsu);
criterion_main!(benches);
