use criterion::{criterion_group, criterion_main, Criterion};
use cursorshot::capture::packed_to_rgba;

fn bench_packed_to_rgba(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let data = vec![128u8; width * height * 4];

    c.bench_function("convert_1080p_frame", |b| {
        b.iter(|| {
            let _ = packed_to_rgba(&data, width * height).expect("convert frame");
        })
    });
}

criterion_group!(benches, bench_packed_to_rgba);
criterion_main!(benches);
