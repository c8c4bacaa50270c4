//! Benchmarks for URL signing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thumbor_crypto::{sign, verify};

fn bench_sign(c: &mut Criterion) {
    let path = b"trim/-300x200/left/top/smart/filters:grayscale():format(webp)/http://myUrl/myimage.jpg";

    c.bench_function("sign_operation_path", |b| {
        b.iter(|| sign(black_box(path), black_box(b"secret_key")))
    });
}

fn bench_verify(c: &mut Criterion) {
    let path = b"300x300/http://myUrl/myimage.jpg";
    let token = "dDRIn5qUtwPceuMImU2cCkEGRec=";

    c.bench_function("verify_token", |b| {
        b.iter(|| verify(black_box(path), black_box(b"secret_key"), black_box(token)))
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
