use salsa20_stream::xor_key_stream;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_salsa20(c: &mut Criterion) {
    let key = [0x42u8; 32];

    c.bench_function("salsa20 64 bytes", |b| {
        let input = [0u8; 64];
        let mut output = [0u8; 64];

        b.iter(|| {
            let mut nonce = [0u8; 16];
            xor_key_stream(black_box(&key), &mut nonce, black_box(&input), &mut output);
        })
    });

    c.bench_function("salsa20 1 KiB", |b| {
        let input = [0u8; 1024];
        let mut output = [0u8; 1024];

        b.iter(|| {
            let mut nonce = [0u8; 16];
            xor_key_stream(black_box(&key), &mut nonce, black_box(&input), &mut output);
        })
    });
}

criterion_group!(benches, bench_salsa20);
criterion_main!(benches);
