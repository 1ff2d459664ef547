//! Benchmarks for zget codec operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zget::protocol::{decode_reply, encode_request};

fn codec_benchmarks(c: &mut Criterion) {
    c.bench_function("encode_request", |b| {
        b.iter(|| encode_request(black_box("vm.guest.ip[vm-web-01]")).unwrap())
    });

    let small = encode_request("vm.powerstate[vm-web-01]").unwrap();
    c.bench_function("decode_reply_small", |b| {
        b.iter(|| decode_reply(black_box(&small)).unwrap())
    });

    // A discovery reply is typically a few hundred KB of JSON
    let mut large = Vec::from(b"ZBXD\x01".as_slice());
    let payload = vec![b'x'; 256 * 1024];
    large.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    large.extend_from_slice(&payload);
    c.bench_function("decode_reply_256k", |b| {
        b.iter(|| decode_reply(black_box(&large)).unwrap())
    });

    let legacy = vec![b'y'; 1024];
    c.bench_function("decode_reply_legacy", |b| {
        b.iter(|| decode_reply(black_box(&legacy)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
