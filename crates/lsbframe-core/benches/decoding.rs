use criterion::{criterion_group, criterion_main, Criterion};
use lsbframe_core::{decode, encode};

pub fn frame_decoding(c: &mut Criterion) {
    c.bench_function("Frame Decoding", |b| {
        let mut carrier = vec![0xaa_u8; 1 << 20];
        encode(&mut carrier, &vec![b'x'; 100_000]).expect("Cannot hide secret message");

        b.iter(|| {
            decode(&carrier).expect("Cannot unveil secret message");
        })
    });
}

criterion_group!(benches, frame_decoding);
criterion_main!(benches);
