use criterion::{criterion_group, criterion_main, Criterion};
use fgk::{compress, decompress, BitReader, BitWriter, FgkDecoder, FgkEncoder};

fn bench_symbol_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("fgk_stream");
    let input: Vec<u8> = (0..4000).map(|i| b"abracadabra"[i % 11]).collect();

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut encoder = FgkEncoder::new(8).unwrap();
            let mut writer = BitWriter::new();
            for &byte in &input {
                writer.extend(&encoder.encode_symbol(byte.into()).unwrap());
            }
            writer.finish()
        })
    });

    let mut encoder = FgkEncoder::new(8).unwrap();
    let mut writer = BitWriter::new();
    for &byte in &input {
        writer.extend(&encoder.encode_symbol(byte.into()).unwrap());
    }
    let packed = writer.finish();

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = FgkDecoder::new(8).unwrap();
            let mut reader = BitReader::new(&packed);
            for _ in 0..input.len() {
                decoder.decode_next(&mut reader).unwrap();
            }
        })
    });
}

fn bench_whole_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("fgk_whole");
    let input: Vec<u8> = (0..4000).map(|i| (i % 7) as u8 + b'a').collect();

    group.bench_function("compress", |b| b.iter(|| compress(&input, 8).unwrap()));

    let packed = compress(&input, 8).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| decompress(&packed, 8).unwrap())
    });
}

criterion_group!(benches, bench_symbol_stream, bench_whole_stream);
criterion_main!(benches);
