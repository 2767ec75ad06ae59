#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let packed = fgk::compress(data, 8).unwrap();
    let unpacked = fgk::decompress(&packed, 8).unwrap();
    assert_eq!(data, unpacked.as_slice());
});
