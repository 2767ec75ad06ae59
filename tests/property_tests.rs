use fgk::{compress, decompress, FgkDecoder, FgkEncoder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_arbitrary_bytes(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let packed = compress(&input, 8).unwrap();
        let unpacked = decompress(&packed, 8).unwrap();
        prop_assert_eq!(input, unpacked);
    }

    #[test]
    fn roundtrip_printable_text_at_width_7(
        input in prop::collection::vec(0x20u8..0x7f, 0..200),
    ) {
        let packed = compress(&input, 7).unwrap();
        let unpacked = decompress(&packed, 7).unwrap();
        prop_assert_eq!(input, unpacked);
    }

    #[test]
    fn trees_stay_valid_and_synchronized(
        input in prop::collection::vec(0u16..64, 1..150),
    ) {
        let mut encoder = FgkEncoder::new(6).unwrap();
        let mut decoder = FgkDecoder::new(6).unwrap();
        for &symbol in &input {
            let code = encoder.encode_symbol(symbol).unwrap();
            encoder.tree().check_invariants().unwrap();

            let code_len = code.len();
            let mut source = code.into_iter();
            let (decoded, consumed) = decoder.decode_next(&mut source).unwrap();
            decoder.tree().check_invariants().unwrap();

            // the decoder consumes exactly the bits the encoder produced...
            prop_assert_eq!(decoded, symbol);
            prop_assert_eq!(consumed, code_len);
            prop_assert!(source.next().is_none());
            // ...and both sides hold structurally identical trees
            prop_assert_eq!(encoder.tree().profile(), decoder.tree().profile());
        }
    }

    #[test]
    fn truncation_is_always_an_error(input in prop::collection::vec(any::<u8>(), 1..64)) {
        let packed = compress(&input, 8).unwrap();
        // keep the count header honest but halve the body; at least one
        // real code bit is always lost since padding never reaches 8 bits
        let mut cut = packed.clone();
        cut.truncate(8 + (packed.len() - 8) / 2);
        prop_assert!(decompress(&cut, 8).is_err());
    }
}
